//! Error handling for the ACS engine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod el3_error;
pub mod error_code;
pub mod parse_error;
pub mod pe_error;
pub mod selection_error;

pub use config_error::ConfigError;
pub use el3_error::El3Error;
pub use error_code::AcsErrorCode;
pub use parse_error::ParseError;
pub use pe_error::PeError;
pub use selection_error::SelectionError;
