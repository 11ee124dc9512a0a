//! Configuration system for the ACS engine.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.
//! `SelectionConfig` is the typed, resolved view the engine consumes.

pub mod acs_config;
pub mod pe_config;
pub mod rules_config;
pub mod run_config;
pub mod selection_config;

pub use acs_config::{AcsConfig, CliOverrides};
pub use pe_config::PeConfig;
pub use rules_config::RulesConfig;
pub use run_config::{ReportFormat, RunConfig};
pub use selection_config::{RejectedToken, SelectionConfig};
