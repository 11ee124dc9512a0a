//! Run lifecycle events.
//! Handlers see every rule start/finish, PE timeout, and rejected token.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::AcsEventHandler;
pub use types::*;
