//! Observability for the ACS engine.
//! `tracing` with an `EnvFilter` read from `ACS_LOG`.

pub mod setup;

pub use setup::init_tracing;
