//! acs-core: shared foundation for the ACS rule engine
//!
//! This crate holds everything the engine and the front ends agree on:
//! - Types: rule, module, architecture, level, and status identifiers
//! - Errors: one thiserror enum per subsystem plus the `AcsErrorCode` trait
//! - Config: layered `AcsConfig` and the resolved `SelectionConfig`
//! - Parse: rule/module token lists and rules files
//! - Events: run lifecycle handler trait and dispatcher
//! - Tracing: `ACS_LOG`-driven subscriber setup
//! - Constants: EL3 block identity, timeouts, level bounds

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod parse;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::{AcsConfig, SelectionConfig};
pub use types::{Arch, LevelFilterMode, ModuleId, RuleId, RuleStatus, SoftwareView};
