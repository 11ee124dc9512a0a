//! acs-engine: rule selection and PE orchestration for the ACS suite
//!
//! - Catalog: per-architecture checklists, module/test entry table, aliases
//! - Gate: module enablement, EL3 parameter block, module init cache
//! - Selection: expands and filters the rule list
//! - PE: fan-out/fan-in rendezvous, host thread cluster, status aggregation
//! - Orchestrator: dispatches rules and keeps run statistics
//! - Report: console and JSON output

pub mod catalog;
pub mod gate;
pub mod orchestrator;
pub mod pe;
pub mod report;
pub mod selection;

pub use catalog::RuleCatalog;
pub use gate::ModuleGate;
pub use orchestrator::{Orchestrator, RunReport, TestRegistry};
pub use selection::{filter_rule_list, SelectionContext};
