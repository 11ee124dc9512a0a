//! Orchestrator: walks the final rule list, expands aliases, runs test
//! entries, and keeps run statistics.

pub mod registry;
pub mod runner;

pub use registry::{PayloadTest, RuleContext, RuleTest, TestRegistry};
pub use runner::{Orchestrator, RuleOutcome, RunReport};
