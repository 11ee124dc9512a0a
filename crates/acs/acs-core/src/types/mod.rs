//! Identifier and verdict types shared across the ACS crates.

pub mod arch;
pub mod module_id;
pub mod rule_id;
pub mod statistics;
pub mod status;

pub use arch::{Arch, LevelFilterMode, SoftwareView};
pub use module_id::ModuleId;
pub use rule_id::{RuleId, UnknownRuleId};
pub use statistics::RunStatistics;
pub use status::{Platform, Platforms, RuleStatus, Support};
