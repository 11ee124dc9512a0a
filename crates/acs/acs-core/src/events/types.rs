//! Event payload types.

use crate::types::{ModuleId, Platform, RuleId, RuleStatus, RunStatistics};

/// Payload for `on_run_started`.
#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub rule_count: usize,
    pub num_pe: usize,
    pub platform: Platform,
}

/// Payload for `on_rule_started`.
#[derive(Debug, Clone)]
pub struct RuleStartedEvent {
    pub rule: RuleId,
    /// `None` for a rule with no catalog entry.
    pub module: Option<ModuleId>,
    pub description: &'static str,
    /// 0 for a top-level rule, 1 for a base rule run through an alias.
    pub depth: usize,
}

/// Payload for `on_rule_completed`.
#[derive(Debug, Clone)]
pub struct RuleCompletedEvent {
    pub rule: RuleId,
    pub status: RuleStatus,
    pub depth: usize,
}

/// Payload for `on_pe_timeout`.
#[derive(Debug, Clone)]
pub struct PeTimeoutEvent {
    pub test_id: u16,
    pub pe_index: usize,
}

/// Payload for `on_pe_failure`: the PE and checkpoint behind a FAIL or SKIP.
#[derive(Debug, Clone)]
pub struct PeFailureEvent {
    pub test_id: u16,
    pub pe_index: usize,
    pub checkpoint: u16,
    pub status: RuleStatus,
}

/// Payload for `on_token_rejected`.
#[derive(Debug, Clone)]
pub struct TokenRejectedEvent {
    /// "rule" or "module".
    pub kind: &'static str,
    pub token: String,
}

/// Payload for `on_run_completed`.
#[derive(Debug, Clone)]
pub struct RunCompletedEvent {
    pub statistics: RunStatistics,
}
