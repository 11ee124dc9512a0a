//! AcsEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling run events.
///
/// Handlers override only the events they care about. `Send + Sync` is
/// required because the PE cluster reports timeouts from the primary while
/// secondaries are still running.
pub trait AcsEventHandler: Send + Sync {
    // ---- Run lifecycle ----
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_run_completed(&self, _event: &RunCompletedEvent) {}

    // ---- Rules ----
    fn on_rule_started(&self, _event: &RuleStartedEvent) {}
    fn on_rule_completed(&self, _event: &RuleCompletedEvent) {}

    // ---- PEs ----
    fn on_pe_timeout(&self, _event: &PeTimeoutEvent) {}
    fn on_pe_failure(&self, _event: &PeFailureEvent) {}

    // ---- Input ----
    fn on_token_rejected(&self, _event: &TokenRejectedEvent) {}
}
