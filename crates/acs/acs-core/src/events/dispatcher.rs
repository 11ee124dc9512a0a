//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::AcsEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn AcsEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn AcsEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn AcsEventHandler)>(&self, f: F) {
        for (index, handler) in self.handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(target: "acs::events", handler = index, "event handler panicked");
            }
        }
    }

    // ---- Run lifecycle ----
    pub fn emit_run_started(&self, event: &RunStartedEvent) {
        self.emit(|h| h.on_run_started(event));
    }

    pub fn emit_run_completed(&self, event: &RunCompletedEvent) {
        self.emit(|h| h.on_run_completed(event));
    }

    // ---- Rules ----
    pub fn emit_rule_started(&self, event: &RuleStartedEvent) {
        self.emit(|h| h.on_rule_started(event));
    }

    pub fn emit_rule_completed(&self, event: &RuleCompletedEvent) {
        self.emit(|h| h.on_rule_completed(event));
    }

    // ---- PEs ----
    pub fn emit_pe_timeout(&self, event: &PeTimeoutEvent) {
        self.emit(|h| h.on_pe_timeout(event));
    }

    pub fn emit_pe_failure(&self, event: &PeFailureEvent) {
        self.emit(|h| h.on_pe_failure(event));
    }

    // ---- Input ----
    pub fn emit_token_rejected(&self, event: &TokenRejectedEvent) {
        self.emit(|h| h.on_token_rejected(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
