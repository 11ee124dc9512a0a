//! Cooperative stop request between rules.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Stop request checked by the orchestrator before each top-level rule.
///
/// A payload already dispatched to a PE always runs to completion; this
/// only prevents further rules from being dispatched.
pub trait Cancellable {
    /// Check if a stop has been requested.
    fn is_cancelled(&self) -> bool;

    /// Request a stop.
    fn cancel(&self);
}

/// Default implementation of a cancellation token.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new token (not cancelled).
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}
