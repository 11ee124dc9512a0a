//! PE rendezvous configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PE_COUNT, DEFAULT_PE_TIMEOUT_ITERATIONS};

/// Configuration for PE fan-out/fan-in.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PeConfig {
    /// Number of PEs to run payloads on. Default: 1.
    pub count: Option<usize>,
    /// Fan-in poll bound, in iterations. Default: 0x1000000.
    pub timeout_iterations: Option<u64>,
}

impl PeConfig {
    /// Returns the effective PE count, defaulting to 1.
    pub fn effective_count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_PE_COUNT)
    }

    /// Returns the effective poll bound.
    pub fn effective_timeout_iterations(&self) -> u64 {
        self.timeout_iterations
            .unwrap_or(DEFAULT_PE_TIMEOUT_ITERATIONS)
    }
}
