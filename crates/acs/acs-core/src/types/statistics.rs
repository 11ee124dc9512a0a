//! Running per-run rule counters.

use serde::{Deserialize, Serialize};

use super::RuleStatus;

/// Counters updated once per completed rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub total_rules_run: u32,
    pub passed: u32,
    pub partial_coverage: u32,
    pub warnings: u32,
    pub skipped: u32,
    pub failed: u32,
    pub pal_not_supported: u32,
    pub not_implemented: u32,
}

impl RunStatistics {
    /// Count one completed rule: its bucket plus the total.
    pub fn record(&mut self, status: RuleStatus) {
        self.total_rules_run += 1;
        match status {
            RuleStatus::Pass => self.passed += 1,
            RuleStatus::Partial => self.partial_coverage += 1,
            RuleStatus::Warn => self.warnings += 1,
            RuleStatus::Skip => self.skipped += 1,
            RuleStatus::Fail => self.failed += 1,
            RuleStatus::PalNotSupported => self.pal_not_supported += 1,
            RuleStatus::NotImplemented => self.not_implemented += 1,
        }
    }

    /// Sum of all verdict buckets. Equals `total_rules_run`.
    pub fn bucket_sum(&self) -> u32 {
        self.passed
            + self.partial_coverage
            + self.warnings
            + self.skipped
            + self.failed
            + self.pal_not_supported
            + self.not_implemented
    }

    /// Return the current counters and zero them.
    pub fn take(&mut self) -> RunStatistics {
        std::mem::take(self)
    }
}
