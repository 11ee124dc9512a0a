//! Combine per-PE status words into one verdict.

use serde::Serialize;

use acs_core::types::RuleStatus;

use super::status::{PeState, PeStatus};

/// Verdict for a rule across PEs, with the PE that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeVerdict {
    pub status: RuleStatus,
    /// First PE holding the winning state. `None` for PASS.
    pub pe_index: Option<usize>,
    pub checkpoint: u16,
}

/// FAIL if any PE failed or is still pending, else SKIP if any skipped,
/// else PASS.
pub fn aggregate(words: &[u32]) -> PeVerdict {
    let statuses: Vec<PeStatus> = words.iter().map(|&w| PeStatus::from_word(w)).collect();

    let first = |pred: fn(&PeStatus) -> bool| statuses.iter().position(pred);

    if let Some(index) = first(|s| matches!(s.state, PeState::Fail | PeState::Pending)) {
        let checkpoint = statuses[index].checkpoint;
        tracing::error!(target: "acs::pe", "Failed on PE - {index} at checkpoint - {checkpoint}");
        return PeVerdict {
            status: RuleStatus::Fail,
            pe_index: Some(index),
            checkpoint,
        };
    }

    if let Some(index) = first(|s| s.state == PeState::Skip) {
        let checkpoint = statuses[index].checkpoint;
        tracing::warn!(target: "acs::pe", "Skipped on PE - {index} at checkpoint - {checkpoint}");
        return PeVerdict {
            status: RuleStatus::Skip,
            pe_index: Some(index),
            checkpoint,
        };
    }

    PeVerdict {
        status: RuleStatus::Pass,
        pe_index: None,
        checkpoint: 0,
    }
}
