//! Per-PE status word.
//!
//! ```text
//! 31      28 27                  12 11          0
//! +---------+----------------------+------------+
//! |  state  |       test_id        | checkpoint |
//! +---------+----------------------+------------+
//! ```

use acs_core::constants::{MAX_PAYLOAD_CHECKPOINT, TIMEOUT_CHECKPOINT};

const STATE_SHIFT: u32 = 28;
const TEST_ID_SHIFT: u32 = 12;
const TEST_ID_MASK: u32 = 0xFFFF;
const CHECKPOINT_MASK: u32 = 0xFFF;

/// Coarse per-PE state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PeState {
    Pending = 0,
    Pass = 1,
    Fail = 2,
    Skip = 3,
}

impl PeState {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Pass,
            2 => Self::Fail,
            3 => Self::Skip,
            // Unknown encodings never count as done.
            _ => Self::Pending,
        }
    }
}

/// Decoded status word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeStatus {
    pub state: PeState,
    pub test_id: u16,
    pub checkpoint: u16,
}

impl PeStatus {
    pub fn pending(test_id: u16) -> Self {
        Self {
            state: PeState::Pending,
            test_id,
            checkpoint: 0,
        }
    }

    /// A status reported by a payload. The checkpoint is clamped below the
    /// reserved timeout value.
    pub fn reported(state: PeState, test_id: u16, checkpoint: u16) -> Self {
        Self {
            state,
            test_id,
            checkpoint: checkpoint.min(MAX_PAYLOAD_CHECKPOINT),
        }
    }

    /// The status fan-in writes for a PE that never finished.
    pub fn timed_out(test_id: u16) -> Self {
        Self {
            state: PeState::Fail,
            test_id,
            checkpoint: TIMEOUT_CHECKPOINT,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == PeState::Pending
    }

    pub fn is_timeout(&self) -> bool {
        self.state == PeState::Fail && self.checkpoint == TIMEOUT_CHECKPOINT
    }

    pub fn to_word(self) -> u32 {
        ((self.state as u32) << STATE_SHIFT)
            | ((self.test_id as u32 & TEST_ID_MASK) << TEST_ID_SHIFT)
            | (self.checkpoint as u32 & CHECKPOINT_MASK)
    }

    pub fn from_word(word: u32) -> Self {
        Self {
            state: PeState::from_bits(word >> STATE_SHIFT),
            test_id: ((word >> TEST_ID_SHIFT) & TEST_ID_MASK) as u16,
            checkpoint: (word & CHECKPOINT_MASK) as u16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_layout() {
        let word = PeStatus::reported(PeState::Skip, 0xABCD, 0x123).to_word();
        assert_eq!(word, 0x3ABC_D123);
    }

    #[test]
    fn test_payload_checkpoint_never_reads_as_timeout() {
        let status = PeStatus::reported(PeState::Fail, 7, 0xFFFF);
        assert_eq!(status.checkpoint, MAX_PAYLOAD_CHECKPOINT);
        assert!(!PeStatus::from_word(status.to_word()).is_timeout());
        assert!(PeStatus::from_word(PeStatus::timed_out(7).to_word()).is_timeout());
    }
}
