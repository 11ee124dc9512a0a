//! EL3 parameter block errors.
//!
//! All of these cause the block to be ignored; none of them stop a run.

use super::error_code::{self, AcsErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum El3Error {
    #[error("EL3 param magic mismatch: {found:#x}")]
    MagicMismatch { found: u64 },

    #[error("EL3 param magic set but param address is 0, ignoring")]
    NullAddress,

    #[error("Unsupported EL3 param version {found}, ignoring")]
    UnsupportedVersion { found: u64 },

    #[error("EL3 memory read failed at {addr:#x} ({len} bytes)")]
    ReadFailed { addr: u64, len: usize },
}

impl AcsErrorCode for El3Error {
    fn error_code(&self) -> &'static str {
        error_code::EL3_PARAM_ERROR
    }
}
