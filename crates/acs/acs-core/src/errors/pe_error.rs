//! PE rendezvous errors.

use super::error_code::{self, AcsErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum PeError {
    #[error("PE index {index} out of range (num_pe = {num_pe})")]
    IndexOutOfRange { index: usize, num_pe: usize },

    #[error("Failed to signal PE {index}: {message}")]
    SignalFailed { index: usize, message: String },

    #[error("Invalid PE count {0}")]
    InvalidCount(usize),
}

impl AcsErrorCode for PeError {
    fn error_code(&self) -> &'static str {
        error_code::PE_ERROR
    }
}
