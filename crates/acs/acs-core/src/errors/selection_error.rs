//! Rule selection errors.

use super::error_code::{self, AcsErrorCode};

/// Errors that end a run before any rule is dispatched.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// Filtering left no rules. The run must stop rather than report success.
    #[error("Nothing to execute: no rules remain after filtering")]
    NothingToExecute,

    #[error("Level {level} is not defined for {arch}")]
    LevelOutOfRange { arch: String, level: u8 },

    #[error("Level mode {mode} requires a level value")]
    MissingLevel { mode: String },
}

impl AcsErrorCode for SelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NothingToExecute => error_code::NOTHING_TO_EXECUTE,
            _ => error_code::SELECTION_ERROR,
        }
    }
}
