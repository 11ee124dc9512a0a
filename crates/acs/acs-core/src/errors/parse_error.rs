//! Rule list and rules file errors.
//!
//! Unknown tokens are not errors; they are returned alongside the parsed
//! values. These cover inputs that cannot be read at all.

use super::error_code::{self, AcsErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read rules file {path}: {source}")]
    RulesFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Rules file {path} is not valid {encoding}")]
    InvalidEncoding { path: String, encoding: &'static str },
}

impl AcsErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
