use thiserror::Error;

use crate::core::NotationError;

/// Errors that can occur while scoring a batch
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScoringError {
    #[error("Line {line} is not valid two hand notation: {source}")]
    Notation {
        /// 1-based line number of the offending input.
        line: usize,
        #[source]
        source: NotationError,
    },

    #[error("Configuration validation error: {0}")]
    InvalidConfig(String),
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, ScoringError>;
