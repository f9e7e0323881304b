//! History error types.

use thiserror::Error;

/// Errors raised by history operations.
///
/// Every failure is detected before any mutation, so a failed call leaves
/// the history untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// An argument was empty or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl HistoryError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        HistoryError::InvalidArgument(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;
