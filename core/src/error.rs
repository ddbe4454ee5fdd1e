//! Error types for todo store operations.

use crate::todo::TodoId;
use thiserror::Error;

/// Result type alias for todo store operations.
pub type Result<T> = std::result::Result<T, TodoError>;

/// Failures surfaced by [`TodoStore`](crate::TodoStore).
///
/// Nothing is retried internally; every failure is returned to the
/// immediate caller and leaves the todo collection unchanged. A rejected add
/// still consumes an id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The input did not yield a usable name.
    #[error("Invalid todo input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// No todo with the given id exists in the store.
    #[error("Todo with ID {0} not found")]
    NotFound(TodoId),
}

impl TodoError {
    /// Creates an [`TodoError::InvalidInput`] with the given reason.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
