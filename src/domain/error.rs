//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent decode failures in the pre-order text codec.
/// Every query operation is infallible and returns sentinel values instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid token in serialized tree: {token}")]
    InvalidToken { token: String },

    #[error("serialized tree ended before all subtrees were complete")]
    UnexpectedEnd,

    #[error("trailing token after complete tree: {token}")]
    TrailingToken { token: String },
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
