//! Error types for parsing discovery tags.

use thiserror::Error;

/// Errors raised when a closed tag cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// The value is not one of the fixed activation channels.
    #[error("unknown activation channel `{0}`")]
    UnknownChannel(String),

    /// The value is not a known gene role.
    #[error("unknown gene role `{0}`")]
    UnknownRole(String),
}

/// Result type for tag parsing.
pub type TypesResult<T> = Result<T, TypesError>;
