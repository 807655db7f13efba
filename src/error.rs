//! Error types for the tag-stack crate.

use thiserror::Error;

/// Main error type for tag-stack operations.
#[derive(Debug, Error)]
pub enum StackError {
    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<rmp_serde::encode::Error> for StackError {
    fn from(e: rmp_serde::encode::Error) -> Self {
        StackError::Serialization(e.to_string())
    }
}

impl From<rmp_serde::decode::Error> for StackError {
    fn from(e: rmp_serde::decode::Error) -> Self {
        StackError::Deserialization(e.to_string())
    }
}

/// Result type for tag-stack operations.
pub type Result<T> = std::result::Result<T, StackError>;
