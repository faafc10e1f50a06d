//! Domain error model.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures of pure catalog rules: bad input, bad ids, missing rows.
///
/// Provider and storage failures have their own error types and never end
/// up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input rejected by a catalog rule (name too short, non-positive price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A path or query id that is not an integer.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// True for errors caused by the caller's input.
    pub fn is_client_input(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidId(_))
    }
}
