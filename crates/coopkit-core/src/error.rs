//! Crate-wide error type.
//!
//! [`CoopError`] wraps the layer errors so callers handle one type. Every
//! variant can explain itself through [`CoopError::suggestions`].

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

/// Any failure surfaced by `coopkit-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoopError {
    /// Bad option text, bad level count, bad price table.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Rendering, composing or writing failed.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type CoopResult<T> = Result<T, CoopError>;

impl CoopError {
    /// Hints a front-end can show under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// Only a poisoned lock clears up on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::LockPoisoned))
    }
}
