//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Scene could not be turned into markup.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Quote could not be turned into a handoff link.
    #[error("Quote composition failed: {reason}")]
    ComposeFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Export target exists and overwriting was not requested.
    #[error("File already exists at {path}")]
    ArtifactExists { path: PathBuf },

    /// Shared adapter state was poisoned by a panicking writer.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ArtifactExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
                "Or choose a different output path with -o".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
            Self::ComposeFailed { .. } => vec![
                "Check the quote recipient in your config file".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Try a different --format".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ArtifactExists { .. } => ErrorCategory::Validation,
            Self::ComposeFailed { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::LockPoisoned | Self::RenderingFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
