// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The pure functions (pricing, schematic, quote) never fail. These errors
/// only come out of the text boundary: parsing options and
/// caller-supplied price tables.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("unknown {field} '{value}'")]
    UnknownOption { field: &'static str, value: String },

    #[error("invalid level count {value}: a coop has 1 or 2 levels")]
    InvalidLevels { value: u8 },

    #[error("invalid price table: {reason}")]
    InvalidPriceTable { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownOption { field, .. } => {
                let choices = match *field {
                    "wood" => "cedar, pine",
                    "roof" => "gable, lean-to",
                    "roof material" => "wood, metal",
                    "hardware finish" => "black, galvanized",
                    _ => "see --help for accepted values",
                };
                vec![format!("Accepted {field} values: {choices}")]
            }
            Self::InvalidLevels { .. } => vec![
                "Use --levels 1 for a single floor".into(),
                "Use --levels 2 for a loft with a ladder".into(),
            ],
            Self::InvalidPriceTable { reason } => vec![
                format!("Details: {reason}"),
                "Check the [pricing] section of your config file".into(),
                "Rates must be finite and non-negative".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownOption { .. } | Self::InvalidLevels { .. } => ErrorCategory::Validation,
            Self::InvalidPriceTable { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Coarse classification shared by every error in the crate.
///
/// Front-ends map it to exit codes and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller asked for something invalid.
    Validation,
    /// Settings (for example a price table) are unusable.
    Configuration,
    Internal,
}
