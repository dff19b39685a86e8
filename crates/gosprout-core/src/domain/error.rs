// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `GosproutError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("--library and --cli cannot be used together")]
    ConflictingKind,

    // ========================================================================
    // Layout Errors
    // ========================================================================
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Duplicate path in layout: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConflictingKind => vec![
                "Pick one project kind:".into(),
                "  • --library   - importable Go package".into(),
                "  • --cli       - command-line tool built on cobra".into(),
                "  • (no flag)   - simple application under cmd/<name>".into(),
            ],
            Self::PathEscapesRoot { path } => vec![
                format!("'{}' would be written outside the project directory", path),
                "Use an import path whose last segment is a plain name".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConflictingKind
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}
