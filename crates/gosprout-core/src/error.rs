//! Unified error handling for gosprout core.
//!
//! Wraps domain and application errors behind one type so callers can
//! match on a single enum and still get user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for gosprout core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GosproutError {
    /// Errors from the domain layer (invalid layouts, conflicting kinds).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (preflight, I/O, external tools).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl GosproutError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in gosprout".into(),
                "Please report this issue at: https://github.com/gosprout/gosprout/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The inputs or the target directory are not acceptable.
    Validation,
    /// A required external tool could not be found.
    NotFound,
    /// Writing to disk failed.
    Io,
    /// An external tool ran but reported failure.
    External,
    Internal,
}

/// Convenient result type alias.
pub type GosproutResult<T> = Result<T, GosproutError>;
