//! Application layer errors.
//!
//! These errors describe what went wrong around the domain: a missing tool,
//! a path that is already taken, a write or command that failed.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while checking, writing or finalizing a project.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The toolchain command was not found on `PATH`.
    #[error("this system does not install {tool} cmd. Please download golang")]
    ToolUnavailable { tool: String },

    /// The import path has no usable last segment.
    #[error("project name is empty (import path end with \"/\"?)")]
    EmptyProjectName,

    /// A planned path already exists on disk.
    #[error("same name file ({}) already exists", path.display())]
    PathCollision { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command could not be started or exited non-zero.
    #[error("'{command}' failed: {reason}")]
    ExternalToolFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ToolUnavailable { tool } => vec![
                format!("'{}' must be on your PATH", tool),
                "Install Go from https://go.dev/dl/".into(),
                "Or point toolchain.command in the config file at your go binary".into(),
            ],
            Self::EmptyProjectName => vec![
                "Remove the trailing '/' from the import path".into(),
                "Example: gosprout github.com/you/project".into(),
            ],
            Self::PathCollision { path } => vec![
                format!("Remove or rename: {}", path.display()),
                "Or run gosprout from another directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure are left in place".into(),
            ],
            Self::ExternalToolFailed { command, .. } => vec![
                format!("Run '{}' manually inside the project to see the full output", command),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ToolUnavailable { .. } => ErrorCategory::NotFound,
            Self::EmptyProjectName | Self::PathCollision { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::ExternalToolFailed { .. } => ErrorCategory::External,
        }
    }
}
