//! Domain value objects: ProjectKind and RootMode.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. The planner
//! decides what each variant means for the generated layout; this file only
//! defines the types and their string forms.

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;

// ── ProjectKind ───────────────────────────────────────────────────────────────

/// The kind of Go project to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Importable package, no binary.
    Library,
    /// Simple binary living under `cmd/<name>`.
    Application,
    /// cobra-based command-line tool.
    Cli,
}

impl ProjectKind {
    /// Resolve the kind from the two mutually exclusive CLI toggles.
    pub fn from_flags(library: bool, cli: bool) -> Result<Self, DomainError> {
        match (library, cli) {
            (true, true) => Err(DomainError::ConflictingKind),
            (true, false) => Ok(Self::Library),
            (false, true) => Ok(Self::Cli),
            (false, false) => Ok(Self::Application),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Application => "application",
            Self::Cli => "cli",
        }
    }

    /// Whether the kind produces a binary (and therefore release tooling).
    pub const fn builds_binary(self) -> bool {
        !matches!(self, Self::Library)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RootMode ──────────────────────────────────────────────────────────────────

/// Where the generated tree lands relative to the working directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootMode {
    /// Everything goes under `./<name>/`.
    #[default]
    Nested,
    /// Everything goes straight into `./`.
    Flattened,
}

impl RootMode {
    pub const fn from_no_root(no_root: bool) -> Self {
        if no_root { Self::Flattened } else { Self::Nested }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nested => "nested",
            Self::Flattened => "flattened",
        }
    }
}

impl fmt::Display for RootMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
