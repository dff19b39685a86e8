use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{ProjectKind, RootMode};

/// The single configuration value driving one generation run.
///
/// Built once from validated inputs and never mutated. The project name is
/// derived from the import path, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    import_path: String,
    name: String,
    kind: ProjectKind,
    root_mode: RootMode,
}

impl ProjectSpec {
    pub fn new(import_path: impl Into<String>, kind: ProjectKind, root_mode: RootMode) -> Self {
        let import_path = import_path.into();
        let name = derive_name(&import_path).to_string();
        Self {
            import_path,
            name,
            kind,
            root_mode,
        }
    }

    /// Module path handed verbatim to `go mod init`.
    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// Last `/`-separated segment of the import path. May be empty; the
    /// preflight check rejects that before anything is written.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn root_mode(&self) -> RootMode {
        self.root_mode
    }
}

impl fmt::Display for ProjectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, import path '{}')",
            self.name, self.kind, self.root_mode, self.import_path
        )
    }
}

/// `example.com/foo` -> `foo`, `foo` -> `foo`, `example.com/foo/` -> ``.
fn derive_name(import_path: &str) -> &str {
    import_path.rsplit('/').next().unwrap_or(import_path)
}
