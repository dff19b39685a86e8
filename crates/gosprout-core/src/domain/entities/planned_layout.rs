use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Serialize;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Every directory and rendered file one generation run will create.
///
/// Produced once by the planner and only read afterwards: the mutating
/// methods are crate-private. Sorted collections keep iteration order (and
/// therefore output) deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedLayout {
    root: Option<RelativePath>,
    directories: BTreeSet<RelativePath>,
    files: BTreeMap<RelativePath, String>,
    #[serde(skip)]
    duplicates: Vec<RelativePath>,
}

impl PlannedLayout {
    pub(crate) fn new(root: Option<RelativePath>) -> Self {
        Self {
            root,
            directories: BTreeSet::new(),
            files: BTreeMap::new(),
            duplicates: Vec::new(),
        }
    }

    pub(crate) fn add_directory(&mut self, path: RelativePath) {
        if !self.directories.insert(path.clone()) {
            self.duplicates.push(path);
        }
    }

    pub(crate) fn add_file(&mut self, path: RelativePath, content: String) {
        if self.files.insert(path.clone(), content).is_some() {
            self.duplicates.push(path);
        }
    }

    /// Structural checks run by the preflight validator.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(dup) = self.duplicates.first() {
            return Err(DomainError::DuplicatePath {
                path: dup.to_string(),
            });
        }

        if let Some(path) = self.files.keys().find(|p| self.directories.contains(*p)) {
            return Err(DomainError::DuplicatePath {
                path: path.to_string(),
            });
        }

        // The planner builds paths unchecked from the project name, which
        // may be something like "..".
        for path in self.directories.iter().chain(self.files.keys()) {
            RelativePath::try_new(path.as_path())?;
        }

        Ok(())
    }

    /// Project directory relative to the working directory (`name` when
    /// nested, empty when flattened).
    pub fn root_dir(&self) -> &Path {
        self.root
            .as_ref()
            .map_or_else(|| Path::new(""), RelativePath::as_path)
    }

    pub fn root(&self) -> Option<&RelativePath> {
        self.root.as_ref()
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.directories.iter()
    }

    pub fn files(&self) -> impl Iterator<Item = (&RelativePath, &str)> {
        self.files.iter().map(|(p, c)| (p, c.as_str()))
    }

    /// Files first, then directories: the order collisions are reported in.
    pub fn all_paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.files.keys().chain(self.directories.iter())
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|(p, _)| p.as_path() == path)
            .map(|(_, c)| c.as_str())
    }

    pub fn has_directory(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.directories.iter().any(|d| d.as_path() == path)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }
}
