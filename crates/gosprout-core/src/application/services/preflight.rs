//! Read-only checks that must pass before anything is written.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Toolchain},
    },
    domain::{PlannedLayout, ProjectSpec},
    error::GosproutResult,
};

/// Checks the host and the working directory against a planned layout.
///
/// Order: toolchain present, non-empty name, structurally valid layout,
/// no planned path already on disk. The first failure wins.
pub struct PreflightValidator<'a> {
    filesystem: &'a dyn Filesystem,
    toolchain: &'a dyn Toolchain,
    workspace: &'a Path,
}

impl<'a> PreflightValidator<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        toolchain: &'a dyn Toolchain,
        workspace: &'a Path,
    ) -> Self {
        Self {
            filesystem,
            toolchain,
            workspace,
        }
    }

    pub fn validate(&self, spec: &ProjectSpec, layout: &PlannedLayout) -> GosproutResult<()> {
        if !self.toolchain.is_available() {
            return Err(ApplicationError::ToolUnavailable {
                tool: self.toolchain.name(),
            }
            .into());
        }

        if spec.name().trim().is_empty() {
            return Err(ApplicationError::EmptyProjectName.into());
        }

        layout.validate()?;

        if let Some(path) = self.first_collision(layout) {
            return Err(ApplicationError::PathCollision { path }.into());
        }

        debug!(
            files = layout.file_count(),
            directories = layout.directory_count(),
            "Preflight passed"
        );
        Ok(())
    }

    /// First planned path that already exists: files, then directories,
    /// then the project root itself.
    pub fn first_collision(&self, layout: &PlannedLayout) -> Option<PathBuf> {
        layout
            .all_paths()
            .chain(layout.root())
            .find(|p| self.filesystem.exists(&self.workspace.join(p)))
            .map(|p| p.as_path().to_path_buf())
    }
}
