//! Driven (output) ports.

use std::path::Path;

use crate::application::services::{GenerationSummary, Stage};
use crate::domain::{PlannedLayout, ProjectSpec};
use crate::error::GosproutResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gosprout_adapters::filesystem::LocalFilesystem` (production)
/// - `gosprout_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> GosproutResult<()>;

    /// Create a file that must not exist yet and write all of `content`.
    ///
    /// An existing file is an error and is never truncated.
    fn create_new_file(&self, path: &Path, content: &str) -> GosproutResult<()>;

    /// Whether anything (file, directory, dangling symlink) is at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the Go toolchain.
///
/// Commands run with `dir` as their working directory; the process's own
/// working directory is never changed.
#[cfg_attr(test, mockall::automock)]
pub trait Toolchain: Send + Sync {
    /// Command name used in messages, e.g. `go`.
    fn name(&self) -> String;

    fn is_available(&self) -> bool;

    /// Raw version string (`go1.22.3`), `None` if it cannot be queried.
    fn version(&self) -> Option<String>;

    /// `go mod init <import_path>`
    fn mod_init(&self, dir: &Path, import_path: &str) -> GosproutResult<()>;

    /// `go mod tidy`
    fn mod_tidy(&self, dir: &Path) -> GosproutResult<()>;
}

/// Port for progress output.
///
/// Reporting never fails; implementations swallow their own write errors.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    fn generation_started(&self, spec: &ProjectSpec);

    /// `banner` is the human-readable description of this stage's work.
    fn stage_started(&self, stage: Stage, banner: &str);

    fn stage_finished(&self, stage: Stage);

    /// Called once every planned path is on disk under `project_root`.
    fn layout_materialized(&self, project_root: &Path, layout: &PlannedLayout);

    fn generation_finished(&self, summary: &GenerationSummary);
}
