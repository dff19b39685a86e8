//! Writes a planned layout to disk.

use std::path::Path;

use tracing::debug;

use crate::{
    application::{
        ports::{Filesystem, Reporter},
        services::Stage,
    },
    domain::PlannedLayout,
    error::GosproutResult,
};

/// Counts of what was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories: usize,
    pub files: usize,
}

/// Creates every planned directory, then every planned file.
///
/// The first failure aborts. Nothing already written is removed.
pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
    workspace: &'a Path,
    reporter: Option<&'a dyn Reporter>,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, workspace: &'a Path) -> Self {
        Self {
            filesystem,
            workspace,
            reporter: None,
        }
    }

    /// Announce the directory and file stages through `reporter`.
    pub fn with_reporter(mut self, reporter: &'a dyn Reporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn materialize(&self, layout: &PlannedLayout) -> GosproutResult<MaterializeReport> {
        let directories = self.stage(Stage::MakeDirs, "create directories", || {
            self.make_dirs(layout)
        })?;
        let files = self.stage(Stage::WriteFiles, "create files", || {
            self.write_files(layout)
        })?;
        Ok(MaterializeReport { directories, files })
    }

    fn make_dirs(&self, layout: &PlannedLayout) -> GosproutResult<usize> {
        let mut created = 0;
        for dir in layout.directories() {
            let path = self.workspace.join(dir);
            self.filesystem.create_dir_all(&path)?;
            debug!(path = %dir, "Created directory");
            created += 1;
        }
        Ok(created)
    }

    fn write_files(&self, layout: &PlannedLayout) -> GosproutResult<usize> {
        let mut written = 0;
        for (file, content) in layout.files() {
            let path = self.workspace.join(file);
            self.filesystem.create_new_file(&path, content)?;
            debug!(path = %file, bytes = content.len(), "Wrote file");
            written += 1;
        }
        Ok(written)
    }

    fn stage(
        &self,
        stage: Stage,
        banner: &str,
        work: impl FnOnce() -> GosproutResult<usize>,
    ) -> GosproutResult<usize> {
        if let Some(reporter) = self.reporter {
            reporter.stage_started(stage, banner);
        }
        debug!(%stage, "Stage started");

        let count = work()?;

        if let Some(reporter) = self.reporter {
            reporter.stage_finished(stage);
        }
        Ok(count)
    }
}
