//! Generate Service - the end-to-end generation workflow.
//!
//! Plan → Check → MakeDirs → WriteFiles → ModuleInit → DependencyTidy (CLI
//! projects only). Any failure stops the run and is returned to the caller;
//! files already written stay on disk.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, Reporter, Toolchain},
        services::{Materializer, PreflightValidator, Stage},
    },
    domain::{HostInfo, PlannedLayout, ProjectKind, ProjectSpec, TargetPlanner},
    error::GosproutResult,
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub project_root: PathBuf,
    pub import_path: String,
    pub kind: ProjectKind,
    pub directories: usize,
    pub files: usize,
    pub tidied: bool,
    pub elapsed: Duration,
}

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    toolchain: Box<dyn Toolchain>,
    reporter: Box<dyn Reporter>,
    workspace: PathBuf,
    tidy_cli: bool,
}

impl GenerateService {
    /// Create a service that writes projects below `workspace`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gosprout_core::prelude::*;
    ///
    /// # fn run(fs: Box<dyn Filesystem>, go: Box<dyn Toolchain>, out: Box<dyn Reporter>) -> GosproutResult<()> {
    /// let service = GenerateService::new(fs, go, out, ".");
    /// let spec = ProjectSpec::new("github.com/me/tool", ProjectKind::Cli, RootMode::Nested);
    /// service.generate(&spec)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        toolchain: Box<dyn Toolchain>,
        reporter: Box<dyn Reporter>,
        workspace: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            toolchain,
            reporter,
            workspace: workspace.into(),
            tidy_cli: true,
        }
    }

    /// Whether CLI projects get `go mod tidy` after `go mod init`.
    pub fn with_tidy_cli(mut self, tidy_cli: bool) -> Self {
        self.tidy_cli = tidy_cli;
        self
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Planner for this host, using the toolchain's version if it answers.
    pub fn planner(&self) -> TargetPlanner {
        let raw = self.toolchain.version();
        TargetPlanner::new(HostInfo::from_build_target(raw.as_deref()))
    }

    /// Plan without checking or writing anything.
    pub fn dry_run(&self, spec: &ProjectSpec) -> PlannedLayout {
        debug!(stage = %Stage::Plan, "Planning layout");
        self.planner().plan(spec)
    }

    /// Generate a project.
    #[instrument(
        skip_all,
        fields(
            import_path = %spec.import_path(),
            kind = %spec.kind(),
            root_mode = %spec.root_mode()
        )
    )]
    pub fn generate(&self, spec: &ProjectSpec) -> GosproutResult<GenerationSummary> {
        let started = Instant::now();
        self.reporter.generation_started(spec);

        let layout = self.dry_run(spec);

        self.run_stage(Stage::Check, "check if the project can be created", || {
            PreflightValidator::new(
                self.filesystem.as_ref(),
                self.toolchain.as_ref(),
                &self.workspace,
            )
            .validate(spec, &layout)
        })?;

        let written = Materializer::new(self.filesystem.as_ref(), &self.workspace)
            .with_reporter(self.reporter.as_ref())
            .materialize(&layout)?;

        let project_root = self.project_root(&layout);
        self.reporter.layout_materialized(&project_root, &layout);

        let tool = self.toolchain.name();
        self.run_stage(
            Stage::ModuleInit,
            &format!("Execute '{} mod init {}'", tool, spec.import_path()),
            || self.toolchain.mod_init(&project_root, spec.import_path()),
        )?;

        let tidied = spec.kind() == ProjectKind::Cli && self.tidy_cli;
        if tidied {
            self.run_stage(
                Stage::DependencyTidy,
                &format!("Execute '{} mod tidy'", tool),
                || self.toolchain.mod_tidy(&project_root),
            )?;
        }

        let summary = GenerationSummary {
            project_root,
            import_path: spec.import_path().to_string(),
            kind: spec.kind(),
            directories: written.directories,
            files: written.files,
            tidied,
            elapsed: started.elapsed(),
        };

        info!(
            files = summary.files,
            directories = summary.directories,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Generation completed"
        );
        self.reporter.generation_finished(&summary);
        Ok(summary)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run_stage<T>(
        &self,
        stage: Stage,
        banner: &str,
        work: impl FnOnce() -> GosproutResult<T>,
    ) -> GosproutResult<T> {
        self.reporter.stage_started(stage, banner);
        debug!(%stage, "Stage started");

        let out = work()?;

        self.reporter.stage_finished(stage);
        Ok(out)
    }

    fn project_root(&self, layout: &PlannedLayout) -> PathBuf {
        match layout.root() {
            Some(root) => self.workspace.join(root),
            None => self.workspace.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::output::{MockFilesystem, MockReporter, MockToolchain},
    };
    use crate::domain::RootMode;
    use crate::error::{ErrorCategory, GosproutError};

    fn quiet_reporter() -> MockReporter {
        let mut r = MockReporter::new();
        r.expect_generation_started().return_const(());
        r.expect_stage_started().return_const(());
        r.expect_stage_finished().return_const(());
        r.expect_layout_materialized().return_const(());
        r.expect_generation_finished().return_const(());
        r
    }

    fn empty_disk() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_new_file().returning(|_, _| Ok(()));
        fs
    }

    fn go() -> MockToolchain {
        let mut tc = MockToolchain::new();
        tc.expect_name().return_const("go".to_string());
        tc.expect_is_available().return_const(true);
        tc.expect_version().return_const(Some("go1.22.3".to_string()));
        tc
    }

    fn service(fs: MockFilesystem, tc: MockToolchain, r: MockReporter) -> GenerateService {
        GenerateService::new(Box::new(fs), Box::new(tc), Box::new(r), "/work")
    }

    #[test]
    fn application_runs_mod_init_in_project_root() {
        let mut tc = go();
        tc.expect_mod_init()
            .times(1)
            .withf(|dir, ip| dir == Path::new("/work/foo") && ip == "example.com/foo")
            .returning(|_, _| Ok(()));
        tc.expect_mod_tidy().never();

        let spec = ProjectSpec::new("example.com/foo", ProjectKind::Application, RootMode::Nested);
        let summary = service(empty_disk(), tc, quiet_reporter())
            .generate(&spec)
            .unwrap();

        assert_eq!(summary.project_root, PathBuf::from("/work/foo"));
        assert_eq!(summary.files, 14);
        assert!(!summary.tidied);
    }

    #[test]
    fn cli_is_tidied_after_init() {
        let mut seq = Sequence::new();
        let mut tc = go();
        tc.expect_mod_init()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        tc.expect_mod_tidy()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let spec = ProjectSpec::new("github.com/me/tool", ProjectKind::Cli, RootMode::Nested);
        let summary = service(empty_disk(), tc, quiet_reporter())
            .generate(&spec)
            .unwrap();

        assert!(summary.tidied);
    }

    #[test]
    fn tidy_can_be_disabled() {
        let mut tc = go();
        tc.expect_mod_init().returning(|_, _| Ok(()));
        tc.expect_mod_tidy().never();

        let spec = ProjectSpec::new("github.com/me/tool", ProjectKind::Cli, RootMode::Nested);
        let summary = service(empty_disk(), tc, quiet_reporter())
            .with_tidy_cli(false)
            .generate(&spec)
            .unwrap();

        assert!(!summary.tidied);
    }

    #[test]
    fn flattened_project_uses_workspace_as_root() {
        let mut tc = go();
        tc.expect_mod_init()
            .withf(|dir, _| dir == Path::new("/work"))
            .returning(|_, _| Ok(()));

        let spec = ProjectSpec::new("example.com/bar", ProjectKind::Library, RootMode::Flattened);
        let summary = service(empty_disk(), tc, quiet_reporter())
            .generate(&spec)
            .unwrap();

        assert_eq!(summary.project_root, PathBuf::from("/work"));
    }

    #[test]
    fn collision_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/work/foo/Changelog.md"));
        fs.expect_create_dir_all().never();
        fs.expect_create_new_file().never();

        let mut tc = go();
        tc.expect_mod_init().never();

        let mut reporter = MockReporter::new();
        reporter.expect_generation_started().return_const(());
        reporter.expect_stage_started().return_const(());
        reporter.expect_stage_finished().never();
        reporter.expect_layout_materialized().never();
        reporter.expect_generation_finished().never();

        let spec = ProjectSpec::new("example.com/foo", ProjectKind::Application, RootMode::Nested);
        let err = service(fs, tc, reporter).generate(&spec).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn directory_failure_stops_before_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(1).returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "Failed to create directory: Permission denied".into(),
            }
            .into())
        });
        fs.expect_create_new_file().never();

        let mut tc = go();
        tc.expect_mod_init().never();

        let spec = ProjectSpec::new("example.com/foo", ProjectKind::Application, RootMode::Nested);
        let err = service(fs, tc, quiet_reporter()).generate(&spec).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn mod_init_failure_is_reported_as_external() {
        let mut tc = go();
        tc.expect_mod_init().returning(|_, ip| {
            Err(ApplicationError::ExternalToolFailed {
                command: format!("go mod init {ip}"),
                reason: "exit status 1".into(),
            }
            .into())
        });

        let spec = ProjectSpec::new("example.com/foo", ProjectKind::Application, RootMode::Nested);
        let err = service(empty_disk(), tc, quiet_reporter())
            .generate(&spec)
            .unwrap_err();

        assert!(matches!(
            err,
            GosproutError::Application(ApplicationError::ExternalToolFailed { .. })
        ));
    }

    #[test]
    fn stages_are_announced_in_order() {
        let mut seq = Sequence::new();
        let mut reporter = MockReporter::new();
        reporter.expect_generation_started().return_const(());
        reporter.expect_stage_finished().return_const(());
        reporter.expect_layout_materialized().return_const(());
        reporter.expect_generation_finished().return_const(());
        for stage in [
            Stage::Check,
            Stage::MakeDirs,
            Stage::WriteFiles,
            Stage::ModuleInit,
        ] {
            reporter
                .expect_stage_started()
                .withf(move |s, _| *s == stage)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }

        let mut tc = go();
        tc.expect_mod_init().returning(|_, _| Ok(()));

        let spec = ProjectSpec::new("example.com/foo", ProjectKind::Library, RootMode::Nested);
        service(empty_disk(), tc, reporter).generate(&spec).unwrap();
    }

    #[test]
    fn dry_run_uses_reported_go_version() {
        let spec = ProjectSpec::new("example.com/foo", ProjectKind::Application, RootMode::Nested);
        let layout = service(MockFilesystem::new(), go(), MockReporter::new()).dry_run(&spec);

        assert!(
            layout
                .file("foo/.config/workflows/build.yml")
                .unwrap()
                .contains("go-version: \"1.22\"")
        );
    }
}
