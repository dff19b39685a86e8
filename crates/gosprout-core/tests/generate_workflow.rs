//! End-to-end runs of the generation workflow against in-process fakes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use gosprout_core::{
    application::{ApplicationError, GenerationSummary, Stage},
    domain::{PlannedLayout, ProjectKind, ProjectSpec, RootMode},
    error::{GosproutError, GosproutResult},
    prelude::{Filesystem, GenerateService, Reporter, Toolchain},
};

#[derive(Clone, Default)]
struct Disk {
    entries: Arc<Mutex<BTreeMap<PathBuf, Option<String>>>>,
}

impl Disk {
    fn with_dir(self, path: &str) -> Self {
        self.entries.lock().unwrap().insert(PathBuf::from(path), None);
        self
    }

    fn with_file(self, path: &str, content: &str) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), Some(content.to_string()));
        self
    }

    fn file(&self, path: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap()
            .get(Path::new(path))
            .cloned()
            .flatten()
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl Filesystem for Disk {
    fn create_dir_all(&self, path: &Path) -> GosproutResult<()> {
        let mut entries = self.entries.lock().unwrap();
        for ancestor in path.ancestors() {
            entries.entry(ancestor.to_path_buf()).or_insert(None);
        }
        Ok(())
    }

    fn create_new_file(&self, path: &Path, content: &str) -> GosproutResult<()> {
        let mut entries = self.entries.lock().unwrap();
        if entries.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to create file: already exists".into(),
            }
            .into());
        }
        entries.insert(path.to_path_buf(), Some(content.to_string()));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.entries.lock().unwrap().contains_key(path)
    }
}

#[derive(Clone, Default)]
struct Go {
    missing: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Toolchain for Go {
    fn name(&self) -> String {
        "go".into()
    }

    fn is_available(&self) -> bool {
        !self.missing
    }

    fn version(&self) -> Option<String> {
        (!self.missing).then(|| "go1.22.1".to_string())
    }

    fn mod_init(&self, dir: &Path, import_path: &str) -> GosproutResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}: mod init {}", dir.display(), import_path));
        Ok(())
    }

    fn mod_tidy(&self, dir: &Path) -> GosproutResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}: mod tidy", dir.display()));
        Ok(())
    }
}

#[derive(Clone, Default)]
struct Log {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Reporter for Log {
    fn generation_started(&self, spec: &ProjectSpec) {
        self.push(format!("start {}", spec.import_path()));
    }

    fn stage_started(&self, stage: Stage, _banner: &str) {
        self.push(format!("stage {stage}"));
    }

    fn stage_finished(&self, _stage: Stage) {}

    fn layout_materialized(&self, project_root: &Path, layout: &PlannedLayout) {
        self.push(format!(
            "tree {} ({} files)",
            project_root.display(),
            layout.file_count()
        ));
    }

    fn generation_finished(&self, summary: &GenerationSummary) {
        self.push(format!("done {}", summary.files));
    }
}

impl Log {
    fn push(&self, line: String) {
        self.lines.lock().unwrap().push(line);
    }

    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

fn run(
    disk: &Disk,
    go: &Go,
    log: &Log,
    spec: &ProjectSpec,
) -> GosproutResult<GenerationSummary> {
    GenerateService::new(
        Box::new(disk.clone()),
        Box::new(go.clone()),
        Box::new(log.clone()),
        "/ws",
    )
    .generate(spec)
}

#[test]
fn application_nested_end_to_end() {
    let (disk, go, log) = (Disk::default(), Go::default(), Log::default());
    let spec = ProjectSpec::new("example.com/foo", ProjectKind::Application, RootMode::Nested);

    let summary = run(&disk, &go, &log, &spec).unwrap();

    assert_eq!(summary.files, 14);
    let main = disk.file("/ws/foo/cmd/foo/main.go").unwrap();
    assert!(main.contains("func HelloWorld() string"));
    assert!(
        disk.file("/ws/foo/Makefile")
            .unwrap()
            .contains("cmd/foo/main.go")
    );
    assert_eq!(
        go.calls.lock().unwrap().as_slice(),
        ["/ws/foo: mod init example.com/foo"]
    );
    assert_eq!(
        log.lines(),
        vec![
            "start example.com/foo",
            "stage check",
            "stage make-dirs",
            "stage write-files",
            "tree /ws/foo (14 files)",
            "stage mod-init",
            "done 14",
        ]
    );
}

#[test]
fn library_flattened_end_to_end() {
    let (disk, go, log) = (Disk::default(), Go::default(), Log::default());
    let spec = ProjectSpec::new("example.com/bar", ProjectKind::Library, RootMode::Flattened);

    run(&disk, &go, &log, &spec).unwrap();

    assert!(disk.file("/ws/bar.go").unwrap().starts_with("package bar"));
    assert!(
        disk.file("/ws/bar_test.go")
            .unwrap()
            .starts_with("package bar\n")
    );
    assert!(disk.file("/ws/bar/bar.go").is_none());
    assert!(disk.file("/ws/.config/workflows/build.yml").is_none());
    assert_eq!(go.calls.lock().unwrap().as_slice(), ["/ws: mod init example.com/bar"]);
}

#[test]
fn cli_project_is_tidied() {
    let (disk, go, log) = (Disk::default(), Go::default(), Log::default());
    let spec = ProjectSpec::new("github.com/me/tool", ProjectKind::Cli, RootMode::Nested);

    let summary = run(&disk, &go, &log, &spec).unwrap();

    assert!(summary.tidied);
    assert_eq!(
        go.calls.lock().unwrap().as_slice(),
        ["/ws/tool: mod init github.com/me/tool", "/ws/tool: mod tidy"]
    );
    assert!(
        disk.file("/ws/tool/cmd/root.go")
            .unwrap()
            .contains("\"github.com/me/tool/internal/print\"")
    );
}

#[test]
fn existing_directory_aborts_before_any_write() {
    let disk = Disk::default().with_dir("/ws/foo");
    let (go, log) = (Go::default(), Log::default());
    let before = disk.len();

    for kind in [ProjectKind::Library, ProjectKind::Application, ProjectKind::Cli] {
        let spec = ProjectSpec::new("example.com/foo", kind, RootMode::Nested);
        let err = run(&disk, &go, &log, &spec).unwrap_err();

        assert_eq!(
            err,
            GosproutError::Application(ApplicationError::PathCollision {
                path: PathBuf::from("foo")
            })
        );
    }
    assert_eq!(disk.len(), before);
    assert!(go.calls.lock().unwrap().is_empty());
}

#[test]
fn one_existing_file_blocks_the_whole_run() {
    let disk = Disk::default()
        .with_dir("/ws/foo")
        .with_file("/ws/foo/doc.go", "package foo\n");
    let (go, log) = (Go::default(), Log::default());
    let before = disk.len();

    let spec = ProjectSpec::new("example.com/foo", ProjectKind::Library, RootMode::Nested);
    let err = run(&disk, &go, &log, &spec).unwrap_err();

    assert!(err.to_string().contains("foo/doc.go"));
    assert_eq!(disk.len(), before);
    assert_eq!(disk.file("/ws/foo/doc.go").as_deref(), Some("package foo\n"));
}

#[test]
fn trailing_slash_fails_before_any_directory_is_created() {
    let (disk, go, log) = (Disk::default(), Go::default(), Log::default());
    let spec = ProjectSpec::new("example.com/foo/", ProjectKind::Application, RootMode::Nested);

    let err = run(&disk, &go, &log, &spec).unwrap_err();

    assert_eq!(
        err,
        GosproutError::Application(ApplicationError::EmptyProjectName)
    );
    assert_eq!(disk.len(), 0);
}

#[test]
fn missing_toolchain_is_reported_first() {
    let disk = Disk::default().with_dir("/ws/foo");
    let go = Go {
        missing: true,
        ..Go::default()
    };

    let spec = ProjectSpec::new("example.com/foo", ProjectKind::Application, RootMode::Nested);
    let err = run(&disk, &go, &Log::default(), &spec).unwrap_err();

    assert_eq!(
        err,
        GosproutError::Application(ApplicationError::ToolUnavailable { tool: "go".into() })
    );
}
