//! Target planner: turns a [`ProjectSpec`] into the complete set of
//! directories and rendered files for that project.

use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{PlannedLayout, ProjectSpec, RenderContext, common::RelativePath},
    host::HostInfo,
    templates::TemplateId,
    value_objects::{ProjectKind, RootMode},
};

const CONFIG_ROOT: &str = ".config";

/// Plans project layouts for one host.
///
/// Planning never fails. Names that would produce unsafe paths are caught
/// later by [`PlannedLayout::validate`].
#[derive(Debug, Clone)]
pub struct TargetPlanner {
    host: HostInfo,
}

impl TargetPlanner {
    pub fn new(host: HostInfo) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    pub fn plan(&self, spec: &ProjectSpec) -> PlannedLayout {
        let name = spec.name();
        let root = match spec.root_mode() {
            RootMode::Nested => PathBuf::from(name),
            RootMode::Flattened => PathBuf::new(),
        };

        let mut builder = LayoutBuilder {
            layout: PlannedLayout::new(
                (spec.root_mode() == RootMode::Nested)
                    .then(|| RelativePath::unchecked(root.clone())),
            ),
            ctx: RenderContext::for_project(spec, &self.host),
            root,
        };

        builder.dir(Path::new(CONFIG_ROOT).join("workflows"));
        builder.dir(Path::new(CONFIG_ROOT).join("issue-templates"));

        match spec.kind() {
            ProjectKind::Library => {
                if spec.root_mode() == RootMode::Nested {
                    builder.root_dir();
                }
                builder.file(format!("{name}.go"), TemplateId::LibrarySource);
                builder.file(format!("{name}_test.go"), TemplateId::LibraryTest);
                builder.file("doc.go", TemplateId::LibraryDoc);
                builder.file("Makefile", TemplateId::MakefileLibrary);
            }
            ProjectKind::Application => {
                let cmd = Path::new("cmd").join(name);
                builder.dir(&cmd);
                builder.file(cmd.join("main.go"), TemplateId::ApplicationMain);
                builder.file(cmd.join("main_test.go"), TemplateId::ApplicationTest);
                builder.file(cmd.join("doc.go"), TemplateId::ApplicationDoc);
                builder.file("Makefile", TemplateId::MakefileBinary);
            }
            ProjectKind::Cli => {
                builder.dir("cmd");
                builder.dir("internal/cmdinfo");
                builder.dir("internal/print");
                builder.file("main.go", TemplateId::CliMain);
                builder.file("cmd/root.go", TemplateId::CliRootCommand);
                builder.file("cmd/version.go", TemplateId::CliVersionCommand);
                builder.file("internal/cmdinfo/cmdinfo.go", TemplateId::CliCmdInfo);
                builder.file("internal/print/print.go", TemplateId::CliPrint);
                builder.file("internal/print/print_test.go", TemplateId::CliPrintTest);
                builder.file("Makefile", TemplateId::MakefileBinary);
            }
        }

        builder.file("Changelog.md", TemplateId::Changelog);

        let workflows = Path::new(CONFIG_ROOT).join("workflows");
        if spec.kind().builds_binary() {
            builder.file(workflows.join("build.yml"), TemplateId::BuildWorkflow);
            builder.file(workflows.join("release.yml"), TemplateId::ReleaseWorkflow);
            builder.file(".goreleaser.yml", TemplateId::GoReleaser);
        }
        builder.file(workflows.join("unit_test.yml"), TemplateId::UnitTestWorkflow);
        builder.file(workflows.join("reviewdog.yml"), TemplateId::LintWorkflow);

        let issues = Path::new(CONFIG_ROOT).join("issue-templates");
        builder.file("CODE_OF_CONDUCT.md", TemplateId::CodeOfConduct);
        builder.file(Path::new(CONFIG_ROOT).join("dependabot.yml"), TemplateId::Dependabot);
        builder.file(issues.join("bug_report.md"), TemplateId::BugReportIssue);
        builder.file(issues.join("issue.md"), TemplateId::TaskIssue);

        builder.layout
    }
}

struct LayoutBuilder {
    layout: PlannedLayout,
    ctx: RenderContext,
    root: PathBuf,
}

impl LayoutBuilder {
    fn root_dir(&mut self) {
        self.layout
            .add_directory(RelativePath::unchecked(self.root.clone()));
    }

    fn dir(&mut self, rel: impl AsRef<Path>) {
        let path = self.root.join(rel);
        self.layout.add_directory(RelativePath::unchecked(path));
    }

    fn file(&mut self, rel: impl AsRef<Path>, template: TemplateId) {
        let path = self.root.join(rel);
        let content = self.ctx.render(template);
        self.layout.add_file(RelativePath::unchecked(path), content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [ProjectKind; 3] = [
        ProjectKind::Library,
        ProjectKind::Application,
        ProjectKind::Cli,
    ];
    const MODES: [RootMode; 2] = [RootMode::Nested, RootMode::Flattened];

    fn planner() -> TargetPlanner {
        TargetPlanner::new(HostInfo::new("linux", "amd64", "1.22"))
    }

    fn plan(ip: &str, kind: ProjectKind, mode: RootMode) -> PlannedLayout {
        planner().plan(&ProjectSpec::new(ip, kind, mode))
    }

    fn file_names(layout: &PlannedLayout) -> Vec<String> {
        layout.files().map(|(p, _)| p.to_string()).collect()
    }

    #[test]
    fn planning_is_deterministic() {
        for kind in KINDS {
            for mode in MODES {
                assert_eq!(
                    plan("example.com/foo", kind, mode),
                    plan("example.com/foo", kind, mode)
                );
            }
        }
    }

    #[test]
    fn every_layout_is_structurally_valid() {
        for kind in KINDS {
            for mode in MODES {
                assert!(plan("example.com/foo", kind, mode).validate().is_ok());
            }
        }
    }

    #[test]
    fn nested_paths_live_under_name() {
        for kind in KINDS {
            let layout = plan("example.com/foo", kind, RootMode::Nested);
            for path in layout.all_paths() {
                assert_eq!(path.first_segment(), Some("foo"), "{path}");
            }
        }
    }

    #[test]
    fn flattened_paths_never_start_with_name() {
        for kind in KINDS {
            let layout = plan("example.com/foo", kind, RootMode::Flattened);
            assert_eq!(layout.root_dir(), Path::new(""));
            for path in layout.all_paths() {
                assert_ne!(path.first_segment(), Some("foo"), "{path}");
            }
        }
    }

    #[test]
    fn library_has_no_cmd_directory() {
        for mode in MODES {
            let layout = plan("example.com/foo", ProjectKind::Library, mode);
            assert!(
                layout
                    .all_paths()
                    .all(|p| !p.as_path().components().any(|c| c.as_os_str() == "cmd"))
            );
            assert!(layout.file(".goreleaser.yml").is_none());
        }
    }

    #[test]
    fn binaries_have_no_package_file_at_root() {
        for kind in [ProjectKind::Application, ProjectKind::Cli] {
            let nested = plan("example.com/foo", kind, RootMode::Nested);
            assert!(nested.file("foo/foo.go").is_none());

            let flat = plan("example.com/foo", kind, RootMode::Flattened);
            assert!(flat.file("foo.go").is_none());
        }
    }

    #[test]
    fn application_nested_layout() {
        let layout = plan("example.com/foo", ProjectKind::Application, RootMode::Nested);

        assert!(layout.has_directory("foo/cmd/foo"));
        assert!(layout.has_directory("foo/.config/workflows"));
        assert!(layout.has_directory("foo/.config/issue-templates"));

        let main = layout.file("foo/cmd/foo/main.go").unwrap();
        assert!(main.starts_with("package main"));
        assert!(main.contains("\"Hello, World\""));

        let makefile = layout.file("foo/Makefile").unwrap();
        assert!(makefile.contains("cmd/foo/main.go"));
        assert!(makefile.contains("GOOS        = linux"));

        assert!(
            layout
                .file("foo/.config/workflows/build.yml")
                .unwrap()
                .contains("go-version: \"1.22\"")
        );
        assert!(layout.file("foo/.goreleaser.yml").is_some());
        assert!(layout.file("foo/CODE_OF_CONDUCT.md").is_some());
    }

    #[test]
    fn library_flattened_layout() {
        let layout = plan("example.com/bar", ProjectKind::Library, RootMode::Flattened);

        assert!(layout.root().is_none());
        assert!(layout.file("bar.go").unwrap().starts_with("package bar"));
        assert!(
            layout
                .file("bar_test.go")
                .unwrap()
                .starts_with("package bar")
        );
        assert!(layout.file("doc.go").is_some());
        assert!(layout.file(".config/workflows/build.yml").is_none());
        assert!(layout.file(".config/workflows/unit_test.yml").is_some());
        assert!(!layout.has_directory("bar"));
        assert!(!layout.file("Makefile").unwrap().contains("build:"));
    }

    #[test]
    fn goreleaser_builds_the_main_package() {
        let app = plan("example.com/foo", ProjectKind::Application, RootMode::Nested);
        let main_line = app
            .file("foo/.goreleaser.yml")
            .unwrap()
            .lines()
            .find(|l| l.trim_start().starts_with("- main:"))
            .unwrap();
        assert_eq!(main_line.trim(), "- main: ./cmd/foo");

        let cli = plan("github.com/me/tool", ProjectKind::Cli, RootMode::Flattened);
        assert!(cli.file(".goreleaser.yml").unwrap().contains("  - main: .\n"));
    }

    #[test]
    fn cli_layout_wires_import_path() {
        let layout = plan("github.com/me/tool", ProjectKind::Cli, RootMode::Nested);

        let main = layout.file("tool/main.go").unwrap();
        assert!(main.contains("\"github.com/me/tool/cmd\""));
        assert!(main.contains("cmd.Execute()"));

        for dir in ["tool/cmd", "tool/internal/cmdinfo", "tool/internal/print"] {
            assert!(layout.has_directory(dir), "missing {dir}");
        }
        assert!(layout.file("tool/internal/print/print_test.go").is_some());
        assert!(layout.file("tool/Makefile").unwrap().contains("-o $(APP) main.go"));
    }

    #[test]
    fn file_sets_match_per_kind() {
        let lib = plan("example.com/foo", ProjectKind::Library, RootMode::Flattened);
        let app = plan("example.com/foo", ProjectKind::Application, RootMode::Flattened);
        let cli = plan("example.com/foo", ProjectKind::Cli, RootMode::Flattened);

        assert_eq!(lib.file_count(), 11);
        assert_eq!(app.file_count(), 14);
        assert_eq!(cli.file_count(), 17);
        assert!(file_names(&cli).iter().all(|f| !f.contains("completion")));
    }

    #[test]
    fn empty_name_still_plans() {
        let layout = plan("example.com/", ProjectKind::Library, RootMode::Nested);
        assert!(layout.file_count() > 0);
    }

    #[test]
    fn hostile_name_is_caught_by_validation() {
        let layout = plan("example.com/..", ProjectKind::Application, RootMode::Nested);
        assert!(layout.validate().is_err());
    }
}
