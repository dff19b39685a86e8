//! Built-in template catalog.
//!
//! Each template is a [`TemplateId`] paired with a static body and the set of
//! placeholders it declares. Bodies live in the sibling modules, grouped by
//! what they produce:
//!
//! - `go_sources`: Go source and test stubs
//! - `tooling`: Makefiles and release configuration
//! - `workflows`: CI workflow definitions
//! - `community`: changelog, code of conduct, issue templates, bot config

mod community;
mod go_sources;
mod tooling;
mod workflows;

use std::fmt;

use self::Placeholder as P;

/// A substitution token understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    Package,
    ImportPath,
    AppName,
    Goos,
    Goarch,
    GoVersion,
    BuildSource,
    BuildDir,
}

impl Placeholder {
    /// Literal text replaced in template bodies.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Package => "{{PACKAGE}}",
            Self::ImportPath => "{{IMPORT_PATH}}",
            Self::AppName => "{{APP_NAME}}",
            Self::Goos => "{{GOOS}}",
            Self::Goarch => "{{GOARCH}}",
            Self::GoVersion => "{{GO_VERSION}}",
            Self::BuildSource => "{{BUILD_SOURCE}}",
            Self::BuildDir => "{{BUILD_DIR}}",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Identifier of a built-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    LibrarySource,
    LibraryTest,
    LibraryDoc,
    ApplicationMain,
    ApplicationTest,
    ApplicationDoc,
    CliMain,
    CliRootCommand,
    CliVersionCommand,
    CliCmdInfo,
    CliPrint,
    CliPrintTest,
    MakefileLibrary,
    MakefileBinary,
    GoReleaser,
    Changelog,
    BuildWorkflow,
    UnitTestWorkflow,
    LintWorkflow,
    ReleaseWorkflow,
    CodeOfConduct,
    Dependabot,
    BugReportIssue,
    TaskIssue,
}

impl TemplateId {
    pub const ALL: [TemplateId; 24] = [
        Self::LibrarySource,
        Self::LibraryTest,
        Self::LibraryDoc,
        Self::ApplicationMain,
        Self::ApplicationTest,
        Self::ApplicationDoc,
        Self::CliMain,
        Self::CliRootCommand,
        Self::CliVersionCommand,
        Self::CliCmdInfo,
        Self::CliPrint,
        Self::CliPrintTest,
        Self::MakefileLibrary,
        Self::MakefileBinary,
        Self::GoReleaser,
        Self::Changelog,
        Self::BuildWorkflow,
        Self::UnitTestWorkflow,
        Self::LintWorkflow,
        Self::ReleaseWorkflow,
        Self::CodeOfConduct,
        Self::Dependabot,
        Self::BugReportIssue,
        Self::TaskIssue,
    ];

    /// Raw template text with `{{TOKEN}}` placeholders.
    pub const fn body(self) -> &'static str {
        match self {
            Self::LibrarySource => go_sources::LIBRARY_SOURCE,
            Self::LibraryTest => go_sources::LIBRARY_TEST,
            Self::LibraryDoc => go_sources::LIBRARY_DOC,
            Self::ApplicationMain => go_sources::APPLICATION_MAIN,
            Self::ApplicationTest => go_sources::APPLICATION_TEST,
            Self::ApplicationDoc => go_sources::APPLICATION_DOC,
            Self::CliMain => go_sources::CLI_MAIN,
            Self::CliRootCommand => go_sources::CLI_ROOT_COMMAND,
            Self::CliVersionCommand => go_sources::CLI_VERSION_COMMAND,
            Self::CliCmdInfo => go_sources::CLI_CMDINFO,
            Self::CliPrint => go_sources::CLI_PRINT,
            Self::CliPrintTest => go_sources::CLI_PRINT_TEST,
            Self::MakefileLibrary => tooling::MAKEFILE_LIBRARY,
            Self::MakefileBinary => tooling::MAKEFILE_BINARY,
            Self::GoReleaser => tooling::GORELEASER,
            Self::Changelog => community::CHANGELOG,
            Self::BuildWorkflow => workflows::BUILD,
            Self::UnitTestWorkflow => workflows::UNIT_TEST,
            Self::LintWorkflow => workflows::REVIEWDOG,
            Self::ReleaseWorkflow => workflows::RELEASE,
            Self::CodeOfConduct => community::CODE_OF_CONDUCT,
            Self::Dependabot => community::DEPENDABOT,
            Self::BugReportIssue => community::BUG_REPORT,
            Self::TaskIssue => community::TASK_ISSUE,
        }
    }

    /// Placeholders this template expects to be filled.
    pub const fn placeholders(self) -> &'static [Placeholder] {
        match self {
            Self::LibrarySource | Self::LibraryTest | Self::LibraryDoc => &[P::Package],
            Self::ApplicationDoc | Self::CliCmdInfo => &[P::AppName],
            Self::GoReleaser => &[P::AppName, P::BuildDir],
            Self::CliMain | Self::CliVersionCommand | Self::CliPrint => &[P::ImportPath],
            Self::CliRootCommand => &[P::ImportPath, P::AppName],
            Self::MakefileLibrary => &[P::AppName, P::Goos, P::Goarch],
            Self::MakefileBinary => &[P::AppName, P::Goos, P::Goarch, P::BuildSource],
            Self::BuildWorkflow | Self::UnitTestWorkflow | Self::ReleaseWorkflow => {
                &[P::GoVersion]
            }
            Self::ApplicationMain
            | Self::ApplicationTest
            | Self::CliPrintTest
            | Self::Changelog
            | Self::LintWorkflow
            | Self::CodeOfConduct
            | Self::Dependabot
            | Self::BugReportIssue
            | Self::TaskIssue => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HostInfo, ProjectKind, ProjectSpec, RenderContext, RootMode};

    const ALL_PLACEHOLDERS: [Placeholder; 8] = [
        P::Package,
        P::ImportPath,
        P::AppName,
        P::Goos,
        P::Goarch,
        P::GoVersion,
        P::BuildSource,
        P::BuildDir,
    ];

    fn full_context() -> RenderContext {
        let spec = ProjectSpec::new("example.com/foo", ProjectKind::Application, RootMode::Nested);
        RenderContext::for_project(&spec, &HostInfo::new("linux", "amd64", "1.22"))
    }

    #[test]
    fn declared_placeholders_appear_in_body() {
        for id in TemplateId::ALL {
            for p in id.placeholders() {
                assert!(
                    id.body().contains(p.token()),
                    "{id:?} declares {p} but its body never uses it"
                );
            }
        }
    }

    #[test]
    fn undeclared_placeholders_never_appear_in_body() {
        for id in TemplateId::ALL {
            for p in ALL_PLACEHOLDERS {
                if !id.placeholders().contains(&p) {
                    assert!(
                        !id.body().contains(p.token()),
                        "{id:?} uses {p} without declaring it"
                    );
                }
            }
        }
    }

    #[test]
    fn no_declared_placeholder_survives_rendering() {
        let ctx = full_context();
        for id in TemplateId::ALL {
            let out = ctx.render(id);
            for p in id.placeholders() {
                assert!(!out.contains(p.token()), "{id:?} still contains {p}");
            }
        }
    }

    #[test]
    fn foreign_template_syntax_is_preserved() {
        let ctx = full_context();
        assert!(
            ctx.render(TemplateId::GoReleaser)
                .contains("{{ .ProjectName }}")
        );
        assert!(
            ctx.render(TemplateId::ReleaseWorkflow)
                .contains("${{ secrets.GITHUB_TOKEN }}")
        );
    }
}
