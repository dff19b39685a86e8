//! Command-line interface definitions.

use clap::{Args, Parser};

use gosprout_core::domain::{ProjectKind, ProjectSpec, RootMode};

use crate::error::{CliError, CliResult};

pub mod global;

pub use global::{GlobalArgs, OutputFormat};

/// gosprout - Go module project generator.
#[derive(Debug, Parser)]
#[command(
    name = "gosprout",
    bin_name = "gosprout",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Generate a ready-to-build Go module project",
    long_about = "gosprout creates the directory layout, source files, Makefile, \
                  CI workflows and community files for a new Go module, then runs \
                  `go mod init` (and `go mod tidy` for cobra CLI projects).",
    after_help = "EXAMPLES:\n\
                  \x20 gosprout github.com/me/app          Simple application under ./app\n\
                  \x20 gosprout --library example.com/lib  Library package under ./lib\n\
                  \x20 gosprout --cli --no-root github.com/me/tool\n\
                  \x20 gosprout --interactive\n\
                  \x20 gosprout --dry-run --output-format json example.com/foo"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Inputs describing the project to generate.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Go module import path, e.g. github.com/me/tool.
    ///
    /// Its last `/`-separated segment becomes the project name.
    #[arg(value_name = "IMPORT_PATH", required_unless_present = "interactive")]
    pub import_path: Option<String>,

    /// Generate a library project.
    #[arg(short = 'l', long = "library")]
    pub library: bool,

    /// Generate a CLI project built on cobra.
    #[arg(short = 'c', long = "cli", conflicts_with = "library")]
    pub cli: bool,

    /// Write into the current directory instead of ./<name>.
    #[arg(short = 'n', long = "no-root")]
    pub no_root: bool,

    /// Ask for the inputs interactively.
    #[arg(
        short = 'i',
        long = "interactive",
        conflicts_with_all = ["import_path", "library", "cli", "no_root"]
    )]
    pub interactive: bool,

    /// Print the planned layout without writing anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Build the run's [`ProjectSpec`] from the flags.
    pub fn to_spec(&self) -> CliResult<ProjectSpec> {
        let import_path = self
            .import_path
            .clone()
            .ok_or_else(|| CliError::InvalidInput {
                message: "IMPORT_PATH is required unless --interactive is given".into(),
                source: None,
            })?;

        let kind = ProjectKind::from_flags(self.library, self.cli)
            .map_err(|e| CliError::Core(e.into()))?;

        Ok(ProjectSpec::new(
            import_path,
            kind,
            RootMode::from_no_root(self.no_root),
        ))
    }
}
