//! Project generation from flags or interactive answers.
//!
//! Responsibility: turn the inputs into a `ProjectSpec`, wire the adapters
//! into `GenerateService`, and display results. No generation logic lives
//! here.

use std::path::Path;

use serde_json::json;
use tracing::{debug, info, instrument};

use gosprout_adapters::{GoToolchain, LocalFilesystem};
use gosprout_core::{
    application::{ApplicationError, GenerateService, GenerationSummary},
    domain::{PlannedLayout, ProjectKind, ProjectSpec, RootMode, TargetPlanner},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    commands::interactive,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute a generation run.
///
/// 1. Resolve the `ProjectSpec` (flags or prompts)
/// 2. Build the service around the local filesystem and `go`
/// 3. Early-exit with the plan on `--dry-run`
/// 4. Generate, then print a summary
#[instrument(skip_all, fields(interactive = args.interactive, dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let workspace =
        std::env::current_dir().with_cli_context(|| "cannot read the current directory")?;

    let spec = if args.interactive {
        interactive::ask(
            &workspace,
            config.interactive.max_attempts,
            output.supports_color(),
        )?
    } else {
        args.to_spec()?
    };
    debug!(%spec, workspace = %workspace.display(), "Project spec resolved");

    let service = GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GoToolchain::new(config.toolchain.command.clone())),
        Box::new(output.clone()),
        workspace,
    )
    .with_tidy_cli(config.toolchain.tidy_cli);

    if args.dry_run {
        return show_plan(&service.planner(), &spec, service.workspace(), &output);
    }

    let summary = service
        .generate(&spec)
        .inspect_err(|_| output.abort_progress())?;

    info!(
        project_root = %summary.project_root.display(),
        files = summary.files,
        "Project generated"
    );

    show_summary(&spec, &summary, &output)
}

// ── Dry run ───────────────────────────────────────────────────────────────────

fn show_plan(
    planner: &TargetPlanner,
    spec: &ProjectSpec,
    workspace: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    if spec.name().trim().is_empty() {
        return Err(CliError::Core(ApplicationError::EmptyProjectName.into()));
    }

    let layout = planner.plan(spec);
    layout.validate().map_err(|e| CliError::Core(e.into()))?;

    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "dry_run": true,
            "spec": spec,
            "host": planner.host(),
            "layout": layout,
        }))?;
        return Ok(());
    }

    let project_root = match layout.root() {
        Some(root) => workspace.join(root),
        None => workspace.to_path_buf(),
    };
    output.header(&format!(
        "Dry run: would create {} project '{}' in {}",
        spec.kind(),
        spec.name(),
        project_root.display()
    ))?;
    output.info(&format!(
        "{} directories, {} files; nothing was written",
        layout.directory_count(),
        layout.file_count()
    ))?;
    for line in plan_lines(&layout) {
        output.print(&line)?;
    }
    Ok(())
}

/// One line per planned path: directories with a trailing `/`, files with
/// their size.
fn plan_lines(layout: &PlannedLayout) -> Vec<String> {
    let dirs = layout.directories().map(|d| format!("  {d}/"));
    let files = layout
        .files()
        .map(|(path, content)| format!("  {path} ({} bytes)", content.len()));
    dirs.chain(files).collect()
}

// ── Success output ────────────────────────────────────────────────────────────

fn show_summary(
    spec: &ProjectSpec,
    summary: &GenerationSummary,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "project_root": summary.project_root,
            "import_path": summary.import_path,
            "kind": summary.kind,
            "directories": summary.directories,
            "files": summary.files,
            "tidied": summary.tidied,
            "elapsed_ms": summary.elapsed.as_millis() as u64,
        }))?;
        return Ok(());
    }

    output.success(&format!(
        "{} files written to {}",
        summary.files,
        summary.project_root.display()
    ))?;
    if spec.kind() == ProjectKind::Cli && !summary.tidied {
        output.warning("`go mod tidy` was skipped (toolchain.tidy_cli = false)")?;
    }

    output.print("")?;
    output.print("Next steps:")?;
    for step in next_steps(spec, summary.tidied) {
        output.print(&format!("  {step}"))?;
    }
    Ok(())
}

fn next_steps(spec: &ProjectSpec, tidied: bool) -> Vec<String> {
    let mut steps = Vec::new();
    if spec.root_mode() == RootMode::Nested {
        steps.push(format!("cd {}", spec.name()));
    }
    if spec.kind() == ProjectKind::Cli && !tidied {
        steps.push("go mod tidy".into());
    }
    steps.push("make test".into());
    if spec.kind().builds_binary() {
        steps.push("make build".into());
    }
    steps
}
