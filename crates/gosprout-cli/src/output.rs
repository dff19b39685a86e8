//! Output management and formatting.
//!
//! [`OutputManager`] is both the CLI's message printer and the core
//! [`Reporter`], so generation banners follow the same quiet / colour /
//! format rules as everything else.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, warn};

use gosprout_adapters::render_tree;
use gosprout_core::{
    application::{GenerationSummary, Stage, ports::Reporter},
    domain::{PlannedLayout, ProjectSpec},
    error::GosproutResult,
};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Indentation of the generated-tree listing.
const TREE_INDENT: &str = "        ";

/// Manages CLI output based on configuration.
#[derive(Clone)]
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
    spinner: Arc<Mutex<Option<ProgressBar>>>,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto → Human on a TTY, Plain when piped or redirected.
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
            spinner: Arc::new(Mutex::new(None)),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Machine-readable payload; printed even in quiet mode.
    pub fn json(&self, value: &serde_json::Value) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Stop a running spinner, e.g. after a stage failed.
    pub fn abort_progress(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.finish_and_clear();
            }
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    // ── Internal helpers ──────────────────────────────────────────────────

    /// Whether progress banners should be printed at all.
    fn narrates(&self) -> bool {
        !self.quiet && self.resolved_format != OutputFormat::Json
    }

    fn report(&self, result: io::Result<()>) {
        if let Err(e) = result {
            debug!(error = %e, "Failed to write to terminal");
        }
    }

    fn start_spinner(&self, message: &str) {
        let style = match ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            Ok(style) => style,
            Err(e) => {
                debug!(error = %e, "Invalid spinner template");
                return;
            }
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(spinner) {
                previous.finish_and_clear();
            }
        }
    }
}

impl Reporter for OutputManager {
    fn generation_started(&self, spec: &ProjectSpec) {
        if !self.narrates() {
            return;
        }
        self.report(self.header(&format!(
            "gosprout: {} project '{}' (import path {})",
            spec.kind(),
            spec.name(),
            spec.import_path()
        )));
    }

    fn stage_started(&self, stage: Stage, banner: &str) {
        if !self.narrates() {
            return;
        }
        let tag = if self.no_color {
            "[START]".to_string()
        } else {
            "[START]".green().bold().to_string()
        };
        self.report(self.term.write_line(&format!("{tag} {banner}")));

        if stage.runs_external_tool() && self.resolved_format == OutputFormat::Human {
            self.start_spinner(&format!("running {stage}"));
        }
    }

    fn stage_finished(&self, _stage: Stage) {
        self.abort_progress();
    }

    fn layout_materialized(&self, project_root: &Path, layout: &PlannedLayout) {
        if !self.narrates() {
            return;
        }
        match project_tree(project_root, layout) {
            Ok(lines) => {
                for line in lines {
                    self.report(self.term.write_line(&line));
                }
            }
            Err(e) => warn!(error = %e, "Could not list the generated project"),
        }
    }

    fn generation_finished(&self, summary: &GenerationSummary) {
        if !self.narrates() {
            return;
        }
        let line = format!("BUILD SUCCESSFUL in {}[ms]", summary.elapsed.as_millis());
        let line = if self.no_color {
            line
        } else {
            line.green().bold().to_string()
        };
        self.report(self.term.write_line(&line));
    }
}

/// Heading plus indented tree of what was generated under `project_root`.
pub fn project_tree(project_root: &Path, layout: &PlannedLayout) -> GosproutResult<Vec<String>> {
    let label = project_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_root.display().to_string());

    let mut lines = vec![format!("{TREE_INDENT}{label} (your project root)")];
    lines.extend(
        render_tree(project_root, layout)?
            .into_iter()
            .map(|line| format!("{TREE_INDENT}{line}")),
    );
    Ok(lines)
}

// ── tests ─────────────────────────────────────────────────────────────────────
