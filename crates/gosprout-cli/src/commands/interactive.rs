//! Interactive collection of the generation inputs.
//!
//! Asks for the import path, the project kind and the project root, shows
//! the answers and asks for confirmation. A rejected import path is asked
//! again, at most `max_attempts` times in total.

use std::path::Path;

use tracing::debug;

use gosprout_core::domain::{ProjectKind, ProjectSpec, RootMode};

use crate::error::{CliError, CliResult};

/// Kind choices in menu order.
const KINDS: [(ProjectKind, &str); 3] = [
    (ProjectKind::Application, "Simple Application"),
    (ProjectKind::Library, "Library"),
    (ProjectKind::Cli, "CLI tool with cobra"),
];

/// Source of answers. The terminal implementation is behind the
/// `interactive` feature.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Free-text answer.
    fn input(&self, prompt: &str) -> CliResult<String>;

    /// Index into `items`.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> CliResult<usize>;

    fn confirm(&self, prompt: &str, default: bool) -> CliResult<bool>;

    /// Informational line shown between questions.
    fn note(&self, line: &str);
}

/// Ask on the terminal.
pub fn ask(workspace: &Path, max_attempts: u32, color: bool) -> CliResult<ProjectSpec> {
    let prompter = terminal_prompter(color)?;
    collect_spec(prompter.as_ref(), workspace, max_attempts)
}

/// Run the question sequence against any [`Prompter`].
pub fn collect_spec(
    prompter: &dyn Prompter,
    workspace: &Path,
    max_attempts: u32,
) -> CliResult<ProjectSpec> {
    let import_path = ask_import_path(prompter, max_attempts)?;

    let labels: Vec<String> = KINDS.iter().map(|(_, label)| label.to_string()).collect();
    let kind = KINDS
        .get(prompter.select("Project kind", &labels, 0)?)
        .map(|(kind, _)| *kind)
        .ok_or_else(|| invalid("unknown project kind selected"))?;

    // The name only depends on the import path.
    let name = ProjectSpec::new(import_path.as_str(), kind, RootMode::Nested)
        .name()
        .to_string();
    let nested = workspace.join(&name);
    let roots = vec![
        format!("{} (new directory)", nested.display()),
        format!("{} (current directory)", workspace.display()),
    ];
    let root_mode = match prompter.select("Project root", &roots, 0)? {
        0 => RootMode::Nested,
        1 => RootMode::Flattened,
        _ => return Err(invalid("unknown project root selected")),
    };

    let spec = ProjectSpec::new(import_path, kind, root_mode);
    let root = match root_mode {
        RootMode::Nested => nested,
        RootMode::Flattened => workspace.to_path_buf(),
    };

    prompter.note("===Confirm the input information===");
    prompter.note(&format!("Import path : {}", spec.import_path()));
    prompter.note(&format!("Project kind: {}", kind_label(kind)));
    prompter.note(&format!("Project root: {}", root.display()));

    if !prompter.confirm("Generate the project?", true)? {
        debug!("Generation declined at confirmation");
        return Err(CliError::Cancelled);
    }
    Ok(spec)
}

fn ask_import_path(prompter: &dyn Prompter, max_attempts: u32) -> CliResult<String> {
    for attempt in 1..=max_attempts {
        let answer = prompter.input("Import path (e.g. github.com/me/tool)")?;
        let answer = answer.trim();
        match check_import_path(answer) {
            Ok(()) => return Ok(answer.to_string()),
            Err(reason) => {
                debug!(attempt, reason, "Import path rejected");
                prompter.note(&format!("{reason}, please try again"));
            }
        }
    }
    Err(invalid(format!(
        "no valid import path after {max_attempts} attempts"
    )))
}

fn check_import_path(path: &str) -> Result<(), &'static str> {
    if path.is_empty() {
        return Err("import path is empty");
    }
    if path.ends_with('/') {
        return Err("import path must not end with '/'");
    }
    if path.chars().any(char::is_whitespace) {
        return Err("import path must not contain whitespace");
    }
    Ok(())
}

fn kind_label(kind: ProjectKind) -> &'static str {
    KINDS
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or("", |(_, label)| *label)
}

fn invalid(message: impl Into<String>) -> CliError {
    CliError::InvalidInput {
        message: message.into(),
        source: None,
    }
}

#[cfg(feature = "interactive")]
fn terminal_prompter(color: bool) -> CliResult<Box<dyn Prompter>> {
    Ok(Box::new(terminal::TerminalPrompter::new(color)))
}

#[cfg(not(feature = "interactive"))]
fn terminal_prompter(_color: bool) -> CliResult<Box<dyn Prompter>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
mod terminal {
    use console::Term;
    use dialoguer::{
        Confirm, Input, Select,
        theme::{ColorfulTheme, SimpleTheme, Theme},
    };
    use tracing::debug;

    use super::Prompter;
    use crate::error::{CliError, CliResult};

    /// `dialoguer` prompts on stderr.
    pub struct TerminalPrompter {
        theme: Box<dyn Theme>,
        term: Term,
    }

    impl TerminalPrompter {
        pub fn new(color: bool) -> Self {
            let theme: Box<dyn Theme> = if color {
                Box::new(ColorfulTheme::default())
            } else {
                Box::new(SimpleTheme)
            };
            Self {
                theme,
                term: Term::stderr(),
            }
        }
    }

    impl Prompter for TerminalPrompter {
        fn input(&self, prompt: &str) -> CliResult<String> {
            Input::<String>::with_theme(self.theme.as_ref())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_failed)
        }

        fn select(&self, prompt: &str, items: &[String], default: usize) -> CliResult<usize> {
            Select::with_theme(self.theme.as_ref())
                .with_prompt(prompt)
                .items(items)
                .default(default)
                .interact()
                .map_err(prompt_failed)
        }

        fn confirm(&self, prompt: &str, default: bool) -> CliResult<bool> {
            Confirm::with_theme(self.theme.as_ref())
                .with_prompt(prompt)
                .default(default)
                .interact()
                .map_err(prompt_failed)
        }

        fn note(&self, line: &str) {
            if let Err(e) = self.term.write_line(line) {
                debug!(error = %e, "Failed to write prompt note");
            }
        }
    }

    fn prompt_failed(err: dialoguer::Error) -> CliError {
        CliError::InvalidInput {
            message: "could not read an answer from the terminal".into(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;

    fn prompter_with_paths(paths: &'static [&'static str]) -> MockPrompter {
        let mut p = MockPrompter::new();
        let mut seq = Sequence::new();
        for path in paths {
            p.expect_input()
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_| Ok(path.to_string()));
        }
        p.expect_note().return_const(());
        p
    }

    #[test]
    fn collects_a_nested_application() {
        let mut p = prompter_with_paths(&["example.com/foo"]);
        p.expect_select()
            .withf(|prompt, items, _| prompt == "Project kind" && items[2] == "CLI tool with cobra")
            .returning(|_, _, _| Ok(0));
        p.expect_select()
            .withf(|prompt, items, _| {
                prompt == "Project root" && items[0] == "/ws/foo (new directory)"
            })
            .returning(|_, _, _| Ok(0));
        p.expect_confirm().returning(|_, _| Ok(true));

        let spec = collect_spec(&p, Path::new("/ws"), 3).unwrap();

        assert_eq!(
            spec,
            ProjectSpec::new("example.com/foo", ProjectKind::Application, RootMode::Nested)
        );
    }

    #[test]
    fn flattened_cli_from_menu_choices() {
        let mut p = prompter_with_paths(&["  github.com/me/tool  "]);
        p.expect_select()
            .withf(|prompt, _, _| prompt == "Project kind")
            .returning(|_, _, _| Ok(2));
        p.expect_select()
            .withf(|prompt, _, _| prompt == "Project root")
            .returning(|_, _, _| Ok(1));
        p.expect_confirm().returning(|_, _| Ok(true));

        let spec = collect_spec(&p, Path::new("/ws"), 3).unwrap();

        assert_eq!(spec.import_path(), "github.com/me/tool");
        assert_eq!(spec.kind(), ProjectKind::Cli);
        assert_eq!(spec.root_mode(), RootMode::Flattened);
    }

    #[test]
    fn bad_import_paths_are_asked_again() {
        let mut p = prompter_with_paths(&["", "example.com/foo/", "example.com/lib"]);
        p.expect_select().returning(|prompt, _, _| {
            Ok(if prompt == "Project kind" { 1 } else { 0 })
        });
        p.expect_confirm().returning(|_, _| Ok(true));

        let spec = collect_spec(&p, Path::new("/ws"), 3).unwrap();

        assert_eq!(spec.kind(), ProjectKind::Library);
        assert_eq!(spec.name(), "lib");
    }

    #[test]
    fn retries_are_bounded() {
        let mut p = prompter_with_paths(&["", "   "]);
        p.expect_select().never();
        p.expect_confirm().never();

        let err = collect_spec(&p, Path::new("/ws"), 2).unwrap_err();

        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn declining_confirmation_cancels() {
        let mut p = prompter_with_paths(&["example.com/foo"]);
        p.expect_select().returning(|_, _, _| Ok(0));
        p.expect_confirm().returning(|_, _| Ok(false));

        let err = collect_spec(&p, Path::new("/ws"), 3).unwrap_err();
        assert!(matches!(err, CliError::Cancelled));
    }

    #[test]
    fn confirmation_summary_lists_the_answers() {
        let mut p = MockPrompter::new();
        p.expect_input().returning(|_| Ok("example.com/foo".into()));
        p.expect_select().returning(|_, _, _| Ok(0));
        p.expect_confirm().returning(|_, _| Ok(true));

        let mut seq = Sequence::new();
        for expected in [
            "===Confirm the input information===",
            "Import path : example.com/foo",
            "Project kind: Simple Application",
            "Project root: /ws/foo",
        ] {
            p.expect_note()
                .withf(move |line| line == expected)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }

        collect_spec(&p, Path::new("/ws"), 3).unwrap();
    }

    #[test]
    fn import_path_checks() {
        assert!(check_import_path("example.com/foo").is_ok());
        assert!(check_import_path("foo").is_ok());
        assert!(check_import_path("").is_err());
        assert!(check_import_path("example.com/foo/").is_err());
        assert!(check_import_path("example.com/my app").is_err());
    }
}
