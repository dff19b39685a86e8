//! The real `go` command.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use gosprout_core::{
    application::{ApplicationError, ports::Toolchain},
    error::GosproutResult,
};
use tracing::{debug, warn};

/// Runs `go` (or a configured replacement) found on `PATH`.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    command: String,
}

impl GoToolchain {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn resolve(&self) -> Option<PathBuf> {
        which::which(&self.command).ok()
    }

    fn run(&self, dir: &Path, args: &[&str]) -> GosproutResult<()> {
        let cmd_line = format!("{} {}", self.command, args.join(" "));
        let program = self
            .resolve()
            .ok_or_else(|| ApplicationError::ToolUnavailable {
                tool: self.command.clone(),
            })?;

        debug!(command = %cmd_line, dir = %dir.display(), "Running toolchain command");

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::ExternalToolFailed {
                command: cmd_line.clone(),
                reason: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match stderr.trim() {
            "" => output.status.to_string(),
            msg => msg.to_string(),
        };
        warn!(command = %cmd_line, %reason, "Toolchain command failed");

        Err(ApplicationError::ExternalToolFailed {
            command: cmd_line,
            reason,
        }
        .into())
    }
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self::new("go")
    }
}

impl Toolchain for GoToolchain {
    fn name(&self) -> String {
        self.command.clone()
    }

    fn is_available(&self) -> bool {
        self.resolve().is_some()
    }

    fn version(&self) -> Option<String> {
        let program = self.resolve()?;
        let output = Command::new(program)
            .args(["env", "GOVERSION"])
            .stdin(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!version.is_empty()).then_some(version)
    }

    fn mod_init(&self, dir: &Path, import_path: &str) -> GosproutResult<()> {
        self.run(dir, &["mod", "init", import_path])
    }

    fn mod_tidy(&self, dir: &Path) -> GosproutResult<()> {
        self.run(dir, &["mod", "tidy"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_is_unavailable() {
        let tc = GoToolchain::new("gosprout-no-such-go-binary");
        assert!(!tc.is_available());
        assert_eq!(tc.version(), None);
    }

    #[test]
    fn running_unknown_command_reports_tool_unavailable() {
        let tc = GoToolchain::new("gosprout-no-such-go-binary");
        let err = tc.mod_tidy(Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("gosprout-no-such-go-binary"));
    }
}
