//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! owns configuration; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GOSPROUT__<SECTION>__<KEY>`
//! 3. Config file: `--config <FILE>` or the platform config directory
//! 4. Built-in defaults

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Go toolchain settings.
    pub toolchain: ToolchainConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Interactive mode settings.
    pub interactive: InteractiveConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Executable looked up on `PATH` and run for `mod init` / `mod tidy`.
    pub command: String,
    /// Run `go mod tidy` after generating a cobra CLI project.
    pub tidy_cli: bool,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            command: "go".into(),
            tidy_cli: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractiveConfig {
    /// How many times an invalid answer is re-asked before giving up.
    pub max_attempts: u32,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

impl AppConfig {
    /// Load configuration on top of the built-in defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_path()).required(required))
            .add_source(
                config::Environment::with_prefix("GOSPROUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .context("invalid configuration")?;
        config.validate()?;

        tracing::debug!(path = %path.display(), ?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.gosprout.toml` in
    /// the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "gosprout", "gosprout")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".gosprout.toml"))
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.toolchain.command.trim().is_empty() {
            anyhow::bail!("toolchain.command must not be empty");
        }
        if self.interactive.max_attempts == 0 {
            anyhow::bail!("interactive.max_attempts must be at least 1");
        }
        Ok(())
    }
}
