//! Toolchain stand-in that records calls instead of running `go`.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use gosprout_core::{
    application::{ApplicationError, ports::Toolchain},
    error::GosproutResult,
};

/// A recorded toolchain invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainCall {
    ModInit { dir: PathBuf, import_path: String },
    ModTidy { dir: PathBuf },
}

/// Fake toolchain for tests and offline runs.
///
/// Clones share the same call log.
#[derive(Debug, Clone)]
pub struct RecordingToolchain {
    available: bool,
    version: Option<String>,
    fail_tidy: bool,
    calls: Arc<Mutex<Vec<ToolchainCall>>>,
}

impl RecordingToolchain {
    pub fn new() -> Self {
        Self {
            available: true,
            version: Some("go1.22.0".into()),
            fail_tidy: false,
            calls: Arc::default(),
        }
    }

    /// Behave as if `go` were not installed.
    pub fn missing() -> Self {
        Self {
            available: false,
            version: None,
            ..Self::new()
        }
    }

    /// Make `mod_tidy` fail like a network error would.
    pub fn failing_tidy(mut self) -> Self {
        self.fail_tidy = true;
        self
    }

    pub fn calls(&self) -> Vec<ToolchainCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: ToolchainCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl Default for RecordingToolchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolchain for RecordingToolchain {
    fn name(&self) -> String {
        "go".into()
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn version(&self) -> Option<String> {
        self.version.clone()
    }

    fn mod_init(&self, dir: &Path, import_path: &str) -> GosproutResult<()> {
        self.record(ToolchainCall::ModInit {
            dir: dir.to_path_buf(),
            import_path: import_path.to_string(),
        });
        Ok(())
    }

    fn mod_tidy(&self, dir: &Path) -> GosproutResult<()> {
        self.record(ToolchainCall::ModTidy {
            dir: dir.to_path_buf(),
        });

        if self.fail_tidy {
            return Err(ApplicationError::ExternalToolFailed {
                command: "go mod tidy".into(),
                reason: "dial tcp: lookup proxy.golang.org: no such host".into(),
            }
            .into());
        }
        Ok(())
    }
}
