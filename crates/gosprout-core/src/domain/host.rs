//! Host facts baked into generated files.
//!
//! These values come from the machine running the generator, so the same
//! project spec renders differently on different hosts. Everything else in
//! a planned layout is a pure function of the `ProjectSpec`.

use serde::Serialize;

/// Go toolchain version used when `go` cannot be queried.
pub const FALLBACK_GO_VERSION: &str = "stable";

/// Target OS, architecture and Go version in Go's own vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    goos: String,
    goarch: String,
    go_version: String,
}

impl HostInfo {
    pub fn new(
        goos: impl Into<String>,
        goarch: impl Into<String>,
        go_version: impl Into<String>,
    ) -> Self {
        Self {
            goos: goos.into(),
            goarch: goarch.into(),
            go_version: go_version.into(),
        }
    }

    /// Describe the platform this binary was built for.
    ///
    /// `go_version` is whatever the toolchain reported (`go1.22.3`,
    /// `1.22`, ...); `None` or an unparseable value falls back to
    /// [`FALLBACK_GO_VERSION`].
    pub fn from_build_target(go_version: Option<&str>) -> Self {
        let go_version = go_version
            .and_then(normalize_go_version)
            .unwrap_or_else(|| FALLBACK_GO_VERSION.to_string());

        Self::new(
            go_os(std::env::consts::OS),
            go_arch(std::env::consts::ARCH),
            go_version,
        )
    }

    pub fn goos(&self) -> &str {
        &self.goos
    }

    pub fn goarch(&self) -> &str {
        &self.goarch
    }

    pub fn go_version(&self) -> &str {
        &self.go_version
    }
}

/// `go1.22.3` -> `1.22`, `1.21rc2` -> `1.21`, `devel` -> `None`.
pub fn normalize_go_version(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let version = trimmed.strip_prefix("go").unwrap_or(trimmed);

    let mut parts = version.split('.');
    let major = leading_digits(parts.next()?)?;
    let minor = leading_digits(parts.next()?)?;

    Some(format!("{major}.{minor}"))
}

fn leading_digits(s: &str) -> Option<&str> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    (end > 0).then(|| &s[..end])
}

fn go_os(rust_os: &str) -> &str {
    match rust_os {
        "macos" => "darwin",
        other => other,
    }
}

fn go_arch(rust_arch: &str) -> &str {
    match rust_arch {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "loongarch64" => "loong64",
        "wasm32" => "wasm",
        "powerpc64" if cfg!(target_endian = "little") => "ppc64le",
        "powerpc64" => "ppc64",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_toolchain_output() {
        assert_eq!(normalize_go_version("go1.22.3"), Some("1.22".into()));
        assert_eq!(normalize_go_version("go1.21rc2\n"), Some("1.21".into()));
        assert_eq!(normalize_go_version("1.23"), Some("1.23".into()));
        assert_eq!(normalize_go_version("devel +abc"), None);
        assert_eq!(normalize_go_version(""), None);
    }

    #[test]
    fn falls_back_without_toolchain() {
        let host = HostInfo::from_build_target(None);
        assert_eq!(host.go_version(), FALLBACK_GO_VERSION);
        assert!(!host.goos().is_empty());
    }

    #[test]
    fn maps_rust_names_to_go_names() {
        assert_eq!(go_os("macos"), "darwin");
        assert_eq!(go_os("linux"), "linux");
        assert_eq!(go_arch("x86_64"), "amd64");
        assert_eq!(go_arch("aarch64"), "arm64");
        assert_eq!(go_arch("x86"), "386");
    }
}
