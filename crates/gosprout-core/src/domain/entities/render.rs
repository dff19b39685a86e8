//! Placeholder substitution for built-in templates.

use std::collections::BTreeMap;

use crate::domain::{
    host::HostInfo,
    templates::{Placeholder, TemplateId},
    value_objects::ProjectKind,
};

use super::ProjectSpec;

/// Values substituted into template bodies.
///
/// A **Value Object**: built once per run from the project spec and the host,
/// then only read. Tokens are literal `{{NAME}}` strings; there are no
/// conditionals, so kind-specific differences are expressed by picking a
/// different [`TemplateId`].
///
/// | Placeholder    | Example              | Source                   |
/// |----------------|----------------------|--------------------------|
/// | `PACKAGE`      | `foo`                | last import-path segment |
/// | `IMPORT_PATH`  | `example.com/foo`    | user input               |
/// | `APP_NAME`     | `foo`                | last import-path segment |
/// | `GOOS`         | `linux`              | build target             |
/// | `GOARCH`       | `amd64`              | build target             |
/// | `GO_VERSION`   | `1.22`               | `go env GOVERSION`       |
/// | `BUILD_SOURCE` | `cmd/foo/main.go`    | project kind             |
/// | `BUILD_DIR`    | `./cmd/foo`          | project kind             |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    values: BTreeMap<Placeholder, String>,
}

impl RenderContext {
    /// Derive every substitution value for one project.
    pub fn for_project(spec: &ProjectSpec, host: &HostInfo) -> Self {
        let name = spec.name();
        let ctx = Self::default()
            .with(Placeholder::Package, name)
            .with(Placeholder::ImportPath, spec.import_path())
            .with(Placeholder::AppName, name)
            .with(Placeholder::Goos, host.goos())
            .with(Placeholder::Goarch, host.goarch())
            .with(Placeholder::GoVersion, host.go_version());

        match spec.kind() {
            ProjectKind::Cli => ctx
                .with(Placeholder::BuildSource, "main.go")
                .with(Placeholder::BuildDir, "."),
            ProjectKind::Application => ctx
                .with(Placeholder::BuildSource, format!("cmd/{name}/main.go"))
                .with(Placeholder::BuildDir, format!("./cmd/{name}")),
            ProjectKind::Library => ctx,
        }
    }

    /// Set a value, consuming self and returning the updated context.
    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.values.insert(placeholder, value.into());
        self
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }

    /// Render a built-in template.
    ///
    /// Only the template's declared placeholders are replaced. A declared
    /// placeholder without a value stays in the output as its literal token.
    /// Tokens are matched in the body only; substituted values are never
    /// scanned again.
    pub fn render(&self, template: TemplateId) -> String {
        let body = template.body();
        let mut result = String::with_capacity(body.len());
        let mut rest = body;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let tail = &rest[start..];
            match self.substitution(template, tail) {
                Some((token_len, value)) => {
                    result.push_str(value);
                    rest = &tail[token_len..];
                }
                None => {
                    result.push_str("{{");
                    rest = &tail[2..];
                }
            }
        }
        result.push_str(rest);

        result
    }

    /// Value for the declared placeholder whose token starts `tail`.
    fn substitution(&self, template: TemplateId, tail: &str) -> Option<(usize, &str)> {
        template.placeholders().iter().find_map(|placeholder| {
            let token = placeholder.token();
            if tail.starts_with(token) {
                self.get(*placeholder).map(|value| (token.len(), value))
            } else {
                None
            }
        })
    }
}
