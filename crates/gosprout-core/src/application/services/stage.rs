use std::fmt;

/// Steps of a generation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Plan,
    Check,
    MakeDirs,
    WriteFiles,
    ModuleInit,
    DependencyTidy,
}

impl Stage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Check => "check",
            Self::MakeDirs => "make-dirs",
            Self::WriteFiles => "write-files",
            Self::ModuleInit => "mod-init",
            Self::DependencyTidy => "mod-tidy",
        }
    }

    /// Stages that shell out to the toolchain and may take a while.
    pub const fn runs_external_tool(&self) -> bool {
        matches!(self, Self::ModuleInit | Self::DependencyTidy)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
