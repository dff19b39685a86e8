//! gosprout Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gosprout
//! Go project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           gosprout-cli (CLI)            │
//! │   (argument parsing, prompts, output)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerateService, PreflightValidator,  │
//! │             Materializer)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, Toolchain, Reporter)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     gosprout-adapters (Infrastructure)  │
//! │  (LocalFilesystem, GoToolchain, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectSpec, TargetPlanner, templates) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gosprout_core::prelude::*;
//!
//! # fn demo(
//! #     filesystem: Box<dyn Filesystem>,
//! #     toolchain: Box<dyn Toolchain>,
//! #     reporter: Box<dyn Reporter>,
//! # ) -> GosproutResult<()> {
//! let spec = ProjectSpec::new("example.com/foo", ProjectKind::Application, RootMode::Nested);
//!
//! let service = GenerateService::new(filesystem, toolchain, reporter, ".");
//! let summary = service.generate(&spec)?;
//! println!("{} files written", summary.files);
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationSummary, Materializer, PreflightValidator, Stage,
        ports::{Filesystem, Reporter, Toolchain},
    };
    pub use crate::domain::{
        HostInfo, PlannedLayout, ProjectKind, ProjectSpec, RelativePath, RenderContext,
        RootMode, TargetPlanner, TemplateId,
    };
    pub use crate::error::{GosproutError, GosproutResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
