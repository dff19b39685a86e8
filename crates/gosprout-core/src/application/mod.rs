//! Application layer for gosprout.
//!
//! This layer contains:
//! - **Services**: the generation workflow and its stages
//! - **Ports**: traits for the filesystem, the Go toolchain and progress output
//! - **Errors**: failures that happen while talking to the outside world
//!
//! What a project looks like is decided in `crate::domain`; this layer only
//! checks, writes and runs.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    GenerateService, GenerationSummary, MaterializeReport, Materializer, PreflightValidator,
    Stage,
};

pub use ports::{Filesystem, Reporter, Toolchain};

pub use error::ApplicationError;
