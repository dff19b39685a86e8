//! Infrastructure adapters for gosprout.
//!
//! This crate implements the ports defined in `gosprout-core::application::ports`.
//! It contains all disk access and process spawning.

pub mod filesystem;
pub mod toolchain;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem, render_tree};
pub use toolchain::{GoToolchain, RecordingToolchain, ToolchainCall};
