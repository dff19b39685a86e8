//! Application ports (traits) for external dependencies.
//!
//! Adapters in `gosprout-adapters` and the CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application
//!   - `Filesystem`: directory and file creation, existence checks
//!   - `Toolchain`: the `go` command
//!   - `Reporter`: progress output for the person running the tool

pub mod output;

pub use output::{Filesystem, Reporter, Toolchain};
