//! Go toolchain adapters.

mod go;
mod recording;

pub use go::GoToolchain;
pub use recording::{RecordingToolchain, ToolchainCall};
