//! Application services.
//!
//! `GenerateService` drives one generation run. The preflight checks and
//! the disk writes are separate services so each can be tested alone.

pub mod generate_service;
pub mod materializer;
pub mod preflight;
pub mod stage;

pub use generate_service::{GenerateService, GenerationSummary};
pub use materializer::{MaterializeReport, Materializer};
pub use preflight::PreflightValidator;
pub use stage::Stage;
