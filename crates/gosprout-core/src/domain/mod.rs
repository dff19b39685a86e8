//! Core domain layer for gosprout.
//!
//! Pure logic: what a Go project of a given kind looks like, and how its
//! files are rendered. All I/O (filesystem, the `go` command, terminal
//! output) is reached through ports defined in the application layer.
//!
//! - **No I/O**: nothing here touches the disk or spawns processes
//! - **Deterministic**: the same spec and host always plan the same layout
//! - **Immutable results**: a [`PlannedLayout`] is only read after planning

pub mod entities;
pub mod error;
pub mod host;
pub mod planner;
pub mod templates;
pub mod value_objects;

pub use entities::{PlannedLayout, ProjectSpec, RenderContext, common::RelativePath};
pub use error::DomainError;
pub use host::HostInfo;
pub use planner::TargetPlanner;
pub use templates::{Placeholder, TemplateId};
pub use value_objects::{ProjectKind, RootMode};
