pub mod common;
pub mod planned_layout;
pub mod project_spec;
pub mod render;

pub use crate::domain::DomainError;
pub use planned_layout::PlannedLayout;
pub use project_spec::ProjectSpec;
pub use render::RenderContext;
