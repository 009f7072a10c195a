//! Core module - allocation rules, identity, and workspace plumbing

pub mod capacity;
pub mod config;
pub mod entity;
pub mod identity;
pub mod lifecycle;
pub mod matching;
pub mod team;
pub mod validate;
pub mod workspace;

pub use capacity::{
    evaluate_engineer_availability, evaluate_project_status, AvailabilityReport, StaffingReport,
    DEFAULT_COMPLETION_WINDOW_DAYS,
};
pub use config::Config;
pub use entity::{Entity, Priority, Proficiency};
pub use identity::{EntityId, EntityPrefix, IdParseError};
pub use lifecycle::{approve, mark_read, reject, LifecycleError};
pub use matching::{
    matching_engineers, search_engineers, search_projects, skills_satisfied, AvailabilityFilter,
    StatusFilter,
};
pub use team::{Actor, Role};
pub use validate::{validate_engineer, validate_project, validate_request, ValidationError};
pub use workspace::{Workspace, WorkspaceError, ENTITY_SUFFIX};
