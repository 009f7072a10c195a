//! Entity type definitions

pub mod audit;
pub mod engineer;
pub mod project;
pub mod request;

pub use audit::{AuditAction, AuditLogEntry, AuditTarget, TargetKind};
pub use engineer::{Designation, Engineer, SkillRating};
pub use project::{Project, ProjectStatus};
pub use request::{DecisionRecord, EngineerRequest, Requester, RequestStatus};
