//! Audit log entry type
//!
//! Immutable, append-only records of system-affecting actions. Entries are
//! written once by whichever command performed the action and never edited.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;
use crate::core::identity::{EntityId, EntityPrefix};

/// Closed set of auditable actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    ProjectCreated,
    ProjectStatusChanged,
    EngineerAdded,
    RequestCreated,
    RequestApproved,
    RequestRejected,
    RequestRead,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::ProjectCreated => write!(f, "project_created"),
            AuditAction::ProjectStatusChanged => write!(f, "project_status_changed"),
            AuditAction::EngineerAdded => write!(f, "engineer_added"),
            AuditAction::RequestCreated => write!(f, "request_created"),
            AuditAction::RequestApproved => write!(f, "request_approved"),
            AuditAction::RequestRejected => write!(f, "request_rejected"),
            AuditAction::RequestRead => write!(f, "request_read"),
        }
    }
}

impl std::str::FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "project_created" => Ok(AuditAction::ProjectCreated),
            "project_status_changed" => Ok(AuditAction::ProjectStatusChanged),
            "engineer_added" => Ok(AuditAction::EngineerAdded),
            "request_created" => Ok(AuditAction::RequestCreated),
            "request_approved" => Ok(AuditAction::RequestApproved),
            "request_rejected" => Ok(AuditAction::RequestRejected),
            "request_read" => Ok(AuditAction::RequestRead),
            _ => Err(format!("Unknown audit action: {}", s)),
        }
    }
}

/// What kind of entity an action targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Project,
    Engineer,
    Request,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::Project => write!(f, "project"),
            TargetKind::Engineer => write!(f, "engineer"),
            TargetKind::Request => write!(f, "request"),
        }
    }
}

/// The entity an action was applied to (by-reference, never ownership)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTarget {
    pub kind: TargetKind,
    pub id: EntityId,
    pub name: String,
}

/// One immutable audit record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Unique identifier
    pub id: EntityId,

    /// When the action happened
    pub timestamp: DateTime<Utc>,

    /// What happened
    pub action: AuditAction,

    /// Who did it
    pub performed_by: String,

    /// What it was done to
    pub target: AuditTarget,

    /// Human-readable summary
    pub details: String,

    /// Extra structured context (e.g., old/new status)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Entity for AuditLogEntry {
    const PREFIX: &'static str = "AUD";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.details
    }

    fn created(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl AuditLogEntry {
    /// Build an entry for an action that just happened
    pub fn record(
        action: AuditAction,
        performed_by: &str,
        target: AuditTarget,
        details: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EntityId::new(EntityPrefix::Aud),
            timestamp: now,
            action,
            performed_by: performed_by.to_string(),
            target,
            details,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: String) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_entry() -> AuditLogEntry {
        AuditLogEntry::record(
            AuditAction::RequestApproved,
            "hr-admin",
            AuditTarget {
                kind: TargetKind::Request,
                id: EntityId::new(EntityPrefix::Req),
                name: "Frontend Developer".to_string(),
            },
            "Approved request for 2 engineers".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_entry_roundtrip() {
        let entry = test_entry().with_metadata("quantity", "2".to_string());

        let yaml = serde_yml::to_string(&entry).unwrap();
        let parsed: AuditLogEntry = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(entry.id, parsed.id);
        assert_eq!(parsed.action, AuditAction::RequestApproved);
        assert_eq!(parsed.metadata.get("quantity").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_action_serializes_snake_case() {
        let yaml = serde_yml::to_string(&AuditAction::ProjectStatusChanged).unwrap();
        assert_eq!(yaml.trim(), "project_status_changed");
    }

    #[test]
    fn test_action_from_str() {
        assert_eq!(
            "request-approved".parse::<AuditAction>().unwrap(),
            AuditAction::RequestApproved
        );
        assert!("logged_in".parse::<AuditAction>().is_err());
    }
}
