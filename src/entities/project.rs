//! Project entity type

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;
use crate::core::identity::{EntityId, EntityPrefix};

/// Project delivery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    New,
    InProgress,
    Closed,
}

impl ProjectStatus {
    /// Status transitions are monotonic: new -> in_progress -> closed
    pub fn can_transition(self, to: ProjectStatus) -> bool {
        matches!(
            (self, to),
            (ProjectStatus::New, ProjectStatus::InProgress)
                | (ProjectStatus::InProgress, ProjectStatus::Closed)
        )
    }

    /// Get allowed transitions from the current status
    pub fn allowed_transitions(self) -> Vec<ProjectStatus> {
        match self {
            ProjectStatus::New => vec![ProjectStatus::InProgress],
            ProjectStatus::InProgress => vec![ProjectStatus::Closed],
            ProjectStatus::Closed => vec![],
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::New => write!(f, "new"),
            ProjectStatus::InProgress => write!(f, "in_progress"),
            ProjectStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(ProjectStatus::New),
            "in_progress" | "in-progress" => Ok(ProjectStatus::InProgress),
            "closed" => Ok(ProjectStatus::Closed),
            _ => Err(format!("Unknown project status: {}", s)),
        }
    }
}

/// A project with a staffing target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: EntityId,

    /// Project name
    pub name: String,

    /// Current delivery status
    #[serde(default)]
    pub status: ProjectStatus,

    /// Free-text expected duration (e.g., "3 months")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duration: String,

    /// Planned start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Planned end date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Headcount target
    pub required_engineers: u32,

    /// Current headcount
    #[serde(default)]
    pub assigned_engineers: u32,

    /// Technologies the project uses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tech_stack: Vec<String>,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Who created this project
    pub author: String,
}

impl Entity for Project {
    const PREFIX: &'static str = "PRJ";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created(&self) -> DateTime<Utc> {
        self.created
    }
}

impl Project {
    /// Create a new project with the given staffing target
    pub fn new(name: String, required_engineers: u32, author: String, now: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::new(EntityPrefix::Prj),
            name,
            status: ProjectStatus::default(),
            duration: String::new(),
            start_date: None,
            end_date: None,
            required_engineers,
            assigned_engineers: 0,
            tech_stack: Vec::new(),
            created: now,
            author,
        }
    }

    pub fn with_duration(mut self, duration: String) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with_tech_stack(mut self, tech_stack: Vec<String>) -> Self {
        self.tech_stack = tech_stack;
        self
    }
}
