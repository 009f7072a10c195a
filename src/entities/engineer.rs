//! Engineer entity type

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, Proficiency};
use crate::core::identity::{EntityId, EntityPrefix};

/// Default concurrent project capacity
pub const DEFAULT_MAX_PROJECTS: u32 = 2;

fn default_max_projects() -> u32 {
    DEFAULT_MAX_PROJECTS
}

/// A rated skill held by an engineer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRating {
    /// Stable skill identifier (e.g., "react")
    pub skill_id: String,

    /// Human-readable skill name (e.g., "React")
    pub skill_name: String,

    /// How good they are at it
    #[serde(default)]
    pub proficiency_level: Proficiency,
}

impl SkillRating {
    pub fn new(skill_name: &str, proficiency_level: Proficiency) -> Self {
        Self {
            skill_id: skill_name.to_lowercase().replace(' ', "-"),
            skill_name: skill_name.to_string(),
            proficiency_level,
        }
    }
}

/// A role/title held over a dated interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Designation {
    /// Title (e.g., "Senior Developer")
    pub name: String,

    /// When they took the role
    pub start_date: NaiveDate,

    /// When they left it (open-ended if absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Whether this is their present role
    #[serde(default)]
    pub is_current: bool,
}

/// An engineer available for project allocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engineer {
    /// Unique identifier
    pub id: EntityId,

    /// Full name
    pub name: String,

    /// Email address (unique within a workspace)
    pub email: String,

    /// Rated skills, in the order they were entered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<SkillRating>,

    /// Role history; at most one entry should be current
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub designations: Vec<Designation>,

    /// How many projects they are on right now
    #[serde(default)]
    pub current_projects: u32,

    /// Concurrent project capacity
    #[serde(default = "default_max_projects")]
    pub max_projects: u32,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Who added this engineer
    pub author: String,
}

impl Entity for Engineer {
    const PREFIX: &'static str = "ENG";

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

impl Engineer {
    /// Create a new engineer with default capacity
    pub fn new(name: String, email: String, author: String, now: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::new(EntityPrefix::Eng),
            name,
            email,
            skills: Vec::new(),
            designations: Vec::new(),
            current_projects: 0,
            max_projects: DEFAULT_MAX_PROJECTS,
            created: now,
            author,
        }
    }

    pub fn with_skills(mut self, skills: Vec<SkillRating>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_designations(mut self, designations: Vec<Designation>) -> Self {
        self.designations = designations;
        self
    }

    pub fn with_capacity(mut self, current_projects: u32, max_projects: u32) -> Self {
        self.current_projects = current_projects;
        self.max_projects = max_projects;
        self
    }

    /// The engineer's present designation, if any
    pub fn current_designation(&self) -> Option<&Designation> {
        self.designations.iter().find(|d| d.is_current)
    }

    /// Whether the engineer lists a skill with the given name (exact match)
    pub fn has_skill(&self, skill_name: &str) -> bool {
        self.skills.iter().any(|s| s.skill_name == skill_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_engineer() -> Engineer {
        Engineer::new(
            "Priya Sharma".to_string(),
            "priya@example.com".to_string(),
            "test".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_engineer_roundtrip() {
        let eng = test_engineer().with_skills(vec![
            SkillRating::new("React", Proficiency::Expert),
            SkillRating::new("Node.js", Proficiency::Advanced),
        ]);

        let yaml = serde_yml::to_string(&eng).unwrap();
        let parsed: Engineer = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(eng.id, parsed.id);
        assert_eq!(eng.email, parsed.email);
        assert_eq!(eng.skills, parsed.skills);
    }

    #[test]
    fn test_default_capacity_is_two() {
        let eng = test_engineer();
        assert_eq!(eng.max_projects, 2);
        assert_eq!(eng.current_projects, 0);
    }

    #[test]
    fn test_max_projects_defaults_when_missing() {
        // Records written before capacity tracking have no max_projects field
        let yaml = r#"
id: ENG-01J9AVJMS8WQJN4WM2J0K3Y8ZD
name: "Priya Sharma"
email: "priya@example.com"
created: "2024-01-01T00:00:00Z"
author: "test"
"#;
        let eng: Engineer = serde_yml::from_str(yaml).unwrap();
        assert_eq!(eng.max_projects, DEFAULT_MAX_PROJECTS);
    }

    #[test]
    fn test_skill_rating_derives_id() {
        let skill = SkillRating::new("QA Automation", Proficiency::Intermediate);
        assert_eq!(skill.skill_id, "qa-automation");
        assert_eq!(skill.skill_name, "QA Automation");
    }

    #[test]
    fn test_has_skill_is_exact() {
        let eng = test_engineer().with_skills(vec![SkillRating::new("React", Proficiency::Expert)]);
        assert!(eng.has_skill("React"));
        assert!(!eng.has_skill("react"));
    }

    #[test]
    fn test_current_designation() {
        let eng = test_engineer().with_designations(vec![
            Designation {
                name: "Junior Developer".to_string(),
                start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2022, 6, 1),
                is_current: false,
            },
            Designation {
                name: "Senior Developer".to_string(),
                start_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
                end_date: None,
                is_current: true,
            },
        ]);

        assert_eq!(eng.current_designation().unwrap().name, "Senior Developer");
    }
}
