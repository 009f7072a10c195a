//! Acting identity and capability checks
//!
//! The workspace config declares who is operating the tool and in what
//! capacity. Deciding staffing requests is an HR capability; project leads
//! and engineers can raise and read requests but not decide them.

use serde::{Deserialize, Serialize};

/// Capability role of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Hr,
    ProjectLead,
    Engineer,
}

impl Role {
    /// Only HR may approve or reject staffing requests
    pub fn can_decide_requests(self) -> bool {
        self == Role::Hr
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Hr => write!(f, "hr"),
            Role::ProjectLead => write!(f, "project_lead"),
            Role::Engineer => write!(f, "engineer"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "hr" => Ok(Role::Hr),
            "project_lead" | "lead" => Ok(Role::ProjectLead),
            "engineer" => Ok(Role::Engineer),
            _ => Err(format!("Unknown role: {} (use hr/project_lead/engineer)", s)),
        }
    }
}

/// Who is performing an operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

impl Actor {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            name: "unknown".to_string(),
            role: Role::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_hr_decides() {
        assert!(Role::Hr.can_decide_requests());
        assert!(!Role::ProjectLead.can_decide_requests());
        assert!(!Role::Engineer.can_decide_requests());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("hr".parse::<Role>().unwrap(), Role::Hr);
        assert_eq!("project-lead".parse::<Role>().unwrap(), Role::ProjectLead);
        assert_eq!("lead".parse::<Role>().unwrap(), Role::ProjectLead);
        assert!("admin".parse::<Role>().is_err());
    }
}
