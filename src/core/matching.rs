//! Matching and filtering rules
//!
//! Stable filters over entity collections: results preserve input order and
//! an empty query matches everything.

use crate::core::capacity::evaluate_engineer_availability;
use crate::entities::engineer::Engineer;
use crate::entities::project::{Project, ProjectStatus};
use crate::entities::request::EngineerRequest;

/// Project status filter for search and list operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    New,
    InProgress,
    Closed,
    #[default]
    All,
}

impl StatusFilter {
    pub fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::New => status == ProjectStatus::New,
            StatusFilter::InProgress => status == ProjectStatus::InProgress,
            StatusFilter::Closed => status == ProjectStatus::Closed,
            StatusFilter::All => true,
        }
    }
}

/// Engineer availability filter for search and list operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    /// Remaining capacity > 0
    Available,
    /// No remaining capacity
    FullyAllocated,
    #[default]
    All,
}

impl AvailabilityFilter {
    pub fn matches(&self, engineer: &Engineer) -> bool {
        match self {
            AvailabilityFilter::Available => evaluate_engineer_availability(engineer).is_available,
            AvailabilityFilter::FullyAllocated => {
                !evaluate_engineer_availability(engineer).is_available
            }
            AvailabilityFilter::All => true,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter projects by name substring (case-insensitive) and status
pub fn search_projects<'a>(
    projects: &'a [Project],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| query.is_empty() || contains_ignore_case(&p.name, query))
        .filter(|p| status.matches(p.status))
        .collect()
}

/// Filter engineers by name-or-skill substring and availability
pub fn search_engineers<'a>(
    engineers: &'a [Engineer],
    query: &str,
    availability: AvailabilityFilter,
) -> Vec<&'a Engineer> {
    engineers
        .iter()
        .filter(|e| {
            query.is_empty()
                || contains_ignore_case(&e.name, query)
                || e.skills
                    .iter()
                    .any(|s| contains_ignore_case(&s.skill_name, query))
        })
        .filter(|e| availability.matches(e))
        .collect()
}

/// Whether an engineer covers every required skill
///
/// Skill names match exactly; requests carry free-text skill names, so no
/// normalization is applied here.
pub fn skills_satisfied(engineer: &Engineer, required_skills: &[String]) -> bool {
    required_skills.iter().all(|s| engineer.has_skill(s))
}

/// Engineers who could be assigned to fill a request: they cover the
/// requested skills and still have capacity
pub fn matching_engineers<'a>(
    engineers: &'a [Engineer],
    request: &EngineerRequest,
) -> Vec<&'a Engineer> {
    engineers
        .iter()
        .filter(|e| skills_satisfied(e, &request.skills))
        .filter(|e| evaluate_engineer_availability(e).is_available)
        .collect()
}
