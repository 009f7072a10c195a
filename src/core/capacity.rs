//! Capacity and status derivation rules
//!
//! Pure functions over projects and engineers. The reference date is always
//! an explicit parameter so results are deterministic under test; nothing in
//! this module reads the system clock.

use chrono::NaiveDate;

use crate::entities::engineer::Engineer;
use crate::entities::project::{Project, ProjectStatus};

/// Default lookahead for nearing-completion detection, in days
pub const DEFAULT_COMPLETION_WINDOW_DAYS: i64 = 30;

/// Derived staffing state of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffingReport {
    /// assigned < required
    pub under_staffed: bool,
    /// assigned > required
    pub over_staffed: bool,
    /// In progress and due to end within the completion window
    pub nearing_completion: bool,
}

impl StaffingReport {
    /// One-word label for list output
    pub fn label(&self) -> &'static str {
        if self.over_staffed {
            "over"
        } else if self.under_staffed {
            "under"
        } else {
            "ok"
        }
    }
}

/// Derived allocation state of an engineer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityReport {
    /// current_projects < max_projects
    pub is_available: bool,
    /// Slots left, clamped at zero
    pub remaining_capacity: u32,
    /// Inconsistent record: current_projects exceeds max_projects
    pub over_allocated: bool,
}

/// Evaluate a project's staffing and schedule state as of `today`
pub fn evaluate_project_status(
    project: &Project,
    today: NaiveDate,
    completion_window_days: i64,
) -> StaffingReport {
    let under_staffed = project.assigned_engineers < project.required_engineers;
    let over_staffed = project.assigned_engineers > project.required_engineers;

    let nearing_completion = project.status == ProjectStatus::InProgress
        && project.end_date.is_some_and(|end| {
            let days_left = (end - today).num_days();
            (0..=completion_window_days).contains(&days_left)
        });

    StaffingReport {
        under_staffed,
        over_staffed,
        nearing_completion,
    }
}

/// Evaluate whether an engineer can take on more projects
pub fn evaluate_engineer_availability(engineer: &Engineer) -> AvailabilityReport {
    AvailabilityReport {
        is_available: engineer.current_projects < engineer.max_projects,
        remaining_capacity: engineer.max_projects.saturating_sub(engineer.current_projects),
        over_allocated: engineer.current_projects > engineer.max_projects,
    }
}
