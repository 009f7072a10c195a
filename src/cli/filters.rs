//! Unified filter enums for CLI commands
//!
//! Thin clap-facing wrappers that map list/search flags onto the core
//! matching rules, so every command filters the same way.

use clap::ValueEnum;

use crate::core::capacity::StaffingReport;
use crate::core::entity::Priority;
use crate::core::matching::{AvailabilityFilter, StatusFilter};
use crate::entities::request::RequestStatus;

/// Project status filter for list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ProjectStatusFilter {
    /// New projects only
    New,
    /// In-progress projects only
    InProgress,
    /// Closed projects only
    Closed,
    /// All statuses - default
    #[default]
    All,
}

impl From<ProjectStatusFilter> for StatusFilter {
    fn from(filter: ProjectStatusFilter) -> Self {
        match filter {
            ProjectStatusFilter::New => StatusFilter::New,
            ProjectStatusFilter::InProgress => StatusFilter::InProgress,
            ProjectStatusFilter::Closed => StatusFilter::Closed,
            ProjectStatusFilter::All => StatusFilter::All,
        }
    }
}

/// Staffing filter for project list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum StaffingFilter {
    /// Understaffed projects only
    Under,
    /// Overstaffed projects only
    Over,
    /// Exactly-staffed projects only
    Ok,
    /// All projects - default
    #[default]
    All,
}

impl StaffingFilter {
    /// Check if a derived staffing report matches this filter
    pub fn matches(&self, report: &StaffingReport) -> bool {
        match self {
            StaffingFilter::Under => report.under_staffed,
            StaffingFilter::Over => report.over_staffed,
            StaffingFilter::Ok => !report.under_staffed && !report.over_staffed,
            StaffingFilter::All => true,
        }
    }
}

/// Availability filter for engineer list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum EngineerAvailabilityFilter {
    /// Engineers with remaining capacity
    Available,
    /// Engineers at capacity
    FullyAllocated,
    /// All engineers - default
    #[default]
    All,
}

impl From<EngineerAvailabilityFilter> for AvailabilityFilter {
    fn from(filter: EngineerAvailabilityFilter) -> Self {
        match filter {
            EngineerAvailabilityFilter::Available => AvailabilityFilter::Available,
            EngineerAvailabilityFilter::FullyAllocated => AvailabilityFilter::FullyAllocated,
            EngineerAvailabilityFilter::All => AvailabilityFilter::All,
        }
    }
}

/// Request status filter for list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum RequestStatusFilter {
    /// Pending requests only
    Pending,
    /// Approved requests only
    Approved,
    /// Rejected requests only
    Rejected,
    /// All statuses - default
    #[default]
    All,
}

impl RequestStatusFilter {
    /// Check if a RequestStatus matches this filter
    pub fn matches(&self, status: RequestStatus) -> bool {
        match self {
            RequestStatusFilter::Pending => status == RequestStatus::Pending,
            RequestStatusFilter::Approved => status == RequestStatus::Approved,
            RequestStatusFilter::Rejected => status == RequestStatus::Rejected,
            RequestStatusFilter::All => true,
        }
    }
}

/// Priority filter for request list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Low priority only
    Low,
    /// Medium priority only
    Medium,
    /// High priority only
    High,
    /// All priorities - default
    #[default]
    All,
}

impl PriorityFilter {
    /// Check if a Priority matches this filter
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::Low => priority == Priority::Low,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::High => priority == Priority::High,
            PriorityFilter::All => true,
        }
    }
}
