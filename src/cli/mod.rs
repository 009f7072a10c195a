//! CLI module - argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod filters;
pub mod output;

pub use args::{Cli, Commands, OutputFormat};
pub use filters::{
    EngineerAvailabilityFilter, PriorityFilter, ProjectStatusFilter, RequestStatusFilter,
    StaffingFilter,
};
