//! Crew: plain-text engineer allocation toolkit
//!
//! Manages projects, engineer profiles, and staffing requests as YAML files
//! under a discoverable workspace, with pure derivation rules for capacity,
//! matching, and the request approval workflow.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;
