//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{engineer, history, init, project, request};

/// Crew Allocation Toolkit - manage engineer allocation as plain-text files
#[derive(Debug, Parser)]
#[command(name = "crew", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a crew workspace in the current directory
    Init(init::InitArgs),

    /// Project management
    #[command(subcommand)]
    Project(project::ProjectCommands),

    /// Engineer profile management
    #[command(subcommand)]
    Engineer(engineer::EngineerCommands),

    /// Staffing request workflow
    #[command(subcommand)]
    Request(request::RequestCommands),

    /// View the audit log
    History(history::HistoryArgs),
}

/// Output format for show commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Styled console output - default
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}
