//! `crew history` command - View the audit log

use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::identity::EntityPrefix;
use crate::core::workspace::Workspace;
use crate::entities::audit::{AuditAction, AuditLogEntry};

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Only entries targeting this entity (full or short ID)
    #[arg(long, short = 't')]
    pub target: Option<String>,

    /// Only entries with this action kind (e.g. request_approved)
    #[arg(long, short = 'a')]
    pub action: Option<AuditAction>,

    /// Limit to the most recent N entries
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: HistoryArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;

    let mut entries: Vec<AuditLogEntry> =
        workspace.load_all(EntityPrefix::Aud).into_diagnostic()?;

    // Newest first for display
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let filtered: Vec<&AuditLogEntry> = entries
        .iter()
        .filter(|e| {
            args.target
                .as_deref()
                .map(|t| e.target.id.as_str().starts_with(t))
                .unwrap_or(true)
        })
        .filter(|e| args.action.map(|a| e.action == a).unwrap_or(true))
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&filtered).into_diagnostic()?
        );
        return Ok(());
    }

    if filtered.is_empty() {
        println!("No audit entries found.");
        return Ok(());
    }

    for entry in &filtered {
        let action_styled = match entry.action {
            AuditAction::RequestApproved => style(entry.action).green(),
            AuditAction::RequestRejected => style(entry.action).red(),
            AuditAction::ProjectStatusChanged => style(entry.action).magenta(),
            _ => style(entry.action).blue(),
        };

        println!(
            "  {} {:<24} {} {} by {}",
            style(entry.timestamp.format("%Y-%m-%d %H:%M")).dim(),
            action_styled,
            style(entry.target.id.short()).cyan(),
            entry.details,
            style(&entry.performed_by).cyan()
        );
    }

    println!();
    println!("{} entry(ies)", style(filtered.len()).cyan());
    Ok(())
}
