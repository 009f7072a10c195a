//! `crew project` command - Project management

use chrono::{NaiveDate, Utc};
use clap::{Args, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::filters::{ProjectStatusFilter, StaffingFilter};
use crate::cli::output::{days_phrase, truncate_str};
use crate::cli::OutputFormat;
use crate::core::capacity::evaluate_project_status;
use crate::core::identity::EntityPrefix;
use crate::core::matching::search_projects;
use crate::core::validate::validate_project;
use crate::core::workspace::Workspace;
use crate::entities::audit::{AuditAction, AuditLogEntry, AuditTarget, TargetKind};
use crate::entities::project::{Project, ProjectStatus};

#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    New(NewArgs),

    /// List projects with filtering
    List(ListArgs),

    /// Show a project's details and derived staffing state
    Show(ShowArgs),

    /// Move a project to its next status (new -> in_progress -> closed)
    SetStatus(SetStatusArgs),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name
    #[arg(long)]
    pub name: String,

    /// Headcount target
    #[arg(long, short = 'r')]
    pub required: u32,

    /// Expected duration (free text, e.g. "3 months")
    #[arg(long)]
    pub duration: Option<String>,

    /// Planned start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Planned end date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Tech stack (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tech: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search in project names (case-insensitive substring)
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Filter by status
    #[arg(long, short = 's', default_value = "all")]
    pub status: ProjectStatusFilter,

    /// Filter by derived staffing state
    #[arg(long, default_value = "all")]
    pub staffing: StaffingFilter,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Project ID (full or short form)
    pub id: String,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SetStatusArgs {
    /// Project ID (full or short form)
    pub id: String,

    /// Target status (in_progress/closed)
    pub status: ProjectStatus,
}

pub fn run(cmd: ProjectCommands) -> Result<()> {
    match cmd {
        ProjectCommands::New(args) => run_new(args),
        ProjectCommands::List(args) => run_list(args),
        ProjectCommands::Show(args) => run_show(args),
        ProjectCommands::SetStatus(args) => run_set_status(args),
    }
}

fn run_new(args: NewArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;
    let config = workspace.config();
    let now = Utc::now();

    let project = Project::new(args.name, args.required, config.actor.name.clone(), now)
        .with_duration(args.duration.unwrap_or_default())
        .with_dates(args.start, args.end)
        .with_tech_stack(args.tech);

    validate_project(&project).into_diagnostic()?;
    workspace.save(&project).into_diagnostic()?;

    let entry = AuditLogEntry::record(
        AuditAction::ProjectCreated,
        &config.actor.name,
        AuditTarget {
            kind: TargetKind::Project,
            id: project.id.clone(),
            name: project.name.clone(),
        },
        format!(
            "Created project '{}' requiring {} engineer(s)",
            project.name, project.required_engineers
        ),
        now,
    );
    workspace.append_audit(&entry).into_diagnostic()?;

    println!(
        "{} Created {} {}",
        style("✓").green(),
        style(project.id.short()).cyan(),
        project.name
    );
    Ok(())
}

fn run_list(args: ListArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;
    let config = workspace.config();
    let today = Utc::now().date_naive();

    let projects: Vec<Project> = workspace.load_all(EntityPrefix::Prj).into_diagnostic()?;

    let query = args.search.as_deref().unwrap_or("");
    let filtered: Vec<&Project> = search_projects(&projects, query, args.status.into())
        .into_iter()
        .filter(|p| {
            let report = evaluate_project_status(p, today, config.completion_window_days);
            args.staffing.matches(&report)
        })
        .collect();

    if args.count {
        println!("{}", filtered.len());
        return Ok(());
    }

    if filtered.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    println!(
        "{:<14} {:<30} {:<12} {:>8} {:<9} {}",
        style("ID").bold(),
        style("NAME").bold(),
        style("STATUS").bold(),
        style("STAFF").bold(),
        style("LEVEL").bold(),
        style("DUE").bold()
    );
    println!("{}", "-".repeat(84));

    for project in &filtered {
        let report = evaluate_project_status(project, today, config.completion_window_days);
        let due = if report.nearing_completion {
            style("nearing completion").yellow().to_string()
        } else {
            project
                .end_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string())
        };

        println!(
            "{:<14} {:<30} {:<12} {:>5}/{:<2} {:<9} {}",
            project.id.short(),
            truncate_str(&project.name, 28),
            project.status,
            project.assigned_engineers,
            project.required_engineers,
            report.label(),
            due
        );
    }

    println!();
    println!("{} project(s) found", style(filtered.len()).cyan());
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;
    let config = workspace.config();
    let today = Utc::now().date_naive();

    let project: Project = workspace
        .load(EntityPrefix::Prj, &args.id, "project")
        .into_diagnostic()?;
    let report = evaluate_project_status(&project, today, config.completion_window_days);

    if args.format == OutputFormat::Json {
        let mut value = serde_json::to_value(&project).into_diagnostic()?;
        value["derived"] = serde_json::json!({
            "under_staffed": report.under_staffed,
            "over_staffed": report.over_staffed,
            "nearing_completion": report.nearing_completion,
        });
        println!("{}", serde_json::to_string_pretty(&value).into_diagnostic()?);
        return Ok(());
    }

    println!("{} {}", style(&project.id).cyan().bold(), style(&project.name).bold());
    println!();
    println!("  {:<12} {}", style("Status:").bold(), project.status);
    println!(
        "  {:<12} {}/{} ({})",
        style("Staffing:").bold(),
        project.assigned_engineers,
        project.required_engineers,
        report.label()
    );
    if !project.duration.is_empty() {
        println!("  {:<12} {}", style("Duration:").bold(), project.duration);
    }
    if let Some(start) = project.start_date {
        println!("  {:<12} {}", style("Start:").bold(), start);
    }
    if let Some(end) = project.end_date {
        let marker = if report.nearing_completion {
            let left = (end - today).num_days();
            format!(" {}", style(format!("(ends in {})", days_phrase(left))).yellow())
        } else {
            String::new()
        };
        println!("  {:<12} {}{}", style("End:").bold(), end, marker);
    }
    if !project.tech_stack.is_empty() {
        println!(
            "  {:<12} {}",
            style("Tech:").bold(),
            project.tech_stack.join(", ")
        );
    }
    println!("  {:<12} {} by {}", style("Created:").bold(), project.created.format("%Y-%m-%d"), project.author);

    Ok(())
}

fn run_set_status(args: SetStatusArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;
    let config = workspace.config();
    let now = Utc::now();

    let mut project: Project = workspace
        .load(EntityPrefix::Prj, &args.id, "project")
        .into_diagnostic()?;

    let from = project.status;
    if !from.can_transition(args.status) {
        let allowed: Vec<String> = from
            .allowed_transitions()
            .iter()
            .map(|s| s.to_string())
            .collect();
        return Err(miette::miette!(
            "Invalid status transition: {} -> {} (allowed: {})",
            from,
            args.status,
            if allowed.is_empty() {
                "none".to_string()
            } else {
                allowed.join(", ")
            }
        ));
    }

    project.status = args.status;
    workspace.save(&project).into_diagnostic()?;

    let entry = AuditLogEntry::record(
        AuditAction::ProjectStatusChanged,
        &config.actor.name,
        AuditTarget {
            kind: TargetKind::Project,
            id: project.id.clone(),
            name: project.name.clone(),
        },
        format!("Moved project '{}' from {} to {}", project.name, from, args.status),
        now,
    )
    .with_metadata("from", from.to_string())
    .with_metadata("to", args.status.to_string());
    workspace.append_audit(&entry).into_diagnostic()?;

    println!(
        "{} {} is now {}",
        style("✓").green(),
        style(project.id.short()).cyan(),
        style(args.status).yellow()
    );
    Ok(())
}
