//! `crew request` command - Staffing request workflow
//!
//! Requests move pending -> approved/rejected exactly once; approval also
//! reconciles the target project's assigned headcount in the same operation.

use chrono::{NaiveDate, Utc};
use clap::{Args, Subcommand};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::filters::{PriorityFilter, RequestStatusFilter};
use crate::cli::output::truncate_str;
use crate::cli::OutputFormat;
use crate::core::entity::Priority;
use crate::core::identity::EntityPrefix;
use crate::core::matching::matching_engineers;
use crate::core::lifecycle;
use crate::core::validate::validate_request;
use crate::core::workspace::Workspace;
use crate::entities::audit::{AuditAction, AuditLogEntry, AuditTarget, TargetKind};
use crate::entities::engineer::Engineer;
use crate::entities::project::Project;
use crate::entities::request::{EngineerRequest, Requester, RequestStatus};

#[derive(Debug, Subcommand)]
pub enum RequestCommands {
    /// Raise a staffing request against a project
    New(NewArgs),

    /// List requests with filtering
    List(ListArgs),

    /// Show a request's details
    Show(ShowArgs),

    /// Approve a pending request (HR only)
    Approve(DecideArgs),

    /// Reject a pending request (HR only)
    Reject(DecideArgs),

    /// Mark a request as read without deciding it
    Read(ReadArgs),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project ID the engineers are needed on
    #[arg(long, short = 'p')]
    pub project: String,

    /// Role being asked for (e.g. "Frontend Developer")
    #[arg(long)]
    pub role: Option<String>,

    /// How many engineers
    #[arg(long, short = 'n', default_value_t = 1)]
    pub quantity: u32,

    /// Required skills (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skills: Vec<String>,

    /// Priority (low/medium/high)
    #[arg(long, default_value = "medium")]
    pub priority: Priority,

    /// Why the engineers are needed
    #[arg(long, short = 'j')]
    pub justification: Option<String>,

    /// Needed-by date (YYYY-MM-DD)
    #[arg(long)]
    pub timeline: Option<NaiveDate>,

    /// Use interactive wizard to fill in fields
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by workflow status
    #[arg(long, short = 's', default_value = "all")]
    pub status: RequestStatusFilter,

    /// Filter by priority
    #[arg(long, short = 'p', default_value = "all")]
    pub priority: PriorityFilter,

    /// Only unread requests
    #[arg(long)]
    pub unread: bool,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Request ID (full or short form)
    pub id: String,

    /// List available engineers matching the requested skills
    #[arg(long)]
    pub candidates: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct DecideArgs {
    /// Request ID (full or short form)
    pub id: String,

    /// Decision comment (approval note or rejection reason)
    #[arg(long, short = 'm')]
    pub message: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Request ID (full or short form)
    pub id: String,
}

pub fn run(cmd: RequestCommands) -> Result<()> {
    match cmd {
        RequestCommands::New(args) => run_new(args),
        RequestCommands::List(args) => run_list(args),
        RequestCommands::Show(args) => run_show(args),
        RequestCommands::Approve(args) => run_decide(args, Decision::Approve),
        RequestCommands::Reject(args) => run_decide(args, Decision::Reject),
        RequestCommands::Read(args) => run_read(args),
    }
}

fn run_new(args: NewArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;
    let config = workspace.config();
    let now = Utc::now();

    let project: Project = workspace
        .load(EntityPrefix::Prj, &args.project, "project")
        .into_diagnostic()?;

    let (role, quantity, priority, justification, skills) = if args.interactive {
        let theme = ColorfulTheme::default();

        let role: String = Input::with_theme(&theme)
            .with_prompt("Role")
            .interact_text()
            .into_diagnostic()?;

        let quantity: u32 = Input::with_theme(&theme)
            .with_prompt("How many engineers")
            .default(1)
            .interact_text()
            .into_diagnostic()?;

        let priorities = &["low", "medium", "high"];
        let selection = Select::with_theme(&theme)
            .with_prompt("Priority")
            .items(priorities)
            .default(1)
            .interact()
            .into_diagnostic()?;
        let priority = match selection {
            0 => Priority::Low,
            2 => Priority::High,
            _ => Priority::Medium,
        };

        let justification: String = Input::with_theme(&theme)
            .with_prompt("Justification")
            .interact_text()
            .into_diagnostic()?;

        let skills_raw: String = Input::with_theme(&theme)
            .with_prompt("Required skills (comma-separated, optional)")
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;
        let skills: Vec<String> = skills_raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        (role, quantity, priority, justification, skills)
    } else {
        let role = args
            .role
            .ok_or_else(|| miette::miette!("--role is required (or use --interactive)"))?;
        let justification = args.justification.ok_or_else(|| {
            miette::miette!("--justification is required (or use --interactive)")
        })?;
        (role, args.quantity, args.priority, justification, args.skills)
    };

    let request = EngineerRequest::new(
        project.id.clone(),
        Requester {
            id: config.actor.name.to_lowercase().replace(' ', "-"),
            name: config.actor.name.clone(),
            role: config.actor.role.to_string(),
        },
        role,
        quantity,
        justification,
        now,
    )
    .with_skills(skills)
    .with_priority(priority)
    .with_timeline(args.timeline);

    validate_request(&request).into_diagnostic()?;
    workspace.save(&request).into_diagnostic()?;

    let entry = AuditLogEntry::record(
        AuditAction::RequestCreated,
        &config.actor.name,
        AuditTarget {
            kind: TargetKind::Request,
            id: request.id.clone(),
            name: request.role.clone(),
        },
        format!(
            "Requested {} x {} for project '{}'",
            request.quantity, request.role, project.name
        ),
        now,
    )
    .with_metadata("project_id", project.id.to_string())
    .with_metadata("priority", request.priority.to_string());
    workspace.append_audit(&entry).into_diagnostic()?;

    println!(
        "{} Raised {} for {} x {} on {}",
        style("✓").green(),
        style(request.id.short()).cyan(),
        request.quantity,
        request.role,
        project.name
    );
    Ok(())
}

fn run_list(args: ListArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;

    let requests: Vec<EngineerRequest> = workspace.load_all(EntityPrefix::Req).into_diagnostic()?;

    let filtered: Vec<&EngineerRequest> = requests
        .iter()
        .filter(|r| args.status.matches(r.status))
        .filter(|r| args.priority.matches(r.priority))
        .filter(|r| !args.unread || r.is_new)
        .collect();

    if args.count {
        println!("{}", filtered.len());
        return Ok(());
    }

    if filtered.is_empty() {
        println!("No requests found.");
        return Ok(());
    }

    println!(
        "{:<14} {:<24} {:>4} {:<9} {:<9} {:<20} {}",
        style("ID").bold(),
        style("ROLE").bold(),
        style("QTY").bold(),
        style("PRIORITY").bold(),
        style("STATUS").bold(),
        style("REQUESTED BY").bold(),
        style("NEW").bold()
    );
    println!("{}", "-".repeat(92));

    for request in &filtered {
        let status = match request.status {
            RequestStatus::Pending => style("pending").yellow(),
            RequestStatus::Approved => style("approved").green(),
            RequestStatus::Rejected => style("rejected").red(),
        };
        let new_marker = if request.is_new { "●" } else { "" };

        println!(
            "{:<14} {:<24} {:>4} {:<9} {:<9} {:<20} {}",
            request.id.short(),
            truncate_str(&request.role, 22),
            request.quantity,
            request.priority,
            status,
            truncate_str(&request.requested_by.name, 18),
            new_marker
        );
    }

    println!();
    println!("{} request(s) found", style(filtered.len()).cyan());
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;

    let request: EngineerRequest = workspace
        .load(EntityPrefix::Req, &args.id, "request")
        .into_diagnostic()?;

    if args.format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&request).into_diagnostic()?
        );
        return Ok(());
    }

    let project_name = workspace
        .load::<Project>(EntityPrefix::Prj, request.project_id.as_str(), "project")
        .map(|p| p.name)
        .unwrap_or_else(|_| request.project_id.to_string());

    println!(
        "{} {} x {}",
        style(&request.id).cyan().bold(),
        request.quantity,
        style(&request.role).bold()
    );
    println!();
    println!("  {:<14} {}", style("Project:").bold(), project_name);
    println!(
        "  {:<14} {} ({})",
        style("Requested by:").bold(),
        request.requested_by.name,
        request.requested_by.role
    );
    println!("  {:<14} {}", style("Priority:").bold(), request.priority);
    println!(
        "  {:<14} {}{}",
        style("Status:").bold(),
        request.status,
        if request.is_new {
            format!(" {}", style("(new)").cyan())
        } else {
            String::new()
        }
    );
    if !request.skills.is_empty() {
        println!("  {:<14} {}", style("Skills:").bold(), request.skills.join(", "));
    }
    if let Some(timeline) = request.timeline {
        println!("  {:<14} {}", style("Needed by:").bold(), timeline);
    }
    println!(
        "  {:<14} {}",
        style("Raised:").bold(),
        request.request_date.format("%Y-%m-%d")
    );
    println!("  {:<14} {}", style("Why:").bold(), request.justification);

    if let Some(decision) = &request.decision {
        println!();
        println!(
            "  {} by {} on {}",
            style(request.status).bold(),
            style(&decision.decided_by).cyan(),
            decision.decided_at.format("%Y-%m-%d %H:%M")
        );
        if let Some(note) = &decision.note {
            println!("  \"{}\"", style(note).dim());
        }
    }

    if args.candidates {
        let engineers: Vec<Engineer> = workspace.load_all(EntityPrefix::Eng).into_diagnostic()?;
        let candidates = matching_engineers(&engineers, &request);

        println!();
        if candidates.is_empty() {
            println!("  No available engineers cover the requested skills.");
        } else {
            println!("  {}", style("Candidates:").bold());
            for engineer in candidates {
                println!(
                    "    {} {} ({}/{} project(s))",
                    style(engineer.id.short()).cyan(),
                    engineer.name,
                    engineer.current_projects,
                    engineer.max_projects
                );
            }
        }
    }

    Ok(())
}

enum Decision {
    Approve,
    Reject,
}

fn run_decide(args: DecideArgs, decision: Decision) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;
    let config = workspace.config();
    let now = Utc::now();

    let mut request: EngineerRequest = workspace
        .load(EntityPrefix::Req, &args.id, "request")
        .into_diagnostic()?;

    match decision {
        Decision::Approve => {
            // Load the project before committing anything: approval must
            // reconcile the headcount in the same operation, so a missing
            // project leaves the request pending and the retry possible
            let mut project: Project = workspace
                .load(EntityPrefix::Prj, request.project_id.as_str(), "project")
                .into_diagnostic()?;

            lifecycle::approve(&mut request, &config.actor, args.message.clone(), now)
                .into_diagnostic()?;
            project.assigned_engineers += request.quantity;

            workspace.save(&request).into_diagnostic()?;
            workspace.save(&project).into_diagnostic()?;

            let entry = AuditLogEntry::record(
                AuditAction::RequestApproved,
                &config.actor.name,
                AuditTarget {
                    kind: TargetKind::Request,
                    id: request.id.clone(),
                    name: request.role.clone(),
                },
                format!(
                    "Approved request for {} x {} on '{}'",
                    request.quantity, request.role, project.name
                ),
                now,
            )
            .with_metadata("project_id", project.id.to_string())
            .with_metadata("quantity", request.quantity.to_string());
            workspace.append_audit(&entry).into_diagnostic()?;

            println!(
                "{} Approved {} ({} now staffed {}/{})",
                style("✓").green(),
                style(request.id.short()).cyan(),
                project.name,
                project.assigned_engineers,
                project.required_engineers
            );
        }
        Decision::Reject => {
            lifecycle::reject(&mut request, &config.actor, args.message.clone(), now)
                .into_diagnostic()?;
            workspace.save(&request).into_diagnostic()?;

            let entry = AuditLogEntry::record(
                AuditAction::RequestRejected,
                &config.actor.name,
                AuditTarget {
                    kind: TargetKind::Request,
                    id: request.id.clone(),
                    name: request.role.clone(),
                },
                format!("Rejected request for {} x {}", request.quantity, request.role),
                now,
            )
            .with_metadata("project_id", request.project_id.to_string());
            workspace.append_audit(&entry).into_diagnostic()?;

            println!("{} Rejected {}", style("✗").red(), style(request.id.short()).cyan());
        }
    }

    Ok(())
}

fn run_read(args: ReadArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;
    let config = workspace.config();
    let now = Utc::now();

    let mut request: EngineerRequest = workspace
        .load(EntityPrefix::Req, &args.id, "request")
        .into_diagnostic()?;

    if !request.is_new {
        println!("{} already read", style(request.id.short()).cyan());
        return Ok(());
    }

    lifecycle::mark_read(&mut request);
    workspace.save(&request).into_diagnostic()?;

    let entry = AuditLogEntry::record(
        AuditAction::RequestRead,
        &config.actor.name,
        AuditTarget {
            kind: TargetKind::Request,
            id: request.id.clone(),
            name: request.role.clone(),
        },
        format!("Marked request for {} as read", request.role),
        now,
    );
    workspace.append_audit(&entry).into_diagnostic()?;

    println!("{} Marked {} as read", style("✓").green(), style(request.id.short()).cyan());
    Ok(())
}
