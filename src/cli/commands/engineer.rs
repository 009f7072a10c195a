//! `crew engineer` command - Engineer profile management

use chrono::{NaiveDate, Utc};
use clap::{Args, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::filters::EngineerAvailabilityFilter;
use crate::cli::output::truncate_str;
use crate::cli::OutputFormat;
use crate::core::capacity::evaluate_engineer_availability;
use crate::core::entity::Proficiency;
use crate::core::identity::EntityPrefix;
use crate::core::matching::search_engineers;
use crate::core::validate::validate_engineer;
use crate::core::workspace::Workspace;
use crate::entities::audit::{AuditAction, AuditLogEntry, AuditTarget, TargetKind};
use crate::entities::engineer::{Designation, Engineer, SkillRating, DEFAULT_MAX_PROJECTS};

#[derive(Debug, Subcommand)]
pub enum EngineerCommands {
    /// Add an engineer
    New(NewArgs),

    /// List engineers with filtering
    List(ListArgs),

    /// Show an engineer's profile and derived availability
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address (unique per workspace)
    #[arg(long)]
    pub email: String,

    /// Skills as NAME[:LEVEL], e.g. "React:expert" (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skill: Vec<String>,

    /// Current designation/title
    #[arg(long)]
    pub designation: Option<String>,

    /// Start date of the current designation (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub designation_since: Option<NaiveDate>,

    /// Projects they are already on
    #[arg(long, default_value_t = 0)]
    pub current_projects: u32,

    /// Concurrent project capacity
    #[arg(long, default_value_t = DEFAULT_MAX_PROJECTS)]
    pub max_projects: u32,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search in names and skill names (case-insensitive substring)
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Filter by availability
    #[arg(long, short = 'a', default_value = "all")]
    pub availability: EngineerAvailabilityFilter,

    /// Only engineers holding this exact skill name
    #[arg(long)]
    pub skill: Option<String>,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Engineer ID (full or short form)
    pub id: String,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(cmd: EngineerCommands) -> Result<()> {
    match cmd {
        EngineerCommands::New(args) => run_new(args),
        EngineerCommands::List(args) => run_list(args),
        EngineerCommands::Show(args) => run_show(args),
    }
}

/// Parse a NAME[:LEVEL] skill flag
fn parse_skill(raw: &str) -> Result<SkillRating> {
    match raw.split_once(':') {
        Some((name, level)) => {
            let proficiency = level
                .parse::<Proficiency>()
                .map_err(|e| miette::miette!("{}", e))?;
            Ok(SkillRating::new(name.trim(), proficiency))
        }
        None => Ok(SkillRating::new(raw.trim(), Proficiency::default())),
    }
}

fn run_new(args: NewArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;
    let config = workspace.config();
    let now = Utc::now();

    let skills = args
        .skill
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_skill(s))
        .collect::<Result<Vec<_>>>()?;

    let designations = match args.designation {
        Some(name) => vec![Designation {
            name,
            start_date: args.designation_since.unwrap_or_else(|| now.date_naive()),
            end_date: None,
            is_current: true,
        }],
        None => Vec::new(),
    };

    let engineer = Engineer::new(args.name, args.email, config.actor.name.clone(), now)
        .with_skills(skills)
        .with_designations(designations)
        .with_capacity(args.current_projects, args.max_projects);

    let existing: Vec<Engineer> = workspace.load_all(EntityPrefix::Eng).into_diagnostic()?;
    let existing_emails: Vec<String> = existing.iter().map(|e| e.email.clone()).collect();
    validate_engineer(&engineer, &existing_emails).into_diagnostic()?;

    workspace.save(&engineer).into_diagnostic()?;

    let entry = AuditLogEntry::record(
        AuditAction::EngineerAdded,
        &config.actor.name,
        AuditTarget {
            kind: TargetKind::Engineer,
            id: engineer.id.clone(),
            name: engineer.name.clone(),
        },
        format!("Added engineer '{}' ({})", engineer.name, engineer.email),
        now,
    );
    workspace.append_audit(&entry).into_diagnostic()?;

    println!(
        "{} Added {} {}",
        style("✓").green(),
        style(engineer.id.short()).cyan(),
        engineer.name
    );
    Ok(())
}

fn run_list(args: ListArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;

    let engineers: Vec<Engineer> = workspace.load_all(EntityPrefix::Eng).into_diagnostic()?;

    let query = args.search.as_deref().unwrap_or("");
    let filtered: Vec<&Engineer> = search_engineers(&engineers, query, args.availability.into())
        .into_iter()
        .filter(|e| {
            args.skill
                .as_deref()
                .map(|skill| e.has_skill(skill))
                .unwrap_or(true)
        })
        .collect();

    if args.count {
        println!("{}", filtered.len());
        return Ok(());
    }

    if filtered.is_empty() {
        println!("No engineers found.");
        return Ok(());
    }

    println!(
        "{:<14} {:<22} {:<24} {:>8} {:<12} {}",
        style("ID").bold(),
        style("NAME").bold(),
        style("TITLE").bold(),
        style("LOAD").bold(),
        style("AVAILABLE").bold(),
        style("SKILLS").bold()
    );
    println!("{}", "-".repeat(100));

    for engineer in &filtered {
        let report = evaluate_engineer_availability(engineer);
        let availability = if report.over_allocated {
            style("over-allocated").red().to_string()
        } else if report.is_available {
            style("yes").green().to_string()
        } else {
            style("no").red().to_string()
        };
        let title = engineer
            .current_designation()
            .map(|d| d.name.as_str())
            .unwrap_or("-");
        let skills: Vec<&str> = engineer.skills.iter().map(|s| s.skill_name.as_str()).collect();

        println!(
            "{:<14} {:<22} {:<24} {:>5}/{:<2} {:<12} {}",
            engineer.id.short(),
            truncate_str(&engineer.name, 20),
            truncate_str(title, 22),
            engineer.current_projects,
            engineer.max_projects,
            availability,
            truncate_str(&skills.join(", "), 30)
        );
    }

    println!();
    println!("{} engineer(s) found", style(filtered.len()).cyan());
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let workspace = Workspace::discover().into_diagnostic()?;

    let engineer: Engineer = workspace
        .load(EntityPrefix::Eng, &args.id, "engineer")
        .into_diagnostic()?;
    let report = evaluate_engineer_availability(&engineer);

    if args.format == OutputFormat::Json {
        let mut value = serde_json::to_value(&engineer).into_diagnostic()?;
        value["derived"] = serde_json::json!({
            "is_available": report.is_available,
            "remaining_capacity": report.remaining_capacity,
            "over_allocated": report.over_allocated,
        });
        println!("{}", serde_json::to_string_pretty(&value).into_diagnostic()?);
        return Ok(());
    }

    println!(
        "{} {}",
        style(&engineer.id).cyan().bold(),
        style(&engineer.name).bold()
    );
    println!();
    println!("  {:<14} {}", style("Email:").bold(), engineer.email);
    println!(
        "  {:<14} {}/{} project(s), {} slot(s) free",
        style("Load:").bold(),
        engineer.current_projects,
        engineer.max_projects,
        report.remaining_capacity
    );
    if report.over_allocated {
        println!(
            "  {:<14} {}",
            style("Warning:").bold(),
            style("allocation exceeds capacity").red()
        );
    }

    if !engineer.skills.is_empty() {
        println!("  {}", style("Skills:").bold());
        for skill in &engineer.skills {
            println!("    {} ({})", skill.skill_name, skill.proficiency_level);
        }
    }

    if !engineer.designations.is_empty() {
        println!("  {}", style("Designations:").bold());
        for d in &engineer.designations {
            let until = d
                .end_date
                .map(|e| e.to_string())
                .unwrap_or_else(|| "present".to_string());
            let marker = if d.is_current { " (current)" } else { "" };
            println!("    {} [{} - {}]{}", d.name, d.start_date, until, marker);
        }
    }

    println!(
        "  {:<14} {} by {}",
        style("Created:").bold(),
        engineer.created.format("%Y-%m-%d"),
        engineer.author
    );
    Ok(())
}
