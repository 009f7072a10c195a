//! `crew init` command - Initialize a workspace

use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::identity::EntityPrefix;
use crate::core::team::Role;
use crate::core::workspace::Workspace;
use crate::core::Config;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the acting user recorded on mutations
    #[arg(long, env = "CREW_ACTOR")]
    pub actor: Option<String>,

    /// Role of the acting user (hr/project_lead/engineer)
    #[arg(long, default_value = "hr")]
    pub role: Role,
}

pub fn run(args: InitArgs) -> Result<()> {
    let cwd = std::env::current_dir().into_diagnostic()?;
    let workspace = Workspace::init(&cwd).into_diagnostic()?;

    let actor_name = args
        .actor
        .or_else(|| std::env::var("USER").ok())
        .or_else(|| std::env::var("USERNAME").ok())
        .unwrap_or_else(|| "unknown".to_string());

    let mut config = Config::default();
    config.actor.name = actor_name;
    config.actor.role = args.role;
    workspace.save_config(&config).into_diagnostic()?;

    println!(
        "{} Initialized crew workspace at {}",
        style("✓").green(),
        workspace.root().display()
    );
    for prefix in EntityPrefix::all() {
        println!("  created {}/", prefix.directory());
    }
    println!();
    println!(
        "Acting as {} ({})",
        style(&config.actor.name).cyan(),
        config.actor.role
    );
    println!("Next: {}", style("crew project new --name <NAME> --required <N>").yellow());

    Ok(())
}
