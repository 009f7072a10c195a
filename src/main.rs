use clap::Parser;
use miette::Result;

use crew::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => crew::cli::commands::init::run(args),
        Commands::Project(cmd) => crew::cli::commands::project::run(cmd),
        Commands::Engineer(cmd) => crew::cli::commands::engineer::run(cmd),
        Commands::Request(cmd) => crew::cli::commands::request::run(cmd),
        Commands::History(args) => crew::cli::commands::history::run(args),
    }
}
