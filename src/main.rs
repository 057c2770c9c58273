use clap::Parser;

mod cli;
mod commands;
mod domain;
mod rules;
mod services;

use cli::{Cli, Commands};
use services::storage::Workspace;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ws = Workspace::open(&cli.site)?;

    match &cli.command {
        Commands::Page { .. } => commands::handle_page_commands(&cli, &ws)?,
        Commands::Feedback { .. } | Commands::Suggest { .. } | Commands::Rules => {
            commands::handle_feedback_commands(&cli, &ws)?
        }
    }

    Ok(())
}
