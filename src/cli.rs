use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_SITE_DIR: &str = ".";

#[derive(Parser, Debug)]
#[command(name = "sitemend", version, about = "Feedback-driven site page editor")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_SITE_DIR,
        help = "Site directory holding the pages folder and feedback log"
    )]
    pub site: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Page {
        #[command(subcommand)]
        command: PageCommands,
    },
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommands,
    },
    Suggest {
        text: String,
    },
    Rules,
}

#[derive(Subcommand, Debug)]
pub enum PageCommands {
    List,
    Create {
        name: String,
    },
    Show {
        name: String,
    },
    Save {
        name: String,
        #[arg(long, conflicts_with = "content", help = "Read page markup from a file")]
        file: Option<PathBuf>,
        #[arg(long, help = "Page markup given inline")]
        content: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FeedbackCommands {
    Submit {
        text: String,
        #[arg(long, help = "Page slug the feedback targets")]
        page: Option<String>,
    },
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
}
