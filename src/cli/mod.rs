use crate::Tab;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "review-assistant",
    about = "Checklists, comment templates and notes for code reviews"
)]
pub struct Cli {
    /// Tab to open first.
    #[arg(short, long, value_enum, default_value_t = Tab::Checklist)]
    pub tab: Tab,

    /// Write logs to this file (the terminal is used by the UI).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive review assistant (default).
    Ui,
    /// Print the review checklist as a markdown task list.
    Checklist,
    /// Print the comment template library.
    Templates,
}

/// Parse CLI arguments.
pub fn parse_args() -> Cli {
    Cli::parse()
}
