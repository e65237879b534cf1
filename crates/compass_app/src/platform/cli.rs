use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::logging::LogDestination;
use super::ui::Page;

#[derive(Debug, Parser)]
#[command(name = "compass")]
#[command(about = "Job suggestions, career chat and a searchable job directory")]
pub struct Cli {
    #[command(subcommand)]
    pub page: PageCommand,

    /// RON configuration file (defaults to ./compass.ron when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend base URL; overrides the configuration file.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory that receives HTML snapshots of the rendered page.
    #[arg(long)]
    pub snapshot_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum PageCommand {
    /// Skills form, suggested roles and the career chat
    Predict,
    /// Job directory with search and category filter
    Jobs,
}

impl PageCommand {
    pub fn page(self) -> Page {
        match self {
            PageCommand::Predict => Page::Prediction,
            PageCommand::Jobs => Page::Directory,
        }
    }
}
