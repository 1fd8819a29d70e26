use clap::{Parser, Subcommand, ValueEnum};

use crate::models::ProgressStatus;

/// Bilingual study-guide catalog browser for classes 1 to 10.
#[derive(Debug, Parser)]
#[command(name = "pathshala", version, about)]
pub struct Cli {
    /// Data directory holding the settings file and persisted state
    #[arg(long, default_value = "Pathshala Data")]
    pub data_dir: String,

    /// Catalog file, overriding the settings file
    #[arg(long)]
    pub catalog: Option<String>,

    /// Enable debug-level logging
    #[arg(long)]
    pub debug: bool,

    /// Echo logs to the console in addition to the log file
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Home view: quote, class listing, recently viewed guides
    Classes {
        /// Filter classes by name (English or Bengali)
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Subjects of one class, grouped by guide version
    Class {
        id: String,
        /// Filter subjects by name (English or Bengali)
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Guide detail; records the visit in the recently-viewed list
    Guide { id: String },

    /// Bookmarked guides with their class context
    Bookmarks {
        /// Filter by subject or class name
        #[arg(long, default_value = "")]
        search: String,
    },

    /// The recently-viewed list, most recent first
    Recent,

    /// Bookmark a guide
    Bookmark { id: String },

    /// Remove a bookmark
    Unbookmark { id: String },

    /// Set progress for a guide, or cycle it when no status is given
    Progress {
        id: String,
        /// One of not-started, in-progress, completed
        status: Option<ProgressStatusArg>,
    },

    /// Toggle the interface language between English and Bengali
    Lang,

    /// Toggle the display theme between light and dark
    Theme,
}

/// CLI spelling of a progress status. Unknown values are rejected by
/// clap at parse time, so the store only ever sees the closed enum.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressStatusArg {
    NotStarted,
    InProgress,
    Completed,
}

impl From<ProgressStatusArg> for ProgressStatus {
    fn from(arg: ProgressStatusArg) -> Self {
        match arg {
            ProgressStatusArg::NotStarted => ProgressStatus::NotStarted,
            ProgressStatusArg::InProgress => ProgressStatus::InProgress,
            ProgressStatusArg::Completed => ProgressStatus::Completed,
        }
    }
}
