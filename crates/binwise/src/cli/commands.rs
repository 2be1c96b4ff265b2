//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::entry::Category;

/// Log command arguments.
#[derive(Debug, Args)]
pub struct LogCommand {
    /// What was thrown away (e.g. "Plastic bottle")
    #[arg(short, long)]
    pub item: String,

    /// Waste category
    #[arg(short, long, value_enum)]
    pub category: CategoryArg,

    /// Weight in kilograms
    #[arg(short, long)]
    pub weight: f64,

    /// Calendar date of the entry (ISO format, defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Entries listing command arguments.
#[derive(Debug, Args)]
pub struct EntriesCommand {
    /// Maximum number of entries to show (0 for all)
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Report command arguments.
#[derive(Debug, Args)]
pub struct ReportCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Anchor date for the rolling windows (defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// Challenge commands.
#[derive(Debug, Subcommand)]
pub enum ChallengeCommand {
    /// List active community challenges
    List {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Join a challenge by id
    Join {
        /// The challenge id
        id: String,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Waste category argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Plastic, glass, paper, metal
    Recyclable,
    /// Food scraps, organic waste
    Compostable,
    /// Non-recyclable waste
    Landfill,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Recyclable => Self::Recyclable,
            CategoryArg::Compostable => Self::Compostable,
            CategoryArg::Landfill => Self::Landfill,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}
