//! Command-line interface for binwise.
//!
//! This module provides the CLI structure and command definitions for the
//! `binwise` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    CategoryArg, ChallengeCommand, ConfigCommand, EntriesCommand, LogCommand, OutputFormat,
    ReportCommand,
};

/// binwise - Track your household waste
///
/// Log waste items into categories, view aggregated analytics over your
/// history, and join community challenges.
#[derive(Debug, Parser)]
#[command(name = "binwise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    // Long-only: -c belongs to `log --category`.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log a waste item
    Log(LogCommand),

    /// List logged entries, newest first
    Entries(EntriesCommand),

    /// Show aggregated analytics over your history
    Report(ReportCommand),

    /// View and join community challenges
    #[command(subcommand)]
    Challenges(ChallengeCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "binwise");
    }

    #[test]
    fn test_verbosity_levels() {
        let base = |verbose, quiet| Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Report(ReportCommand {
                json: false,
                as_of: None,
            }),
        };

        assert_eq!(base(0, true).verbosity(), crate::logging::Verbosity::Quiet);
        assert_eq!(base(0, false).verbosity(), crate::logging::Verbosity::Normal);
        assert_eq!(
            base(1, false).verbosity(),
            crate::logging::Verbosity::Verbose
        );
        assert_eq!(base(2, false).verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_log() {
        let args = vec![
            "binwise", "log", "--item", "Plastic bottle", "--category", "recyclable", "--weight",
            "0.5",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Log(cmd) = cli.command else {
            panic!("expected log command");
        };
        assert_eq!(cmd.item, "Plastic bottle");
        assert_eq!(cmd.category, CategoryArg::Recyclable);
        assert_eq!(cmd.weight, 0.5);
        assert!(cmd.date.is_none());
    }

    #[test]
    fn test_parse_log_with_date() {
        let args = vec![
            "binwise", "log", "-i", "Eggshells", "-c", "compostable", "-w", "0.1", "-d",
            "2025-01-20",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Log(cmd) = cli.command else {
            panic!("expected log command");
        };
        assert_eq!(cmd.date, Some("2025-01-20".parse().unwrap()));
    }

    #[test]
    fn test_parse_log_rejects_bad_weight() {
        let args = vec![
            "binwise", "log", "-i", "Paper", "-c", "recyclable", "-w", "heavy",
        ];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_log_rejects_bad_category() {
        let args = vec!["binwise", "log", "-i", "Paper", "-c", "nuclear", "-w", "0.5"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_entries_defaults() {
        let args = vec!["binwise", "entries"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Entries(cmd) = cli.command else {
            panic!("expected entries command");
        };
        assert_eq!(cmd.limit, 10);
        assert_eq!(cmd.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_report() {
        let args = vec!["binwise", "report", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Report(ReportCommand { json: true, .. })
        ));
    }

    #[test]
    fn test_parse_challenges_join() {
        let args = vec!["binwise", "challenges", "join", "1"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Challenges(ChallengeCommand::Join { id }) = cli.command else {
            panic!("expected challenges join command");
        };
        assert_eq!(id, "1");
    }

    #[test]
    fn test_parse_with_config() {
        let args = vec!["binwise", "--config", "/custom/config.toml", "entries"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose_and_quiet_flags() {
        let cli = Cli::try_parse_from(vec!["binwise", "-v", "entries"]).unwrap();
        assert_eq!(cli.verbose, 1);

        let cli = Cli::try_parse_from(vec!["binwise", "-q", "entries"]).unwrap();
        assert!(cli.quiet);
    }
}
