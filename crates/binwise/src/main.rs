//! `binwise` - CLI for waste tracking
//!
//! This binary provides the command-line interface for logging waste items,
//! viewing analytics, and joining community challenges.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;

use binwise::analytics::{self, compute_analytics};
use binwise::challenge::{ChallengeRegistry, JoinOutcome};
use binwise::cli::{
    ChallengeCommand, Cli, Command, ConfigCommand, EntriesCommand, LogCommand, OutputFormat,
    ReportCommand,
};
use binwise::entry::WasteEntry;
use binwise::store::EntryStore;
use binwise::{init_logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Log(cmd) => handle_log(&config, &cmd),
        Command::Entries(cmd) => handle_entries(&config, &cmd),
        Command::Report(cmd) => handle_report(&config, &cmd),
        Command::Challenges(cmd) => handle_challenges(&cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Today's calendar date in the local timezone.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Open the configured store and seed it on first run.
fn open_store(config: &Config) -> Result<EntryStore> {
    let mut store = EntryStore::open(config.database_path())?;

    if config.seed.enabled {
        let seeded = store.initialize(&mut rand::thread_rng(), today(), config.seed.days)?;
        if seeded > 0 {
            println!("First run: seeded {seeded} sample entries.");
        }
    }

    Ok(store)
}

fn handle_log(config: &Config, cmd: &LogCommand) -> Result<()> {
    let store = open_store(config)?;

    let date = cmd.date.unwrap_or_else(today);
    let entry = WasteEntry::new(cmd.item.clone(), cmd.category.into(), cmd.weight, date);
    store.add(&entry)?;

    println!(
        "Logged {} kg of {} ({}) on {}, earning {} points.",
        entry.weight, entry.item, entry.category, entry.date, entry.points
    );
    Ok(())
}

fn handle_entries(config: &Config, cmd: &EntriesCommand) -> Result<()> {
    let store = open_store(config)?;
    let entries = if cmd.limit == 0 {
        store.list()?
    } else {
        store.recent(cmd.limit)?
    };

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Plain => {
            for entry in &entries {
                println!(
                    "{}  {:<12} {:>6.2} kg  {}",
                    entry.date,
                    entry.category.to_string(),
                    entry.weight,
                    entry.item
                );
            }
        }
        OutputFormat::Table => {
            println!(
                "{:<12} {:<12} {:>9} {:>7}  {}",
                "Date", "Category", "Weight", "Points", "Item"
            );
            println!("{}", "-".repeat(64));
            for entry in &entries {
                println!(
                    "{:<12} {:<12} {:>6.2} kg {:>7}  {}",
                    entry.date.to_string(),
                    entry.category.to_string(),
                    entry.weight,
                    entry.points,
                    entry.item
                );
            }
            println!(
                "\n{} shown of {} total entries",
                entries.len(),
                store.count()?
            );
        }
    }
    Ok(())
}

fn handle_report(config: &Config, cmd: &ReportCommand) -> Result<()> {
    let store = open_store(config)?;
    let entries = store.list()?;
    let now = cmd.as_of.unwrap_or_else(today);

    let report = compute_analytics(&entries, now);
    let series = analytics::daily_series(&entries, now);
    let trend = analytics::week_over_week(&entries, now);
    let points = analytics::points_earned(&entries);

    if cmd.json {
        let json = serde_json::json!({
            "analytics": report,
            "daily_series": series,
            "week_over_week_percent": trend,
            "points_earned": points,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("Waste report as of {now}");
    println!("========================");
    println!();
    println!("Total logged:   {:.2} kg over {} entries", report.total_weight, report.total_entries);
    println!("Points earned:  {points}");
    println!();
    println!("[By category]");
    for (category, weight) in &report.category_totals {
        println!("  {:<12} {weight:>6.2} kg", category.to_string());
    }
    println!();
    println!("[Rolling windows]");
    println!("  Last 7 days:   {:>6.2} kg", report.last_7_days);
    println!("  Last 30 days:  {:>6.2} kg", report.last_30_days);
    match trend {
        Some(percent) if percent <= 0.0 => {
            println!("  Week trend:    {percent:.1}% (less than the week before)");
        }
        Some(percent) => println!("  Week trend:    +{percent:.1}% (more than the week before)"),
        None => println!("  Week trend:    n/a (nothing logged the week before)"),
    }
    println!();
    println!("[Daily breakdown, last 7 days]");
    for day in &series {
        println!(
            "  {}  total {:>5.2} kg  (recyclable {:.2}, compostable {:.2}, landfill {:.2})",
            day.date,
            day.total(),
            day.recyclable,
            day.compostable,
            day.landfill
        );
    }
    Ok(())
}

fn handle_challenges(cmd: &ChallengeCommand) -> Result<()> {
    let mut registry = ChallengeRegistry::new();

    match cmd {
        ChallengeCommand::List { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(registry.list())?);
            } else {
                for challenge in registry.list() {
                    println!("[{}] {}", challenge.id, challenge.title);
                    println!("    {}", challenge.description);
                    println!(
                        "    {:.1}/{:.1} kg ({:.0}%), {} participants, ends {}",
                        challenge.current,
                        challenge.target,
                        challenge.progress_percent(),
                        challenge.participants,
                        challenge.end_date
                    );
                    println!("    Reward: {}", challenge.reward);
                }
            }
        }
        ChallengeCommand::Join { id } => match registry.join(id) {
            JoinOutcome::Joined => {
                let challenge = registry
                    .get(id)
                    .ok_or_else(|| anyhow::anyhow!("challenge disappeared after join"))?;
                println!(
                    "Joined '{}', now {} participants.",
                    challenge.title, challenge.participants
                );
            }
            JoinOutcome::AlreadyJoined => println!("Already joined that challenge."),
            JoinOutcome::UnknownChallenge => println!("No challenge with id '{id}'."),
        },
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:  {}", config.database_path().display());
                println!();
                println!("[Seed]");
                println!("  Enabled:        {}", config.seed.enabled);
                println!("  History days:   {}", config.seed.days);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
