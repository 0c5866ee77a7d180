use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use country_leaderboard::display::{format_leaderboard, format_placements};
use country_leaderboard::telemetry::init_tracing;
use country_leaderboard::{
    load_snapshot, snapshot_fingerprint, Category, Country, LeaderboardConfig, LeaderboardReport,
    RankingEngine,
};

/// Rank countries by tax friendliness, crypto adoption, and overall score
#[derive(Parser, Debug)]
#[command(name = "country-leaderboard", version)]
struct Cli {
    /// Config file (JSON). Falls back to $LEADERBOARD_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full leaderboard: three top-3 lists and the merged badge list
    Rank {
        /// Snapshot file (.json or .csv). Defaults to the configured snapshot
        snapshot: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Top 3 for a single category
    Top {
        snapshot: Option<PathBuf>,

        /// composite | a | b
        #[arg(long, short = 'c', default_value = "composite")]
        category: Category,

        #[arg(long)]
        json: bool,
    },

    /// Counts and fingerprint of a snapshot
    Inspect { snapshot: Option<PathBuf> },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("❌ {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LeaderboardConfig::resolve(cli.config.as_deref())?;
    let engine = RankingEngine::new();

    match cli.command {
        Command::Rank { snapshot, json } => {
            let countries = load(snapshot.as_deref(), &config)?;
            if json {
                let report = LeaderboardReport::build(&engine, &countries, &config.labels)?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let board = engine.rank(&countries);
                print!("{}", format_leaderboard(&board, &config.labels));
            }
        }
        Command::Top {
            snapshot,
            category,
            json,
        } => {
            let countries = load(snapshot.as_deref(), &config)?;
            let placements = engine.top_n(&countries, category);
            if json {
                println!("{}", serde_json::to_string_pretty(&placements)?);
            } else {
                print!("{}", format_placements(category, &placements, &config.labels));
            }
        }
        Command::Inspect { snapshot } => {
            let countries = load(snapshot.as_deref(), &config)?;
            let eligible = countries.iter().filter(|c| c.is_rankable()).count();
            println!("📊 Countries:   {}", countries.len());
            println!("✓ Ranked:      {}", eligible);
            println!("✗ No scores:   {}", countries.len() - eligible);
            println!("🔑 Fingerprint: {}", snapshot_fingerprint(&countries)?);
        }
    }

    Ok(())
}

fn load(explicit: Option<&Path>, config: &LeaderboardConfig) -> Result<Vec<Country>> {
    let path = resolve_snapshot(explicit, config)
        .context("No snapshot given (pass a path, set LEADERBOARD_SNAPSHOT, or configure one)")?;
    load_snapshot(&path)
}

fn resolve_snapshot(explicit: Option<&Path>, config: &LeaderboardConfig) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| config.snapshot_path())
}
