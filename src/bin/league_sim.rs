//! Run a league from the command line and print JSON tables.
//!
//! ```text
//! league_sim --config league.toml --project --runs 1000
//! league_sim --roster teams.csv --weeks 4 --week 1
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use league_core::{League, LeagueConfig};

#[derive(Parser, Debug)]
#[command(name = "league_sim", about = "Simulate a round-robin league")]
struct Args {
    /// TOML league configuration
    #[arg(long, conflicts_with = "roster")]
    config: Option<PathBuf>,

    /// CSV roster (name,strength per line)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Override the configured number of weeks
    #[arg(long)]
    weeks: Option<u32>,

    /// Seed for the simulation random source
    #[arg(long)]
    seed: Option<u64>,

    /// Simulate only this week instead of the whole season
    #[arg(long)]
    week: Option<u32>,

    /// Print the projected final table
    #[arg(long)]
    project: bool,

    /// Print a summary over this many projections
    #[arg(long)]
    runs: Option<usize>,
}

#[derive(Serialize)]
struct Report<'a> {
    matches: &'a [league_core::Match],
    standings: Vec<league_core::Standing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    projected: Option<Vec<league_core::Standing>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    projection_summary: Option<Vec<league_core::ProjectionSummary>>,
}

fn load_config(args: &Args) -> Result<LeagueConfig> {
    let mut config = match (&args.config, &args.roster) {
        (Some(path), _) => LeagueConfig::read_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        (None, Some(path)) => LeagueConfig::from_roster_csv(path)
            .with_context(|| format!("loading roster {}", path.display()))?,
        (None, None) => LeagueConfig::default(),
    };

    if let Some(weeks) = args.weeks {
        config.weeks = weeks;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mut league = League::new(config).context("creating league")?;

    match args.week {
        Some(week) => league.simulate_week(week),
        None => league.simulate_all_remaining(),
    }
    .context("simulating matches")?;

    let standings = league.standings()?;
    let projected = if args.project {
        Some(league.projected_standings()?)
    } else {
        None
    };
    let projection_summary = match args.runs {
        Some(runs) => Some(league.projection_summary(runs, args.seed)?),
        None => None,
    };

    let report = Report {
        matches: league.matches(),
        standings,
        projected,
        projection_summary,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
