//! Football Competition CLI
//!
//! Loads a roster file and drives the engine: a single match minute by
//! minute, a full round-robin league, or a knockout bracket.

mod render;
mod roster;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fc_core::bracket::{TeamSelection, TournamentState};
use fc_core::config::CompetitionConfig;
use fc_core::engine::{outcome, run_clock};
use fc_core::league::League;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};
use std::thread;

#[derive(Parser)]
#[command(name = "fc")]
#[command(about = "Simulate football matches, leagues and knockout tournaments", long_about = None)]
struct Cli {
    /// Competition config JSON (falls back to FC_CONFIG_PATH, then defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single match with a minute-by-minute event feed
    Match {
        /// Roster JSON file
        #[arg(long)]
        teams: PathBuf,

        /// Home team id
        #[arg(long)]
        home: String,

        /// Away team id
        #[arg(long)]
        away: String,

        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Simulated minutes (overrides config)
        #[arg(long)]
        minutes: Option<u32>,

        /// Pace the feed over the configured match duration
        #[arg(long)]
        realtime: bool,

        /// One-shot knockout result instead of the minute feed (no draws)
        #[arg(long)]
        knockout: bool,
    },

    /// Play a full round-robin league and print the table
    League {
        /// Roster JSON file
        #[arg(long)]
        teams: PathBuf,

        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the final league state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a knockout bracket over the first teams of the roster
    Knockout {
        /// Roster JSON file
        #[arg(long)]
        teams: PathBuf,

        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the final bracket as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Match { teams, home, away, seed, minutes, realtime, knockout } => {
            let mut config = config;
            if let Some(minutes) = minutes {
                config.clock.total_minutes = minutes;
                config.validate().context("Invalid --minutes")?;
            }
            play_match(&config, &teams, &home, &away, seed, realtime, knockout)
        }
        Commands::League { teams, seed, json } => play_league(&teams, seed, json),
        Commands::Knockout { teams, seed, json } => play_knockout(&config, &teams, seed, json),
    }
}

fn load_config(path: Option<&Path>) -> Result<CompetitionConfig> {
    let config = match path {
        Some(path) => CompetitionConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CompetitionConfig::from_env_or_default().context("Failed to load config from environment")?,
    };
    log::debug!("Using config: {:?}", config);
    Ok(config)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("Seed: {}", seed);
    ChaCha8Rng::seed_from_u64(seed)
}

fn play_match(
    config: &CompetitionConfig,
    roster_path: &Path,
    home_id: &str,
    away_id: &str,
    seed: Option<u64>,
    realtime: bool,
    knockout: bool,
) -> Result<()> {
    let teams = roster::load_roster(roster_path)?;
    let home = roster::find_team(&teams, home_id)?;
    let away = roster::find_team(&teams, away_id)?;
    let mut rng = seeded_rng(seed);

    println!("{} vs {}", home.name, away.name);

    if knockout {
        let result = outcome::simulate(home, away, &mut rng, true);
        println!("{}", result.scoreline());
        return Ok(());
    }

    let tick = config.clock.tick_interval();
    let finished = run_clock(home, away, config.clock.total_minutes, &mut rng, |state, events| {
        for event in events {
            println!("{}", event);
        }
        if realtime && !state.is_finished() {
            thread::sleep(tick);
        }
    })?;

    println!("{}", finished.result.scoreline());
    Ok(())
}

fn play_league(roster_path: &Path, seed: Option<u64>, json: bool) -> Result<()> {
    let teams = roster::load_roster(roster_path)?;
    let mut rng = seeded_rng(seed);

    let league = League::new(teams)?.play_out(&mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&league)?);
        return Ok(());
    }

    println!("Results");
    print!("{}", render::league_results(&league));
    println!();
    print!("{}", render::standings_table(league.standings()));
    Ok(())
}

fn play_knockout(config: &CompetitionConfig, roster_path: &Path, seed: Option<u64>, json: bool) -> Result<()> {
    let teams = roster::load_roster(roster_path)?;
    let mut rng = seeded_rng(seed);

    let mut selection = TeamSelection::from_config(&config.selection);
    for team in teams.into_iter().take(selection.max_teams()) {
        selection.select(team)?;
    }
    let pairs = selection
        .pair_in_order()
        .with_context(|| format!("Knockout needs {} teams in the roster", selection.max_teams()))?;

    let state = TournamentState::new().initialize(&pairs)?.play_out(&mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    print!("{}", render::bracket(&state));
    Ok(())
}
