//! Main entry point for the scrim-room balancing CLI
//!
//! Reads a selected roster from a JSON file, runs the split evaluator for
//! the chosen game, and prints the ranked suggestions.

use anyhow::{Context, Result};
use clap::Parser;
use scrim_room::balance::CoverageFirstBalancer;
use scrim_room::config::AppConfig;
use scrim_room::profile::{GameProfile, GameProfileProvider, StaticProfileProvider};
use scrim_room::roster::RosterManager;
use scrim_room::types::{BalanceSuggestions, GameKey, Player};
use scrim_room::utils::team_rank_total;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Scrim Room Team Balancer - 5v5 Roster Splitting
#[derive(Parser)]
#[command(
    name = "scrim-room",
    version,
    about = "A team balancing tool for 5v5 scrim rosters",
    long_about = "Scrim Room takes a roster of exactly ten players, enumerates every \
                 structurally distinct split into two teams of five, scores each split by \
                 rank balance and (for role-aware games) role coverage, and prints the \
                 best-scoring suggestions in order."
)]
struct Args {
    /// Roster file
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to roster file (JSON list of exactly ten players)"
    )]
    roster: PathBuf,

    /// Game to score with
    #[arg(
        short,
        long,
        value_name = "GAME",
        default_value = "dota2",
        help = "Game profile to score with (dota2, cs)"
    )]
    game: String,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Maximum suggestions override
    #[arg(long, value_name = "N", help = "Override maximum number of suggestions")]
    max_suggestions: Option<usize>,

    /// Emit JSON instead of a text report
    #[arg(long, help = "Emit suggestions as JSON instead of a text report")]
    json: bool,

    /// Dry run mode (validate config and roster, then exit)
    #[arg(long, help = "Validate configuration and roster and exit without balancing")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Read a roster file: a JSON array of player records
fn load_roster(path: &Path) -> Result<Vec<Player>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse roster file: {}", path.display()))
}

/// Print a plain-text report of the ranked suggestions
fn print_report(suggestions: &BalanceSuggestions, profile: &GameProfile) {
    println!(
        "Top {} suggestions for {} ({} batch {})",
        suggestions.splits.len(),
        profile.name,
        profile.rank_unit,
        suggestions.batch_id
    );

    for (index, split) in suggestions.splits.iter().enumerate() {
        println!();
        println!(
            "Suggestion {} - {} difference: {}",
            index + 1,
            profile.rank_unit,
            split.rank_diff
        );
        if let Some(coverage) = split.total_coverage {
            println!("  Role coverage: {}/10", coverage);
        }

        for (title, team) in [("Team 1", &split.team_a), ("Team 2", &split.team_b)] {
            let names: Vec<&str> = team.iter().map(|p| p.name.as_str()).collect();
            println!(
                "  {} (total {} {}): {}",
                title,
                team_rank_total(team),
                profile.rank_unit,
                names.join(", ")
            );
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if let Some(max_suggestions) = args.max_suggestions {
        config.balance.max_suggestions = max_suggestions;
    }
    scrim_room::config::validate_config(&config)?;

    init_logging(&config.service.log_level)?;
    info!("Starting {} v{}", config.service.name, scrim_room::VERSION);

    let game: GameKey = args.game.parse()?;
    let players = load_roster(&args.roster)?;

    if args.dry_run {
        println!(
            "Configuration OK; roster file contains {} players",
            players.len()
        );
        return Ok(());
    }

    let profile_provider = Arc::new(StaticProfileProvider::new());
    let profile = profile_provider.get_profile(game)?;
    let balancer = Arc::new(CoverageFirstBalancer::with_config(config.balance_config()));

    let mut manager = RosterManager::new(profile_provider, balancer);
    manager.switch_game(game);
    for player in players {
        let id = player.id.clone();
        manager.add_player(player)?;
        manager.select_player(&id)?;
    }

    let suggestions = manager.balance()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        print_report(&suggestions, &profile);
    }

    Ok(())
}
