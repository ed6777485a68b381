use anyhow::{Context, Result};
use clap::Parser;
use std::io::stdout;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use board_snake::board::{load_board, save_board, write_board};
use board_snake::game::{GameConfig, GameState, RandomFood, update_state};
use board_snake::metrics::SessionMetrics;

#[derive(Parser)]
#[command(name = "board_snake")]
#[command(version, about = "Advance a snake board by a number of ticks")]
struct Cli {
    /// Board file to load; the default board is used when omitted
    #[arg(long)]
    board: Option<PathBuf>,

    /// JSON config for the default board
    #[arg(long, conflicts_with = "board")]
    config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value = "1")]
    ticks: u64,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write the final board here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)
            .with_context(|| format!("Failed to read config {:?}", path))?,
        None => GameConfig::default(),
    };

    let mut state = match &cli.board {
        Some(path) => {
            load_board(path).with_context(|| format!("Failed to load board {:?}", path))?
        }
        None => GameState::from_config(&config).context("Failed to build default board")?,
    };

    let mut food = match cli.seed.or(config.food_seed) {
        Some(seed) => RandomFood::seeded(seed),
        None => RandomFood::new(),
    };

    let mut metrics = SessionMetrics::new();
    for _ in 0..cli.ticks {
        if state.live_snakes() == 0 {
            info!(tick = metrics.ticks, "no live snakes left");
            break;
        }
        let report = update_state(&mut state, &mut food).context("Tick failed")?;
        metrics.record(&report);
    }

    match &cli.out {
        Some(path) => {
            save_board(&state, path).with_context(|| format!("Failed to save board {:?}", path))?
        }
        None => write_board(&state, stdout().lock()).context("Failed to write board")?,
    }

    eprintln!(
        "ticks: {}  food eaten: {}  deaths: {}  live snakes: {}/{}  time: {}",
        metrics.ticks,
        metrics.food_eaten,
        metrics.deaths,
        state.live_snakes(),
        state.num_snakes(),
        metrics.format_time()
    );

    Ok(())
}
