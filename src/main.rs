//! loa-rust: a Lines of Action engine.
//!
//! ## Usage
//!
//! - `loa-rust` - Play on stdin/stdout (black manual, white automated)
//! - `loa-rust play` - Same as above
//! - `loa-rust selfplay` - Let the engine play both sides
//!
//! Set `RUST_LOG=debug` to see search statistics on stderr.

use std::io;

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use loa_rust::constants::{DEFAULT_MOVE_LIMIT, SEARCH_DEPTH};
use loa_rust::game::{Controller, Game, GameConfig};

/// loa-rust: a Lines of Action engine
#[derive(Parser)]
#[command(name = "loa-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search depth of the machine player, in plies
    #[arg(long, global = true, default_value_t = SEARCH_DEPTH)]
    depth: usize,

    /// Moves per side before the game is a tie
    #[arg(long, global = true, default_value_t = DEFAULT_MOVE_LIMIT)]
    limit: usize,

    /// Seed for random players
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, reading moves and commands from stdin
    Play,
    /// Let the machine play both sides from the opening
    Selfplay,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    ensure!(cli.depth >= 1, "--depth must be at least 1");
    ensure!(cli.limit >= 1, "--limit must be at least 1");
    let config = GameConfig {
        depth: cli.depth,
        move_limit: cli.limit,
        seed: cli.seed,
        ..GameConfig::default()
    };

    match cli.command {
        Some(Commands::Selfplay) => run_selfplay(config),
        Some(Commands::Play) | None => {
            let mut game = Game::with_config(&config);
            game.run(io::stdin().lock(), io::stdout().lock())
                .context("failed to run the game loop")
        }
    }
}

fn run_selfplay(config: GameConfig) -> Result<()> {
    let mut game = Game::with_config(&GameConfig {
        black: Controller::Auto,
        white: Controller::Auto,
        ..config
    });
    for line in game.start() {
        println!("{line}");
    }
    println!("{}", game.board());
    Ok(())
}
