//! Squares: a two-player grid game.
//!
//! ## Usage
//!
//! - `squares` - Play in the text console
//! - `squares play` - Same as above
//! - `squares serve` - Answer JSON-line snapshot requests on stdin/stdout
//!
//! Logs are written to stderr. `RUST_LOG` overrides `--log-level` when set.

use std::io;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use squares::console::Console;
use squares::constants::DEFAULT_LOG_LEVEL;
use squares::game::Game;
use squares::snapshot;

/// Squares: place stones, form a square, win.
#[derive(Parser)]
#[command(name = "squares")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// RNG seed for computer moves
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the text console (GAME, MOVE, HELP, EXIT)
    Play,
    /// Answer board snapshot requests, one JSON object per line
    Serve,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    initialize_logging(cli.log_level);

    let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));
    info!(seed);
    let mut rng = fastrand::Rng::with_seed(seed);

    match cli.command {
        Some(Commands::Serve) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            snapshot::serve(stdin.lock(), stdout.lock(), &mut rng)?;
        }
        Some(Commands::Play) | None => {
            let mut console = Console::with_game(Game::with_rng(rng));
            console.run()?;
        }
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}
