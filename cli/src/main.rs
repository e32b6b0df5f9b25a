//! Terminal front-end: argument parsing, logger setup, and the stdin/stdout
//! game session.

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io;

mod coords;
mod render;
mod session;

/// Single-player minesweeper on a letter-by-number grid.
#[derive(Parser, Debug)]
#[command(name = "sapper", version, about)]
struct Cli {
    /// Seed for mine placement; omit for a fresh board every run.
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::debug!("mine placement seed: {seed}");
    let mut rng = SmallRng::seed_from_u64(seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&mut stdin.lock(), &mut stdout.lock(), &mut rng)?;
    Ok(())
}
