//! territory-missions - Entry Point
//!
//! Plays one standard game seeded from the clock and prints it to stdout.
//! Diagnostics go to stderr.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use territory_missions::{Game, GameConfig, GameError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter("territory_missions=info")
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    tracing::info!(seed, "starting game");

    match play(seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "game aborted");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn play(seed: u64) -> Result<(), GameError> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut game = Game::with_seed(GameConfig::default(), seed)?;
    game.run(&mut out)?;
    out.flush()?;
    Ok(())
}
