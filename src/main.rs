//! Plays one game of War and prints the play-by-play to stdout.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use war::{Game, GameOptions, Player};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    tracing::debug!(seed, "starting game");

    let mut game = Game::new(GameOptions::default(), seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut write_error = None;

    let result = game.run_with(|report, game| {
        if write_error.is_some() {
            return;
        }
        let written = writeln!(out, "{report}").and_then(|()| {
            for player in Player::BOTH {
                writeln!(out, "{player} deck: {}", game.deck(player))?;
            }
            writeln!(out)
        });
        if let Err(err) = written {
            write_error = Some(err);
        }
    });

    if let Some(err) = write_error {
        eprintln!("Output error: {err}");
        return ExitCode::FAILURE;
    }

    match result {
        Ok(result) => {
            if let Err(err) = writeln!(out, "{result}") {
                eprintln!("Output error: {err}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Game error: {err}");
            ExitCode::FAILURE
        }
    }
}
