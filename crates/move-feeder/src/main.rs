//! Move feeder
//!
//! Replays the embedded move list and prints the game as PGN on stdout.
//! Logs go to stderr. The first malformed or illegal move aborts the run
//! with a nonzero exit; `--partial` also prints what was recorded up to it.

use chess_core::OpeningBook;
use move_feeder::config::FeederConfig;
use move_feeder::feeder::MoveFeeder;
use move_feeder::moves::load_moves;
use move_feeder::rules::ShakmatyRules;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // stdout carries the transcript only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = FeederConfig::from_env()?.with_args(&args)?;

    let moves = load_moves();
    info!(
        moves = moves.len(),
        columns = ?config.columns,
        partial = config.partial_output,
        "Feeding embedded move list"
    );

    let book = match &config.opening_book {
        Some(path) => OpeningBook::load(path)?,
        None => OpeningBook::embedded()?,
    };
    info!(openings = book.len(), "Opening book loaded");

    let rules = ShakmatyRules::new(config.columns).with_opening_book(book);
    let feeder = MoveFeeder::new(rules, config.headers.clone());

    match feeder.run(&moves) {
        Ok(transcript) => {
            println!("{transcript}");
            Ok(())
        }
        Err(failure) => {
            error!(
                ply = failure.ply,
                token = %failure.token,
                reason = %failure.error,
                recorded = failure.partial.mainline_len(),
                "Feed aborted"
            );
            let (err, mut partial) = failure.split();

            if config.partial_output {
                partial.headers_mut().result = "*".to_string();
                println!("{}", feeder.serialize(&partial));
            }
            Err(err.into())
        }
    }
}
