//! Feeder error types

use chess_core::ChessError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeederError {
    #[error("Configuration error: {0}")]
    Config(&'static str),

    #[error("Move {ply} ('{token}') rejected")]
    Feed {
        ply: usize,
        token: String,
        #[source]
        source: ChessError,
    },

    #[error(transparent)]
    Chess(#[from] ChessError),
}
