//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChessError {
    #[error("Malformed move token '{token}': {reason}")]
    MalformedToken { token: String, reason: String },

    #[error("Illegal move '{token}': {reason}")]
    IllegalMove { token: String, reason: String },

    #[error("Unknown game tree node: {0}")]
    UnknownNode(usize),

    #[error("PGN error: {0}")]
    Pgn(String),

    #[error("Opening book error: {0}")]
    OpeningBook(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChessError {
    pub fn malformed(token: &str, reason: impl ToString) -> Self {
        ChessError::MalformedToken {
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn illegal(token: &str, reason: impl ToString) -> Self {
        ChessError::IllegalMove {
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }
}
