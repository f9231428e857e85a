//! Move tokens in coordinate (UCI) or algebraic (SAN) notation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use shakmaty::{san::SanPlus, uci::UciMove, Chess, Move};

use crate::error::ChessError;

/// Origin square, destination square, optional lowercase promotion role.
static COORDINATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-h][1-8][a-h][1-8][qrbn]?$").expect("valid regex"));

/// Which notation a token is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Coordinate,
    Algebraic,
}

/// A raw move string, immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveToken(String);

impl MoveToken {
    pub fn new(token: &str) -> Self {
        Self(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the token by shape only. Returns None for strings that are
    /// neither coordinate nor algebraic notation.
    pub fn notation(&self) -> Option<Notation> {
        if COORDINATE_RE.is_match(&self.0) {
            Some(Notation::Coordinate)
        } else if self.0.parse::<SanPlus>().is_ok() {
            Some(Notation::Algebraic)
        } else {
            None
        }
    }

    /// Parse the token without looking at any position.
    pub fn parse(&self) -> Result<ParsedMove, ChessError> {
        let token = self.0.trim();
        if token.is_empty() {
            return Err(ChessError::malformed(&self.0, "empty token"));
        }

        if COORDINATE_RE.is_match(token) {
            let uci: UciMove = token
                .parse()
                .map_err(|e| ChessError::malformed(token, e))?;
            return Ok(ParsedMove::Coordinate {
                token: token.to_string(),
                uci,
            });
        }

        let san: SanPlus = token
            .parse()
            .map_err(|e| ChessError::malformed(token, e))?;
        Ok(ParsedMove::Algebraic {
            token: token.to_string(),
            san,
        })
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MoveToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// A syntactically valid move that still has to be checked against a position.
#[derive(Debug, Clone)]
pub enum ParsedMove {
    Coordinate { token: String, uci: UciMove },
    Algebraic { token: String, san: SanPlus },
}

impl ParsedMove {
    pub fn token(&self) -> &str {
        match self {
            ParsedMove::Coordinate { token, .. } => token,
            ParsedMove::Algebraic { token, .. } => token,
        }
    }

    pub fn notation(&self) -> Notation {
        match self {
            ParsedMove::Coordinate { .. } => Notation::Coordinate,
            ParsedMove::Algebraic { .. } => Notation::Algebraic,
        }
    }

    /// Resolve to a legal move in `pos`.
    pub fn to_move(&self, pos: &Chess) -> Result<Move, ChessError> {
        match self {
            ParsedMove::Coordinate { token, uci } => uci
                .to_move(pos)
                .map_err(|e| ChessError::illegal(token, e)),
            ParsedMove::Algebraic { token, san } => san
                .san
                .to_move(pos)
                .map_err(|e| ChessError::illegal(token, e)),
        }
    }
}

/// Tokenize a literal list.
pub fn tokens_from(moves: &[&str]) -> Vec<MoveToken> {
    moves.iter().map(|m| MoveToken::new(m)).collect()
}
