//! The embedded move list.
//!
//! Reproduced as data, shuffling moves included. It is not a legal game: the
//! run stops at the first move that cannot be played.

use chess_core::MoveToken;

/// Mixed algebraic and coordinate tokens, in play order.
pub const MOVE_LIST: &[&str] = &[
    "e4", "e6", "d4", "d5", "Nc3", "Bb4", "Ne2", "dxe4", "e1d2", "d8d5", "a2a4", "d5e5", "d4e5",
    "b4c3", "d2c3", "b8d7", "d1d7", "e8d7", "c3d4", "e4e3", "f2e3", "a8b8", "a1b1", "b8a8",
    "b1a1", "a8b8", "a1b1", "b8a8", "a1b1", "a8b8", "b1a1", "a8b8", "h1g1", "a8b8", "b1a1",
    "a8b8", "h1g1", "a8b8", "b1a1", "a8b8", "h1g1", "a8b8", "b1a1", "a8b8", "h1g1", "a8b8",
    "b1a1", "a8b8", "a2a1", "g8f6", "c1d2", "h8d8", "d2c1", "a8b8", "e2c3", "d8e8", "c1d2",
    "e8g8", "f1d3", "a7a5", "a2a1", "c7c5", "d4c5", "g8f8", "d2c1", "f8d8", "d3e4", "f6d5",
    "c1d2", "d8f8", "a1a2", "d5f6", "g1a1", "f8d8", "a1g1", "d8f8", "g1a1", "f8d8", "a1g1",
    "d8f8", "g1a1", "f8d8", "a1g1", "d8f8", "g1a1", "f8d8", "a2a1", "d8f8", "a1a3", "f8d8",
    "g1a1", "d8f8", "a1g1", "f8d8", "g1a1", "d8f8", "a1g1", "f8d8", "g1a1", "d8f8", "a1g1",
    "f8d8", "a1a2", "f8d8", "d2c1", "f6h5", "e4g6", "h7g6", "c5d4", "d7e7", "c1d2", "h8h5",
    "a2a1", "h5h6", "a1c1", "g2e1", "c1a1", "h6h5", "a1c1", "e1c2", "c1b1", "h5h6", "b1c1",
    "h6h5", "c1b1", "h5h6", "b1c1", "h6h5", "c1b1", "h5h6", "b1c1", "h6h5", "c1b1", "h5h6",
    "b1c1", "h6h7", "c1b1", "h7h5", "b1c1", "h5h6", "c1b1", "h6h5", "b1c1", "h5h6", "c1b1",
    "h6h5", "b1c1", "h5h6", "c1b1", "h6h5", "b1c1", "h5h6", "c1b1", "h6h5", "b1c1", "h5h6",
    "b1c1", "h6h7", "c1b1", "h7h8", "c1b1", "h8e8", "d2c1", "c8d7", "a3a1", "b8c8",
];

/// The fixed list as tokens.
pub fn load_moves() -> Vec<MoveToken> {
    chess_core::token::tokens_from(MOVE_LIST)
}
