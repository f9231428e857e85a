//! Move feeder
//!
//! Replays a fixed list of move tokens into a game tree, one legal move at a
//! time, and renders the result as a PGN transcript. The chess rules sit
//! behind `rules::ChessRules`; `rules::ShakmatyRules` is the stock backend.

pub mod config;
pub mod error;
pub mod feeder;
pub mod moves;
pub mod rules;
