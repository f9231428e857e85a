//! Chess primitives shared by the move feeder.
//!
//! Move tokens, the game tree, PGN transcripts and the opening book. Rules
//! and SAN rendering come from shakmaty; re-reading transcripts goes through
//! pgn-reader.

pub mod error;
pub mod game_data;
pub mod game_tree;
pub mod opening_book;
pub mod pgn;
pub mod token;

pub use error::ChessError;
pub use game_data::{GameHeaders, ParsedGame};
pub use game_tree::{GameTree, NodeId, Termination, TreeNode};
pub use opening_book::{OpeningBook, OpeningMatch};
pub use token::{MoveToken, Notation, ParsedMove};
