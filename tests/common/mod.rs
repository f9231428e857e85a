use chess_core::token::tokens_from;
use chess_core::{GameHeaders, GameTree};
use move_feeder::feeder::{FeedFailure, MoveFeeder};
use move_feeder::rules::ShakmatyRules;

/// 1. e4 a6 2. e5 d5 3. exd6 (en passant) cxd6 4. Nf3 Nc6 5. Be2 Bg4 6. O-O
pub const CASTLING_GAME: &[&str] = &[
    "e2e4", "a7a6", "e4e5", "d7d5", "e5d6", "cxd6", "g1f3", "Nc6", "f1e2", "c8g4", "e1g1",
];

/// 1. a4 b5 2. axb5 a6 3. bxa6 Bb7 4. axb7 Nc6 5. bxa8=Q
pub const PROMOTION_GAME: &[&str] = &[
    "a2a4", "b5", "a4b5", "a7a6", "bxa6", "c8b7", "a6b7", "b8c6", "b7a8q",
];

/// Scholar's mate.
pub const SCHOLARS_MATE: &[&str] = &["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6", "Qxf7#"];

/// Loyd's ten-move stalemate, Black to move with no legal reply.
pub const STALEMATE_GAME: &[&str] = &[
    "e3", "a5", "Qh5", "Ra6", "Qxa5", "h5", "h4", "Rah6", "Qxc7", "f6", "Qxd7+", "Kf7",
    "Qxb7", "Qd3", "Qxb8", "Qh7", "Qxc8", "Kg6", "Qe6",
];

/// Build a feeder with default headers and no wrapping.
pub fn feeder() -> MoveFeeder<ShakmatyRules> {
    MoveFeeder::new(ShakmatyRules::default(), GameHeaders::default())
}

/// Feed a literal list, panicking on rejection.
pub fn feed_ok(moves: &[&str]) -> GameTree {
    match feeder().feed(&tokens_from(moves)) {
        Ok(tree) => tree,
        Err(failure) => panic!(
            "move {} ('{}') rejected: {}",
            failure.ply, failure.token, failure.error
        ),
    }
}

/// Feed a literal list that must be rejected.
pub fn feed_err(moves: &[&str]) -> FeedFailure<GameTree> {
    match feeder().feed(&tokens_from(moves)) {
        Ok(tree) => panic!("expected rejection, recorded {:?}", tree.mainline_sans()),
        Err(failure) => failure,
    }
}
