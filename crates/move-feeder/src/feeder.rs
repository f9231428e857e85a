//! The move feeder: token list in, game record out.

use chess_core::{ChessError, GameHeaders, MoveToken, NodeId};
use tracing::{debug, info};

use crate::error::FeederError;
use crate::rules::{ChessRules, Conclusion};

/// First rejected token of a run, plus everything recorded before it.
pub struct FeedFailure<T> {
    pub ply: usize, // 0-based index of the rejected token
    pub token: MoveToken,
    pub error: ChessError,
    pub partial: T,
}

impl<T> FeedFailure<T> {
    /// Split into the reportable error and the partial record.
    pub fn split(self) -> (FeederError, T) {
        let err = FeederError::Feed {
            ply: self.ply,
            token: self.token.to_string(),
            source: self.error,
        };
        (err, self.partial)
    }
}

pub struct MoveFeeder<R: ChessRules> {
    rules: R,
    headers: GameHeaders,
}

impl<R: ChessRules> MoveFeeder<R> {
    pub fn new(rules: R, headers: GameHeaders) -> Self {
        Self { rules, headers }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Parse then play one token against `position`.
    pub fn apply(
        &self,
        token: &MoveToken,
        position: &R::Position,
    ) -> Result<(R::Move, R::Position), ChessError> {
        let parsed = self.rules.parse_token(token)?;
        self.rules.apply_move(position, &parsed)
    }

    /// Append an applied move to the main line.
    pub fn record(&self, mv: R::Move, tree: &mut R::Tree) -> Result<NodeId, ChessError> {
        self.rules.append_to_tree(tree, mv)
    }

    /// Settle result and opening headers and log how the game ended.
    pub fn conclude(&self, tree: &mut R::Tree) -> Conclusion {
        let conclusion = self.rules.conclude(tree);
        info!(
            moves = self.rules.recorded(tree),
            result = conclusion.result,
            termination = ?conclusion.termination,
            opening = ?conclusion.opening,
            "Game concluded"
        );
        conclusion
    }

    pub fn serialize(&self, tree: &R::Tree) -> String {
        self.rules.serialize_tree(tree)
    }

    /// Feed every token in order. Stops at the first token that cannot be
    /// parsed or played; nothing from that token on is recorded.
    pub fn feed(&self, tokens: &[MoveToken]) -> Result<R::Tree, FeedFailure<R::Tree>> {
        let mut position = self.rules.initial_position();
        let mut tree = self.rules.new_tree(self.headers.clone());

        for (ply, token) in tokens.iter().enumerate() {
            let step = self
                .apply(token, &position)
                .and_then(|(mv, next)| self.record(mv, &mut tree).map(|id| (id, next)));

            match step {
                Ok((id, next)) => {
                    debug!(ply, token = %token, node = id, "Move recorded");
                    position = next;
                }
                Err(error) => {
                    self.conclude(&mut tree);
                    return Err(FeedFailure {
                        ply,
                        token: token.clone(),
                        error,
                        partial: tree,
                    });
                }
            }
        }

        info!(moves = self.rules.recorded(&tree), "All moves recorded");
        self.conclude(&mut tree);
        Ok(tree)
    }

    /// Feed then serialize once.
    pub fn run(&self, tokens: &[MoveToken]) -> Result<String, FeedFailure<R::Tree>> {
        let tree = self.feed(tokens)?;
        Ok(self.serialize(&tree))
    }
}
