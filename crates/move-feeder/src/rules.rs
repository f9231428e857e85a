//! The chess-rules seam used by the feeder.

use chess_core::pgn::write_transcript;
use chess_core::{
    ChessError, GameHeaders, GameTree, MoveToken, NodeId, OpeningBook, ParsedMove, Termination,
};
use shakmaty::{Chess, Move, Position};

/// Everything the feeder needs from a chess library: parse a token, play it,
/// append it to the game record, and render the record as text.
pub trait ChessRules {
    type Position: Clone;
    type Parsed;
    type Move: Clone;
    type Tree;

    /// Start position of a fresh game.
    fn initial_position(&self) -> Self::Position;

    /// Empty game record carrying `headers`.
    fn new_tree(&self, headers: GameHeaders) -> Self::Tree;

    /// Fails with `ChessError::MalformedToken`.
    fn parse_token(&self, token: &MoveToken) -> Result<Self::Parsed, ChessError>;

    /// Fails with `ChessError::IllegalMove`.
    fn apply_move(
        &self,
        position: &Self::Position,
        parsed: &Self::Parsed,
    ) -> Result<(Self::Move, Self::Position), ChessError>;

    /// Append as the next main-line node.
    fn append_to_tree(&self, tree: &mut Self::Tree, mv: Self::Move) -> Result<NodeId, ChessError>;

    /// Number of main-line moves recorded so far.
    fn recorded(&self, tree: &Self::Tree) -> usize;

    /// Settle the final headers once feeding stops.
    fn conclude(&self, tree: &mut Self::Tree) -> Conclusion;

    fn serialize_tree(&self, tree: &Self::Tree) -> String;
}

/// How a fed game ended, as written into its headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conclusion {
    pub result: &'static str,
    pub termination: Option<Termination>,
    pub opening: Option<String>,
}

/// Rules backed by shakmaty, transcripts via `chess_core::pgn`.
#[derive(Debug, Clone, Default)]
pub struct ShakmatyRules {
    columns: Option<usize>,
    opening_book: Option<OpeningBook>,
}

impl ShakmatyRules {
    pub fn new(columns: Option<usize>) -> Self {
        Self {
            columns,
            opening_book: None,
        }
    }

    /// Name the opening of every concluded game from `book`.
    pub fn with_opening_book(mut self, book: OpeningBook) -> Self {
        self.opening_book = Some(book);
        self
    }
}

impl ChessRules for ShakmatyRules {
    type Position = Chess;
    type Parsed = ParsedMove;
    type Move = Move;
    type Tree = GameTree;

    fn initial_position(&self) -> Chess {
        Chess::default()
    }

    fn new_tree(&self, headers: GameHeaders) -> GameTree {
        GameTree::new(headers)
    }

    fn parse_token(&self, token: &MoveToken) -> Result<ParsedMove, ChessError> {
        token.parse()
    }

    fn apply_move(&self, position: &Chess, parsed: &ParsedMove) -> Result<(Move, Chess), ChessError> {
        let mv = parsed.to_move(position)?;
        let mut next = position.clone();
        next.play_unchecked(mv.clone());
        Ok((mv, next))
    }

    fn append_to_tree(&self, tree: &mut GameTree, mv: Move) -> Result<NodeId, ChessError> {
        let end = tree.end();
        let id = tree.add_main_variation(end, mv)?;
        let result = tree.mainline_result();
        tree.headers_mut().result = result.to_string();
        Ok(id)
    }

    fn recorded(&self, tree: &GameTree) -> usize {
        tree.mainline_len()
    }

    fn conclude(&self, tree: &mut GameTree) -> Conclusion {
        let (result, termination) = tree.mainline_outcome();
        tree.headers_mut().result = result.to_string();

        let opening = self
            .opening_book
            .as_ref()
            .and_then(|book| book.lookup(&tree.mainline_sans()))
            .map(|found| found.name);
        if let Some(name) = &opening {
            tree.headers_mut().opening = Some(name.clone());
        }

        Conclusion {
            result,
            termination,
            opening,
        }
    }

    fn serialize_tree(&self, tree: &GameTree) -> String {
        write_transcript(tree, self.columns)
    }
}
