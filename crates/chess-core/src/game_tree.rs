//! Game tree: one node per ply, first child is the main line.

use std::fmt;

use shakmaty::{
    san::{San, SanPlus, Suffix},
    CastlingMode, Chess, Color, Move, Position,
};

use crate::error::ChessError;
use crate::game_data::GameHeaders;

/// Index of a node in the tree arena.
pub type NodeId = usize;

pub struct TreeNode {
    mv: Option<Move>,
    san: Option<SanPlus>,
    position: Chess, // position AFTER this node's move
    ply: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl TreeNode {
    fn root() -> Self {
        Self {
            mv: None,
            san: None,
            position: Chess::default(),
            ply: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    /// None for the root.
    pub fn mv(&self) -> Option<&Move> {
        self.mv.as_ref()
    }

    pub fn san(&self) -> Option<&SanPlus> {
        self.san.as_ref()
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Half-moves from the start position; 0 for the root.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Full-move number of this node's move ("1" for both 1. e4 and 1... e5).
    pub fn move_number(&self) -> usize {
        (self.ply + 1) / 2
    }

    /// Color that played this node's move.
    pub fn mover(&self) -> Color {
        if self.ply % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Why a main line ended before running out of moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::InsufficientMaterial => "insufficient material",
        })
    }
}

pub struct GameTree {
    headers: GameHeaders,
    nodes: Vec<TreeNode>,
    end: NodeId, // last main-line node
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new(GameHeaders::default())
    }
}

impl GameTree {
    pub fn new(headers: GameHeaders) -> Self {
        Self {
            headers,
            nodes: vec![TreeNode::root()],
            end: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn headers(&self) -> &GameHeaders {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut GameHeaders {
        &mut self.headers
    }

    pub fn node(&self, id: NodeId) -> Result<&TreeNode, ChessError> {
        self.nodes.get(id).ok_or(ChessError::UnknownNode(id))
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, ChessError> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], ChessError> {
        Ok(&self.node(id)?.children)
    }

    /// Position reached after the node's move.
    pub fn position_at(&self, id: NodeId) -> Result<Chess, ChessError> {
        Ok(self.node(id)?.position.clone())
    }

    /// Add `mv` as the first child of `parent`, pushing any existing
    /// continuation down to a variation. The position comes from `parent`.
    pub fn add_main_variation(&mut self, parent: NodeId, mv: Move) -> Result<NodeId, ChessError> {
        let id = self.push_child(parent, mv)?;
        let children = &mut self.nodes[parent].children;
        children.pop();
        children.insert(0, id);

        if parent == self.end || self.is_mainline(parent) {
            self.end = id;
        }
        Ok(id)
    }

    /// Add `mv` as the last child of `parent`.
    pub fn add_variation(&mut self, parent: NodeId, mv: Move) -> Result<NodeId, ChessError> {
        let id = self.push_child(parent, mv)?;
        // Only child of the old end extends the main line
        if parent == self.end && self.nodes[parent].children.len() == 1 {
            self.end = id;
        }
        Ok(id)
    }

    fn push_child(&mut self, parent: NodeId, mv: Move) -> Result<NodeId, ChessError> {
        let before = self.node(parent)?.position.clone();
        let ply = self.nodes[parent].ply + 1;

        let san = San::from_move(&before, mv.clone());
        let after = before.play(mv.clone()).map_err(|_| {
            ChessError::illegal(&mv.to_uci(CastlingMode::Standard).to_string(), "not legal in parent position")
        })?;
        let suffix = Suffix::from_position(&after);

        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            mv: Some(mv),
            san: Some(SanPlus { san, suffix }),
            position: after,
            ply,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    /// Whether every step from the root down to `id` takes the first child.
    fn is_mainline(&self, id: NodeId) -> bool {
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            if self.nodes[parent].children.first() != Some(&current) {
                return false;
            }
            current = parent;
        }
        true
    }

    /// Node ids along the main line, excluding the root.
    pub fn mainline_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.mainline_len());
        let mut current = self.root();
        while let Some(&next) = self.nodes[current].children.first() {
            ids.push(next);
            current = next;
        }
        ids
    }

    /// Main-line nodes, excluding the root.
    pub fn mainline(&self) -> impl Iterator<Item = &TreeNode> {
        self.mainline_ids().into_iter().map(move |id| &self.nodes[id])
    }

    /// Main-line moves in play order.
    pub fn mainline_moves(&self) -> Vec<Move> {
        self.mainline().filter_map(|n| n.mv.clone()).collect()
    }

    /// Main-line moves rendered as SAN with check/mate suffix.
    pub fn mainline_sans(&self) -> Vec<String> {
        self.mainline()
            .filter_map(|n| n.san.as_ref().map(|s| s.to_string()))
            .collect()
    }

    /// Last node of the main line (the root for an empty game).
    pub fn end(&self) -> NodeId {
        self.end
    }

    pub fn mainline_len(&self) -> usize {
        self.nodes[self.end].ply
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[self.root()].children.is_empty()
    }

    /// Result token and termination implied by the final main-line position.
    pub fn mainline_outcome(&self) -> (&'static str, Option<Termination>) {
        let pos = &self.nodes[self.end].position;
        if pos.is_checkmate() {
            let result = match pos.turn() {
                Color::White => "0-1",
                Color::Black => "1-0",
            };
            (result, Some(Termination::Checkmate))
        } else if pos.is_stalemate() {
            ("1/2-1/2", Some(Termination::Stalemate))
        } else if pos.is_insufficient_material() {
            ("1/2-1/2", Some(Termination::InsufficientMaterial))
        } else {
            ("*", None)
        }
    }

    pub fn mainline_result(&self) -> &'static str {
        self.mainline_outcome().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MoveToken;

    fn resolve(tree: &GameTree, at: NodeId, token: &str) -> Move {
        let pos = tree.position_at(at).unwrap();
        MoveToken::new(token).parse().unwrap().to_move(&pos).unwrap()
    }

    fn play_line(tree: &mut GameTree, tokens: &[&str]) {
        for token in tokens {
            let end = tree.end();
            let mv = resolve(tree, end, token);
            tree.add_main_variation(end, mv).unwrap();
        }
    }

    #[test]
    fn test_empty_tree() {
        let tree = GameTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.end(), tree.root());
        assert_eq!(tree.mainline_len(), 0);
        assert_eq!(tree.mainline_result(), "*");
    }

    #[test]
    fn test_mainline_append() {
        let mut tree = GameTree::default();
        play_line(&mut tree, &["e4", "e7e5", "Nf3"]);

        assert_eq!(tree.mainline_len(), 3);
        assert_eq!(tree.mainline_sans(), vec!["e4", "e5", "Nf3"]);

        let last = tree.node(tree.end()).unwrap();
        assert_eq!(last.ply(), 3);
        assert_eq!(last.move_number(), 2);
        assert_eq!(last.mover(), Color::White);
    }

    #[test]
    fn test_main_variation_promotes_new_move() {
        let mut tree = GameTree::default();
        play_line(&mut tree, &["e4"]);
        let e4 = tree.end();

        let d4 = resolve(&tree, tree.root(), "d4");
        let d4_id = tree.add_main_variation(tree.root(), d4).unwrap();

        assert_eq!(tree.children(tree.root()).unwrap(), &[d4_id, e4]);
        assert_eq!(tree.mainline_sans(), vec!["d4"]);
    }

    #[test]
    fn test_variation_keeps_mainline() {
        let mut tree = GameTree::default();
        play_line(&mut tree, &["e4"]);
        let d4 = resolve(&tree, tree.root(), "d4");
        let var = tree.add_variation(tree.root(), d4).unwrap();

        assert_eq!(tree.mainline_sans(), vec!["e4"]);
        assert_eq!(tree.parent(var).unwrap(), Some(tree.root()));
    }

    #[test]
    fn test_check_and_mate_suffixes() {
        let mut tree = GameTree::default();
        play_line(&mut tree, &["f3", "e5", "g4", "Qh4"]);

        assert_eq!(tree.mainline_sans().last().unwrap(), "Qh4#");
        assert_eq!(tree.mainline_result(), "0-1");
    }

    #[test]
    fn test_end_follows_mainline_changes() {
        let mut tree = GameTree::default();
        play_line(&mut tree, &["e4", "e5", "Nf3"]);
        let e4 = tree.mainline_ids()[0];

        // A side line off the middle of the game leaves the end alone
        let nc6 = resolve(&tree, e4, "Nc6");
        let side = tree.add_variation(e4, nc6).unwrap();
        assert_eq!(tree.mainline_len(), 3);
        assert_eq!(tree.end(), tree.mainline_ids()[2]);

        // Extending the side line does not touch the main line either
        let bb5 = resolve(&tree, side, "Bb5");
        tree.add_main_variation(side, bb5).unwrap();
        assert_eq!(tree.mainline_sans(), vec!["e4", "e5", "Nf3"]);

        // Promoting a new reply to e4 cuts the main line back to two moves
        let c5 = resolve(&tree, e4, "c5");
        let c5_id = tree.add_main_variation(e4, c5).unwrap();
        assert_eq!(tree.end(), c5_id);
        assert_eq!(tree.mainline_len(), 2);
        assert_eq!(tree.mainline_sans(), vec!["e4", "c5"]);

        // First child of the end extends the main line
        let nf3 = resolve(&tree, c5_id, "Nf3");
        let nf3_id = tree.add_variation(c5_id, nf3).unwrap();
        assert_eq!(tree.end(), nf3_id);
        assert_eq!(tree.mainline_len(), tree.mainline_ids().len());
    }

    #[test]
    fn test_stalemate_is_a_draw() {
        let mut tree = GameTree::default();
        play_line(
            &mut tree,
            &[
                "e3", "a5", "Qh5", "Ra6", "Qxa5", "h5", "h4", "Rah6", "Qxc7", "f6", "Qxd7+", "Kf7",
                "Qxb7", "Qd3", "Qxb8", "Qh7", "Qxc8", "Kg6", "Qe6",
            ],
        );

        assert_eq!(tree.mainline_len(), 19);
        assert_eq!(tree.mainline_result(), "1/2-1/2");
        assert_eq!(tree.mainline_outcome().1, Some(Termination::Stalemate));
    }

    #[test]
    fn test_mate_termination() {
        let mut tree = GameTree::default();
        play_line(&mut tree, &["f3", "e5", "g4", "Qh4"]);
        assert_eq!(tree.mainline_outcome(), ("0-1", Some(Termination::Checkmate)));
        assert_eq!(Termination::Checkmate.to_string(), "checkmate");
    }

    #[test]
    fn test_illegal_move_rejected_by_tree() {
        let mut tree = GameTree::default();
        play_line(&mut tree, &["e4"]);
        // Legal for white at the root, not for black after 1. e4
        let mv = resolve(&tree, tree.root(), "d4");
        let end = tree.end();
        let err = tree.add_main_variation(end, mv).unwrap_err();
        assert!(matches!(err, ChessError::IllegalMove { .. }));
        assert_eq!(tree.mainline_len(), 1);
    }

    #[test]
    fn test_unknown_node() {
        let tree = GameTree::default();
        assert!(matches!(tree.node(42), Err(ChessError::UnknownNode(42))));
    }
}
