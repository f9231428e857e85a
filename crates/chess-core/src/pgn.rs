//! PGN transcript writing and re-reading.

use std::ops::ControlFlow;

use pgn_reader::{RawTag, Reader, SanPlus, Skip, Visitor};
use regex::Regex;
use shakmaty::{Chess, Color, Move, Position};

use crate::error::ChessError;
use crate::game_data::{GameHeaders, ParsedGame};
use crate::game_tree::{GameTree, NodeId};

/// Render the whole tree as PGN. `columns` wraps movetext on token
/// boundaries; None writes it on one line.
pub fn write_transcript(tree: &GameTree, columns: Option<usize>) -> String {
    let mut out = String::new();
    for (name, value) in tree.headers().pairs() {
        out.push_str(&format!("[{} \"{}\"]\n", name, escape_tag_value(value)));
    }
    out.push('\n');

    let mut tokens = Vec::new();
    write_line(tree, tree.root(), false, &mut tokens);
    tokens.push(tree.headers().result.clone());

    out.push_str(&wrap_tokens(&tokens, columns));
    out
}

/// Walk the children of `parent`: main move first, then each sibling as a
/// parenthesized variation, then continue down the main line.
fn write_line(tree: &GameTree, parent: NodeId, force_number: bool, tokens: &mut Vec<String>) {
    let Ok(children) = tree.children(parent) else {
        return;
    };
    let Some((&main, variations)) = children.split_first() else {
        return;
    };

    push_move(tree, main, force_number, tokens);

    for &var in variations {
        tokens.push("(".to_string());
        push_move(tree, var, true, tokens);
        write_line(tree, var, false, tokens);
        tokens.push(")".to_string());
    }

    write_line(tree, main, !variations.is_empty(), tokens);
}

fn push_move(tree: &GameTree, id: NodeId, force_number: bool, tokens: &mut Vec<String>) {
    let Ok(node) = tree.node(id) else {
        return;
    };
    let Some(san) = node.san() else {
        return;
    };

    match node.mover() {
        Color::White => tokens.push(format!("{}.", node.move_number())),
        Color::Black if force_number => tokens.push(format!("{}...", node.move_number())),
        Color::Black => {}
    }
    tokens.push(san.to_string());
}

fn wrap_tokens(tokens: &[String], columns: Option<usize>) -> String {
    let Some(columns) = columns.filter(|c| *c > 0) else {
        return tokens.join(" ");
    };

    let mut out = String::new();
    let mut line_len = 0;
    for token in tokens {
        if line_len == 0 {
            out.push_str(token);
            line_len = token.len();
        } else if line_len + 1 + token.len() <= columns {
            out.push(' ');
            out.push_str(token);
            line_len += 1 + token.len();
        } else {
            out.push('\n');
            out.push_str(token);
            line_len = token.len();
        }
    }
    out
}

fn escape_tag_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Movetext state while re-reading a transcript.
struct ReadState {
    headers: GameHeaders,
    pos: Chess,
    moves: Vec<Move>,
    sans: Vec<String>,
}

/// Visitor that replays the main line of a single game.
struct TranscriptReader;

impl Visitor for TranscriptReader {
    type Tags = GameHeaders;
    type Movetext = ReadState;
    type Output = Result<ParsedGame, ChessError>;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, GameHeaders> {
        ControlFlow::Continue(GameHeaders::default())
    }

    fn tag(
        &mut self,
        tags: &mut GameHeaders,
        name: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        let name = String::from_utf8_lossy(name);
        tags.set(&name, &value.decode_utf8_lossy());
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, tags: GameHeaders) -> ControlFlow<Self::Output, ReadState> {
        ControlFlow::Continue(ReadState {
            headers: tags,
            pos: Chess::default(),
            moves: Vec::new(),
            sans: Vec::new(),
        })
    }

    fn san(&mut self, state: &mut ReadState, san_plus: SanPlus) -> ControlFlow<Self::Output> {
        let text = san_plus.to_string();
        let mv = match san_plus.san.to_move(&state.pos) {
            Ok(mv) => mv,
            Err(e) => return ControlFlow::Break(Err(ChessError::illegal(&text, e))),
        };

        state.pos.play_unchecked(mv.clone());
        state.moves.push(mv);
        state.sans.push(text);
        ControlFlow::Continue(())
    }

    /// Side lines are never replayed on the main-line board.
    fn begin_variation(&mut self, _state: &mut ReadState) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn end_game(&mut self, state: ReadState) -> Self::Output {
        Ok(ParsedGame {
            headers: state.headers,
            moves: state.moves,
            sans: state.sans,
        })
    }
}

/// Parse the first game of a transcript, main line only.
pub fn read_transcript(pgn: &str) -> Result<ParsedGame, ChessError> {
    let mut reader = Reader::new(pgn.as_bytes());
    match reader.read_game(&mut TranscriptReader)? {
        Some(result) => result,
        None => Err(ChessError::Pgn("no game found".to_string())),
    }
}

/// Extract a string value from a PGN header (e.g. White, Result).
pub fn extract_header(pgn: &str, header_name: &str) -> Option<String> {
    let pattern = format!(r#"\[{}\s+"((?:[^"\\]|\\.)*)"\]"#, regex::escape(header_name));
    let re = Regex::new(&pattern).ok()?;
    let value = re.captures(pgn)?.get(1)?.as_str();
    let value = value.replace("\\\"", "\"").replace("\\\\", "\\");
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MoveToken;

    fn tree_from(tokens: &[&str]) -> GameTree {
        let mut tree = GameTree::default();
        for token in tokens {
            let end = tree.end();
            let pos = tree.position_at(end).unwrap();
            let mv = MoveToken::new(token).parse().unwrap().to_move(&pos).unwrap();
            tree.add_main_variation(end, mv).unwrap();
        }
        tree
    }

    #[test]
    fn test_empty_game_is_header_only() {
        let pgn = write_transcript(&GameTree::default(), None);
        assert_eq!(
            pgn,
            "[Event \"?\"]\n[Site \"?\"]\n[Date \"????.??.??\"]\n[Round \"?\"]\n\
             [White \"?\"]\n[Black \"?\"]\n[Result \"*\"]\n\n*"
        );
    }

    #[test]
    fn test_movetext_numbering() {
        let pgn = write_transcript(&tree_from(&["e4", "e5", "Nf3"]), None);
        assert!(pgn.ends_with("\n\n1. e4 e5 2. Nf3 *"), "got: {pgn}");
    }

    #[test]
    fn test_variation_formatting() {
        let mut tree = tree_from(&["e4", "e5"]);
        let root = tree.root();
        let d4 = MoveToken::new("d4")
            .parse()
            .unwrap()
            .to_move(&Chess::default())
            .unwrap();
        let var = tree.add_variation(root, d4).unwrap();
        let pos = tree.position_at(var).unwrap();
        let d5 = MoveToken::new("d5").parse().unwrap().to_move(&pos).unwrap();
        tree.add_main_variation(var, d5).unwrap();

        let pgn = write_transcript(&tree, None);
        assert!(pgn.ends_with("1. e4 ( 1. d4 d5 ) 1... e5 *"), "got: {pgn}");
    }

    #[test]
    fn test_read_transcript_skips_variations() {
        let mut tree = tree_from(&["e4", "e5"]);
        let root = tree.root();
        let d4 = MoveToken::new("d4")
            .parse()
            .unwrap()
            .to_move(&Chess::default())
            .unwrap();
        let var = tree.add_variation(root, d4).unwrap();
        let pos = tree.position_at(var).unwrap();
        let d5 = MoveToken::new("d5").parse().unwrap().to_move(&pos).unwrap();
        tree.add_main_variation(var, d5).unwrap();

        let pgn = write_transcript(&tree, None);
        assert!(pgn.ends_with("1. e4 ( 1. d4 d5 ) 1... e5 *"), "got: {pgn}");

        let parsed = read_transcript(&pgn).unwrap();
        assert_eq!(parsed.sans, vec!["e4", "e5"]);
        assert_eq!(parsed.moves, tree.mainline_moves());
    }

    #[test]
    fn test_opening_tag_follows_roster() {
        let mut tree = tree_from(&["e4", "c5"]);
        tree.headers_mut().opening = Some("Sicilian Defense".to_string());
        let pgn = write_transcript(&tree, None);

        assert!(pgn.contains("[Result \"*\"]\n[Opening \"Sicilian Defense\"]\n\n1. e4 c5 *"), "got: {pgn}");
        let parsed = read_transcript(&pgn).unwrap();
        assert_eq!(parsed.headers.opening.as_deref(), Some("Sicilian Defense"));
    }

    #[test]
    fn test_wrapping() {
        let tree = tree_from(&["e4", "e5", "Nf3", "Nc6", "Bb5", "a6"]);
        let pgn = write_transcript(&tree, Some(12));
        let movetext = pgn.split("\n\n").nth(1).unwrap();
        assert!(movetext.lines().all(|l| l.len() <= 12), "got: {movetext}");
        assert_eq!(movetext.split_whitespace().count(), 10);
    }

    #[test]
    fn test_header_escaping() {
        let mut tree = GameTree::default();
        tree.headers_mut().white = r#"Quote "Q" \ Back"#.to_string();
        let pgn = write_transcript(&tree, None);
        assert!(pgn.contains(r#"[White "Quote \"Q\" \\ Back"]"#), "got: {pgn}");
        assert_eq!(extract_header(&pgn, "White").as_deref(), Some(r#"Quote "Q" \ Back"#));
    }

    #[test]
    fn test_read_transcript_roundtrip() {
        let tree = tree_from(&["e4", "e6", "d4", "d5", "Nc3", "Bb4", "Ne2", "dxe4"]);
        let pgn = write_transcript(&tree, Some(80));
        let parsed = read_transcript(&pgn).unwrap();

        assert_eq!(parsed.sans, tree.mainline_sans());
        assert_eq!(parsed.moves, tree.mainline_moves());
        assert_eq!(parsed.headers, *tree.headers());
    }

    #[test]
    fn test_read_transcript_rejects_illegal() {
        let pgn = "[Event \"?\"]\n\n1. e4 e5 2. Ke3 *";
        let err = read_transcript(pgn).unwrap_err();
        assert!(matches!(err, ChessError::IllegalMove { .. }));
    }

    #[test]
    fn test_extract_header() {
        let pgn = "[White \"Player1\"]\n[Result \"1-0\"]\n\n1. e4 1-0";
        assert_eq!(extract_header(pgn, "White").as_deref(), Some("Player1"));
        assert_eq!(extract_header(pgn, "Result").as_deref(), Some("1-0"));
        assert_eq!(extract_header(pgn, "Missing"), None);
    }
}
