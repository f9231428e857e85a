//! Named opening lines, matched against the moves of a game.
//!
//! Book format: `{"openings": {"<name>": [["e4", "e6", ...], ...]}}` with
//! moves in SAN.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ChessError;

/// Book bundled with the crate.
const EMBEDDED_BOOK: &str = include_str!("../data/opening_data.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningBook {
    openings: BTreeMap<String, Vec<Vec<String>>>,
}

/// The best book line for a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningMatch {
    pub name: String,
    /// Next book move after the moves played, None once the line is exhausted
    pub next: Option<String>,
}

impl OpeningBook {
    pub fn embedded() -> Result<Self, ChessError> {
        Self::from_json(EMBEDDED_BOOK)
    }

    pub fn from_json(json: &str) -> Result<Self, ChessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a book from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChessError> {
        let file = File::open(path)?;
        let book = serde_json::from_reader(BufReader::new(file))?;
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.openings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.openings.is_empty()
    }

    /// Find the line agreeing with `played` on every move both have.
    ///
    /// Among agreeing lines the one covering the most played moves wins;
    /// ties go to the shorter line, then to the name. Check and mate
    /// suffixes are ignored on both sides.
    pub fn lookup<S: AsRef<str>>(&self, played: &[S]) -> Option<OpeningMatch> {
        if played.is_empty() {
            return None;
        }

        let played: Vec<&str> = played.iter().map(|m| strip_suffix(m.as_ref())).collect();
        let mut best: Option<(usize, usize, &str, &[String])> = None;

        for (name, lines) in &self.openings {
            for line in lines {
                let agrees = line
                    .iter()
                    .zip(&played)
                    .all(|(book, mv)| strip_suffix(book) == *mv);
                if !agrees {
                    continue;
                }

                let covered = line.len().min(played.len());
                let better = match best {
                    None => true,
                    Some((best_covered, best_len, _, _)) => {
                        covered > best_covered || (covered == best_covered && line.len() < best_len)
                    }
                };
                if better {
                    best = Some((covered, line.len(), name.as_str(), line.as_slice()));
                }
            }
        }

        best.map(|(_, _, name, line)| OpeningMatch {
            name: name.to_string(),
            next: line.get(played.len()).cloned(),
        })
    }
}

fn strip_suffix(san: &str) -> &str {
    san.trim_end_matches(['+', '#'])
}
