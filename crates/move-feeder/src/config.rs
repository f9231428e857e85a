//! Feeder configuration from environment variables and CLI flags

use std::env;
use std::path::PathBuf;

use chess_core::GameHeaders;

use crate::error::FeederError;

/// Header values taken from the environment, by PGN tag name.
const HEADER_VARS: [(&str, &str); 6] = [
    ("PGN_EVENT", "Event"),
    ("PGN_SITE", "Site"),
    ("PGN_DATE", "Date"),
    ("PGN_ROUND", "Round"),
    ("PGN_WHITE", "White"),
    ("PGN_BLACK", "Black"),
];

#[derive(Clone, Debug, Default)]
pub struct FeederConfig {
    /// Seven Tag Roster values; Result is decided by the game itself
    pub headers: GameHeaders,

    /// Wrap movetext at this many columns (None = single line)
    pub columns: Option<usize>,

    /// Print the transcript recorded so far when a move is rejected
    pub partial_output: bool,

    /// Opening book JSON to use instead of the embedded one
    pub opening_book: Option<PathBuf>,
}

impl FeederConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, FeederError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FeederError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut headers = GameHeaders::default();
        for (var, tag) in HEADER_VARS {
            if let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) {
                headers.set(tag, value.trim());
            }
        }

        let columns = match lookup("PGN_COLUMNS") {
            Some(v) => parse_columns(&v).ok_or(FeederError::Config("PGN_COLUMNS must be a number"))?,
            None => None,
        };

        let partial_output = match lookup("FEEDER_PARTIAL_OUTPUT") {
            Some(v) => parse_flag(&v)
                .ok_or(FeederError::Config("FEEDER_PARTIAL_OUTPUT must be 1/0 or true/false"))?,
            None => false,
        };

        let opening_book = lookup("FEEDER_OPENING_BOOK")
            .filter(|v| !v.trim().is_empty())
            .map(|v| PathBuf::from(v.trim()));

        Ok(Self {
            headers,
            columns,
            partial_output,
            opening_book,
        })
    }

    /// Apply `--partial` and `--columns N` on top of the environment.
    pub fn with_args(mut self, args: &[String]) -> Result<Self, FeederError> {
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--partial" => {
                    self.partial_output = true;
                    i += 1;
                }
                "--columns" => {
                    let value = args
                        .get(i + 1)
                        .ok_or(FeederError::Config("--columns needs a value"))?;
                    self.columns = parse_columns(value)
                        .ok_or(FeederError::Config("--columns must be a number"))?;
                    i += 2;
                }
                _ => i += 1,
            }
        }
        Ok(self)
    }
}

/// `0` turns wrapping off.
fn parse_columns(value: &str) -> Option<Option<usize>> {
    let n: usize = value.trim().parse().ok()?;
    Some(if n == 0 { None } else { Some(n) })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
