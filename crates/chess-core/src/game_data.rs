use shakmaty::Move;

/// The Seven Tag Roster, in export order.
pub const ROSTER: [&str; 7] = ["Event", "Site", "Date", "Round", "White", "Black", "Result"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHeaders {
    pub event: String,
    pub site: String,
    pub date: String,  // "YYYY.MM.DD", unknown parts as "??"
    pub round: String,
    pub white: String,
    pub black: String,
    pub result: String, // "1-0", "0-1", "1/2-1/2", "*"
    pub opening: Option<String>,
}

impl Default for GameHeaders {
    fn default() -> Self {
        Self {
            event: "?".to_string(),
            site: "?".to_string(),
            date: "????.??.??".to_string(),
            round: "?".to_string(),
            white: "?".to_string(),
            black: "?".to_string(),
            result: "*".to_string(),
            opening: None,
        }
    }
}

impl GameHeaders {
    /// Look up a tag by its PGN name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "Opening" => return self.opening.as_deref(),
            "Event" => &self.event,
            "Site" => &self.site,
            "Date" => &self.date,
            "Round" => &self.round,
            "White" => &self.white,
            "Black" => &self.black,
            "Result" => &self.result,
            _ => return None,
        };
        Some(value)
    }

    /// Set a tag by its PGN name. Unknown names are ignored and reported
    /// back as `false`.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "Opening" => {
                self.opening = Some(value.to_string());
                return true;
            }
            "Event" => &mut self.event,
            "Site" => &mut self.site,
            "Date" => &mut self.date,
            "Round" => &mut self.round,
            "White" => &mut self.white,
            "Black" => &mut self.black,
            "Result" => &mut self.result,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    /// (name, value) pairs in roster order, then Opening when known.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        ROSTER
            .iter()
            .chain(std::iter::once(&"Opening"))
            .filter_map(|name| self.get(name).map(|value| (*name, value)))
            .collect()
    }
}

/// A game read back from PGN text.
#[derive(Debug, Clone)]
pub struct ParsedGame {
    pub headers: GameHeaders,
    pub moves: Vec<Move>,
    pub sans: Vec<String>, // SAN with check/mate suffix, main line only
}
