//! Supported game identifiers.
//!
//! The host passes a free-form game id string. Only two are recognized;
//! anything else maps to `None` and downstream components report
//! "not applicable" / "not evaluated" rather than failing.

use serde::{Deserialize, Serialize};

/// A game the engine knows how to analyze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    /// Magic: The Gathering. Symbolic mana costs and free-text type lines.
    Mtg,
    /// Pokemon TCG. No mana costs; cards carry a category and primary type.
    Pokemon,
}

impl Game {
    /// All recognized games.
    pub const ALL: [Game; 2] = [Game::Mtg, Game::Pokemon];

    /// Resolve a host game id. Unrecognized ids yield `None`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "mtg" => Some(Game::Mtg),
            "pokemon" => Some(Game::Pokemon),
            _ => None,
        }
    }

    /// The host-facing id string.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Game::Mtg => "mtg",
            Game::Pokemon => "pokemon",
        }
    }

    /// Whether cards of this game carry a symbolic cost that can be
    /// tokenized into a converted cost and color pips.
    #[must_use]
    pub const fn has_symbolic_cost(self) -> bool {
        matches!(self, Game::Mtg)
    }

    /// Word used when reporting a deck-size deficit.
    #[must_use]
    pub const fn minimum_label(self) -> &'static str {
        match self {
            Game::Mtg => "minimum",
            Game::Pokemon => "required",
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(Game::from_id("mtg"), Some(Game::Mtg));
        assert_eq!(Game::from_id("pokemon"), Some(Game::Pokemon));
        assert_eq!(Game::from_id("yugioh"), None);
        assert_eq!(Game::from_id("MTG"), None);
    }

    #[test]
    fn test_id_round_trips() {
        for game in Game::ALL {
            assert_eq!(Game::from_id(game.id()), Some(game));
            assert_eq!(format!("{}", game), game.id());
        }
    }

    #[test]
    fn test_symbolic_cost() {
        assert!(Game::Mtg.has_symbolic_cost());
        assert!(!Game::Pokemon.has_symbolic_cost());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Game::Pokemon).unwrap();
        assert_eq!(json, "\"pokemon\"");
    }
}
