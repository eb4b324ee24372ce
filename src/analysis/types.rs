//! Card type classification.
//!
//! MTG type lines are free text ("Legendary Creature — Elf Druid"), so they
//! are matched case-insensitively against an ordered list of substrings
//! and the first hit wins. Pokemon cards already carry a primary type,
//! which is used as-is.

use serde::{Deserialize, Serialize};

use crate::cards::CardMetadata;
use crate::core::Game;

/// Closed set of MTG card type categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardTypeCategory {
    Creature,
    Instant,
    Sorcery,
    Enchantment,
    Artifact,
    Planeswalker,
    Land,
    Battle,
    Other,
}

/// Match order. "Artifact Creature" is a Creature, "Land Creature" is a
/// Creature, "Enchantment Land" is an Enchantment.
const CLASSIFICATION_ORDER: [(&str, CardTypeCategory); 8] = [
    ("creature", CardTypeCategory::Creature),
    ("instant", CardTypeCategory::Instant),
    ("sorcery", CardTypeCategory::Sorcery),
    ("enchantment", CardTypeCategory::Enchantment),
    ("artifact", CardTypeCategory::Artifact),
    ("planeswalker", CardTypeCategory::Planeswalker),
    ("land", CardTypeCategory::Land),
    ("battle", CardTypeCategory::Battle),
];

impl CardTypeCategory {
    /// Classify a free-text type line. Empty or unmatched lines are `Other`.
    ///
    /// ```
    /// use deck_engine::analysis::CardTypeCategory;
    ///
    /// assert_eq!(CardTypeCategory::classify("Artifact Creature — Golem"), CardTypeCategory::Creature);
    /// assert_eq!(CardTypeCategory::classify("Basic Land — Forest"), CardTypeCategory::Land);
    /// assert_eq!(CardTypeCategory::classify("Conspiracy"), CardTypeCategory::Other);
    /// ```
    #[must_use]
    pub fn classify(type_line: &str) -> Self {
        let lower = type_line.to_lowercase();
        CLASSIFICATION_ORDER
            .iter()
            .find(|(needle, _)| lower.contains(needle))
            .map_or(CardTypeCategory::Other, |&(_, category)| category)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardTypeCategory::Creature => "Creature",
            CardTypeCategory::Instant => "Instant",
            CardTypeCategory::Sorcery => "Sorcery",
            CardTypeCategory::Enchantment => "Enchantment",
            CardTypeCategory::Artifact => "Artifact",
            CardTypeCategory::Planeswalker => "Planeswalker",
            CardTypeCategory::Land => "Land",
            CardTypeCategory::Battle => "Battle",
            CardTypeCategory::Other => "Other",
        }
    }
}

/// Key of the type distribution.
///
/// MTG cards land in a fixed category; Pokemon cards keep whatever primary
/// type string the card data provides.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeBucket {
    Category(CardTypeCategory),
    Named(String),
}

/// Literal used for Pokemon cards with no type information.
pub const UNKNOWN_TYPE: &str = "Unknown";

impl TypeBucket {
    /// Bucket a card for the given game.
    #[must_use]
    pub fn for_card(game: Game, metadata: &CardMetadata) -> Self {
        match game {
            Game::Mtg => TypeBucket::Category(CardTypeCategory::classify(metadata.type_line())),
            Game::Pokemon => {
                TypeBucket::Named(metadata.primary_type().unwrap_or(UNKNOWN_TYPE).to_string())
            }
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            TypeBucket::Category(category) => category.name(),
            TypeBucket::Named(name) => name,
        }
    }

    /// Is this the MTG Land category?
    #[must_use]
    pub fn is_land(&self) -> bool {
        matches!(self, TypeBucket::Category(CardTypeCategory::Land))
    }
}

impl std::fmt::Display for TypeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
