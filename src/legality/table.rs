//! Format rule table: static, declarative deck construction rules.
//!
//! Rules live in TOML, one table per (game, format):
//!
//! ```toml
//! [mtg.formats.Commander]
//! min_cards = 100
//! max_cards = 100
//! max_copies = 1
//! unlimited_basic_land = true
//! ```
//!
//! A default table ships embedded in the crate (`FormatRuleTable::builtin`).
//! Hosts can load their own with `from_toml_str` / `from_path` to add
//! formats without touching the validator.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardMetadata;
use crate::core::Game;
use crate::error::FormatTableError;

const BUILTIN_FORMATS: &str = include_str!("../../resources/formats.toml");

/// Deck construction limits for one format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatRule {
    /// Smallest legal main deck.
    pub min_cards: u32,

    /// Largest legal main deck. `None` for unbounded.
    #[serde(default)]
    pub max_cards: Option<u32>,

    /// Copies allowed per card name.
    pub max_copies: u32,

    /// Basic lands are exempt from `max_copies`.
    #[serde(default)]
    pub unlimited_basic_land: bool,

    /// Basic energy is exempt from `max_copies`.
    #[serde(default)]
    pub unlimited_basic_energy: bool,
}

impl FormatRule {
    /// Create a rule with no upper size bound and no exemptions.
    #[must_use]
    pub const fn new(min_cards: u32, max_copies: u32) -> Self {
        Self {
            min_cards,
            max_cards: None,
            max_copies,
            unlimited_basic_land: false,
            unlimited_basic_energy: false,
        }
    }

    /// Set the maximum deck size.
    #[must_use]
    pub const fn with_max_cards(mut self, max: u32) -> Self {
        self.max_cards = Some(max);
        self
    }

    /// Exempt basic lands from the copy limit.
    #[must_use]
    pub const fn with_unlimited_basic_land(mut self) -> Self {
        self.unlimited_basic_land = true;
        self
    }

    /// Exempt basic energy from the copy limit.
    #[must_use]
    pub const fn with_unlimited_basic_energy(mut self) -> Self {
        self.unlimited_basic_energy = true;
        self
    }

    /// Does this card ignore the copy limit under this rule?
    #[must_use]
    pub fn exempts(&self, card: &CardMetadata) -> bool {
        (self.unlimited_basic_land && card.is_basic_land())
            || (self.unlimited_basic_energy && card.is_basic_energy())
    }

    fn check(&self) -> Result<(), String> {
        if self.min_cards == 0 {
            return Err("min_cards must be at least 1".into());
        }
        if self.max_copies == 0 {
            return Err("max_copies must be at least 1".into());
        }
        if let Some(max) = self.max_cards {
            if max < self.min_cards {
                return Err(format!("max_cards {} is below min_cards {}", max, self.min_cards));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct GameSection {
    #[serde(default)]
    formats: BTreeMap<String, FormatRule>,
}

/// Lookup of `FormatRule` by game and format name.
///
/// ## Example
///
/// ```
/// use deck_engine::core::Game;
/// use deck_engine::legality::FormatRuleTable;
///
/// let table = FormatRuleTable::builtin();
/// let commander = table.get(Game::Mtg, "Commander").unwrap();
///
/// assert_eq!(commander.max_copies, 1);
/// assert!(table.get(Game::Mtg, "Brawl").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormatRuleTable {
    rules: FxHashMap<Game, BTreeMap<String, FormatRule>>,
}

impl FormatRuleTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The table bundled with the crate, parsed once.
    pub fn builtin() -> &'static FormatRuleTable {
        static BUILTIN: OnceLock<FormatRuleTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            FormatRuleTable::from_toml_str(BUILTIN_FORMATS).expect("bundled format table is valid")
        })
    }

    /// Parse a table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, FormatTableError> {
        let raw: BTreeMap<String, GameSection> = toml::from_str(content)?;
        let mut table = Self::new();

        for (game_id, section) in raw {
            let game = Game::from_id(&game_id).ok_or(FormatTableError::UnknownGame(game_id))?;
            for (format, rule) in section.formats {
                table.insert(game, format, rule)?;
            }
        }

        tracing::info!(formats = table.len(), "loaded format rules");
        Ok(table)
    }

    /// Load a table from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, FormatTableError> {
        let content = std::fs::read_to_string(path).map_err(|source| FormatTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "reading format rules");
        Self::from_toml_str(&content)
    }

    /// Add or replace a rule. Returns the rule it replaced, if any.
    pub fn insert(
        &mut self,
        game: Game,
        format: impl Into<String>,
        rule: FormatRule,
    ) -> Result<Option<FormatRule>, FormatTableError> {
        let format = format.into();
        rule.check().map_err(|reason| FormatTableError::InvalidRule {
            game: game.id().to_string(),
            format: format.clone(),
            reason,
        })?;
        Ok(self.rules.entry(game).or_default().insert(format, rule))
    }

    /// Look up the rule for a format.
    #[must_use]
    pub fn get(&self, game: Game, format: &str) -> Option<&FormatRule> {
        self.rules.get(&game)?.get(format)
    }

    /// Format names for a game, sorted.
    pub fn formats(&self, game: Game) -> impl Iterator<Item = &str> + '_ {
        self.rules
            .get(&game)
            .into_iter()
            .flat_map(|formats| formats.keys().map(String::as_str))
    }

    /// Total number of rules across all games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.values().map(BTreeMap::len).sum()
    }

    /// Check if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
