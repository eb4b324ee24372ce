//! Game-specific card metadata.
//!
//! The host supplies whatever its card database knows about a card. The
//! engine reads only a handful of keys and ignores the rest:
//!
//! - `name`: display name, also the grouping key for copy limits
//! - `mana_cost`: symbolic cost notation such as `{2}{U}{U}` (MTG)
//! - `type_line`: free-text type line such as `Basic Land — Island` (MTG)
//! - `category`: coarse card category such as `Energy` (Pokemon)
//! - `types` / `primary_type`: primary type such as `Fire` (Pokemon)
//!
//! Every field is optional. A missing field is treated the same as an
//! empty one.

use serde::{Deserialize, Serialize};

/// Normalized view of one card's metadata.
///
/// ## Example
///
/// ```
/// use deck_engine::cards::CardMetadata;
///
/// let bolt = CardMetadata::named("Lightning Bolt")
///     .with_mana_cost("{R}")
///     .with_type_line("Instant");
///
/// assert_eq!(bolt.mana_cost(), "{R}");
/// assert!(!bolt.is_basic_land());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMetadata {
    /// Card name.
    #[serde(default)]
    pub name: Option<String>,

    /// Symbolic cost notation.
    #[serde(default, alias = "manaCostNotation", alias = "manaCost")]
    pub mana_cost: Option<String>,

    /// Free-text type line.
    #[serde(default, alias = "typeLine")]
    pub type_line: Option<String>,

    /// Coarse category (Pokemon, Trainer, Energy, ...).
    #[serde(default)]
    pub category: Option<String>,

    /// Explicit primary type. Takes precedence over `types`.
    #[serde(default, alias = "primaryType")]
    pub primary_type: Option<String>,

    /// Type list as provided by the card database.
    #[serde(default)]
    pub types: Vec<String>,
}

impl CardMetadata {
    /// Metadata with only a name set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the cost notation (builder pattern).
    #[must_use]
    pub fn with_mana_cost(mut self, cost: impl Into<String>) -> Self {
        self.mana_cost = Some(cost.into());
        self
    }

    /// Set the type line (builder pattern).
    #[must_use]
    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = Some(type_line.into());
        self
    }

    /// Set the category (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Append to the type list (builder pattern).
    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.types.push(card_type.into());
        self
    }

    /// Cost notation, or `""` when absent.
    #[must_use]
    pub fn mana_cost(&self) -> &str {
        self.mana_cost.as_deref().unwrap_or("")
    }

    /// Type line, or `""` when absent.
    #[must_use]
    pub fn type_line(&self) -> &str {
        self.type_line.as_deref().unwrap_or("")
    }

    /// Primary type for games without a type line.
    ///
    /// Resolution order: explicit `primary_type`, first of `types`,
    /// `category`. `None` when none of them is present.
    #[must_use]
    pub fn primary_type(&self) -> Option<&str> {
        self.primary_type
            .as_deref()
            .or_else(|| self.types.first().map(String::as_str))
            .or(self.category.as_deref())
    }

    /// Basic land: the type line mentions "basic land" in any case.
    #[must_use]
    pub fn is_basic_land(&self) -> bool {
        self.type_line().to_lowercase().contains("basic land")
    }

    /// Basic energy: the name mentions "basic" (any case) and the category
    /// is exactly `Energy`.
    #[must_use]
    pub fn is_basic_energy(&self) -> bool {
        let basic_name = self
            .name
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains("basic"));
        let energy = self
            .category
            .as_deref()
            .is_some_and(|c| c == "Energy");
        basic_name && energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let card = CardMetadata::named("Counterspell")
            .with_mana_cost("{U}{U}")
            .with_type_line("Instant");

        assert_eq!(card.name.as_deref(), Some("Counterspell"));
        assert_eq!(card.mana_cost(), "{U}{U}");
        assert_eq!(card.type_line(), "Instant");
    }

    #[test]
    fn test_absent_fields_read_empty() {
        let card = CardMetadata::default();
        assert_eq!(card.mana_cost(), "");
        assert_eq!(card.type_line(), "");
        assert_eq!(card.primary_type(), None);
    }

    #[test]
    fn test_basic_land() {
        let island = CardMetadata::named("Island").with_type_line("Basic Land — Island");
        let snow = CardMetadata::named("Snow-Covered Island")
            .with_type_line("Basic Snow Land — Island");
        let dual = CardMetadata::named("Volcanic Island").with_type_line("Land — Mountain Island");

        assert!(island.is_basic_land());
        // "Basic Snow Land" does not contain the literal phrase.
        assert!(!snow.is_basic_land());
        assert!(!dual.is_basic_land());
    }

    #[test]
    fn test_basic_energy() {
        let fire = CardMetadata::named("Basic Fire Energy").with_category("Energy");
        let special = CardMetadata::named("Double Turbo Energy").with_category("Energy");
        let trainer = CardMetadata::named("Basic Training").with_category("Trainer");

        assert!(fire.is_basic_energy());
        assert!(!special.is_basic_energy());
        assert!(!trainer.is_basic_energy());

        let lowercase = CardMetadata::named("Basic Fire Energy").with_category("energy");
        assert!(!lowercase.is_basic_energy());
        assert!(CardMetadata::named("BASIC Water Energy").with_category("Energy").is_basic_energy());
    }

    #[test]
    fn test_primary_type_resolution() {
        let explicit = CardMetadata::named("A")
            .with_type("Water")
            .with_category("Pokemon");
        assert_eq!(explicit.primary_type(), Some("Water"));

        let category_only = CardMetadata::named("B").with_category("Trainer");
        assert_eq!(category_only.primary_type(), Some("Trainer"));

        let mut overridden = explicit.clone();
        overridden.primary_type = Some("Psychic".into());
        assert_eq!(overridden.primary_type(), Some("Psychic"));
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let json = r#"{"name":"Opt","manaCostNotation":"{U}","typeLine":"Instant"}"#;
        let card: CardMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(card.mana_cost(), "{U}");
        assert_eq!(card.type_line(), "Instant");
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let json = r#"{"name":"Pikachu","category":"Pokemon","types":["Lightning"],"hp":"60"}"#;
        let card: CardMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(card.primary_type(), Some("Lightning"));
    }
}
