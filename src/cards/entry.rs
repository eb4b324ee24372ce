//! Deck entries - one row of a deck list.
//!
//! A `DeckEntry` pairs card metadata with a copy count and a deck
//! category. The same card may appear in several entries (main deck and
//! sideboard, or split across acquisition batches); `EntryId` keeps each
//! row distinct while `CardId` and the card name tie them together.

use serde::{Deserialize, Deserializer, Serialize};

use super::metadata::CardMetadata;

/// Opaque identifier of one deck entry, unique within a deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    /// Create a new entry ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the underlying card. Not unique across entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which part of the deck an entry belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckCategory {
    /// Main deck. Legality, statistics and playtesting consider only these.
    #[default]
    Main,
    /// Sideboard. Counted in totals only.
    Sideboard,
}

/// One row of a deck list.
///
/// `quantity` must be at least 1; hosts filter out empty rows before
/// handing a deck to the engine.
///
/// ## Example
///
/// ```
/// use deck_engine::cards::{CardMetadata, DeckCategory, DeckEntry};
///
/// let entry = DeckEntry::new("e1", "c1", CardMetadata::named("Island"), 17);
/// assert_eq!(entry.category, DeckCategory::Main);
/// assert_eq!(entry.display_name(), "Island");
///
/// let side = DeckEntry::new("e2", "c2", CardMetadata::named("Duress"), 2).in_sideboard();
/// assert!(!side.is_main());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// Unique row identifier.
    #[serde(alias = "entryId")]
    pub entry_id: EntryId,

    /// Underlying card identifier.
    #[serde(alias = "cardId")]
    pub card_id: CardId,

    /// Game-specific card data.
    #[serde(default, alias = "card_data", alias = "cardMetadata")]
    pub metadata: CardMetadata,

    /// Number of physical copies.
    pub quantity: u32,

    /// Deck category. Missing or null means main deck.
    #[serde(default, deserialize_with = "category_or_main")]
    pub category: DeckCategory,
}

fn category_or_main<'de, D>(deserializer: D) -> Result<DeckCategory, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DeckCategory>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl DeckEntry {
    /// Create a main-deck entry.
    pub fn new(
        entry_id: impl Into<String>,
        card_id: impl Into<String>,
        metadata: CardMetadata,
        quantity: u32,
    ) -> Self {
        Self {
            entry_id: EntryId::new(entry_id),
            card_id: CardId::new(card_id),
            metadata,
            quantity,
            category: DeckCategory::Main,
        }
    }

    /// Move this entry to the sideboard (builder pattern).
    #[must_use]
    pub fn in_sideboard(mut self) -> Self {
        self.category = DeckCategory::Sideboard;
        self
    }

    /// Is this a main-deck entry?
    #[must_use]
    pub fn is_main(&self) -> bool {
        self.category == DeckCategory::Main
    }

    /// Card name, falling back to the card id when the metadata has none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.metadata
            .name
            .as_deref()
            .unwrap_or_else(|| self.card_id.as_str())
    }
}

/// Iterate over the main-deck entries of a deck list.
pub fn main_deck(entries: &[DeckEntry]) -> impl Iterator<Item = &DeckEntry> {
    entries.iter().filter(|e| e.is_main())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display() {
        assert_eq!(format!("{}", EntryId::new("abc")), "abc");
        assert_eq!(CardId::new("xyz").as_str(), "xyz");
    }

    #[test]
    fn test_display_name_falls_back_to_card_id() {
        let entry = DeckEntry::new("e1", "card-77", CardMetadata::default(), 1);
        assert_eq!(entry.display_name(), "card-77");
    }

    #[test]
    fn test_main_deck_filter() {
        let entries = vec![
            DeckEntry::new("e1", "c1", CardMetadata::named("A"), 4),
            DeckEntry::new("e2", "c2", CardMetadata::named("B"), 2).in_sideboard(),
            DeckEntry::new("e3", "c3", CardMetadata::named("C"), 1),
        ];

        let names: Vec<_> = main_deck(&entries).map(DeckEntry::display_name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_deserialize_host_shape() {
        let json = r#"{
            "entry_id": "e1",
            "card_id": "c1",
            "card_data": {"name": "Island", "type_line": "Basic Land — Island"},
            "quantity": 17,
            "category": "main"
        }"#;
        let entry: DeckEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.entry_id, EntryId::new("e1"));
        assert_eq!(entry.quantity, 17);
        assert!(entry.metadata.is_basic_land());
        assert!(entry.is_main());
    }

    #[test]
    fn test_deserialize_missing_or_null_category_is_main() {
        let missing = r#"{"entry_id":"e1","card_id":"c1","quantity":1}"#;
        let null = r#"{"entry_id":"e1","card_id":"c1","quantity":1,"category":null}"#;
        let side = r#"{"entryId":"e1","cardId":"c1","quantity":1,"category":"sideboard"}"#;

        let missing: DeckEntry = serde_json::from_str(missing).unwrap();
        let null: DeckEntry = serde_json::from_str(null).unwrap();
        let side: DeckEntry = serde_json::from_str(side).unwrap();

        assert_eq!(missing.category, DeckCategory::Main);
        assert_eq!(null.category, DeckCategory::Main);
        assert_eq!(side.category, DeckCategory::Sideboard);
    }
}
