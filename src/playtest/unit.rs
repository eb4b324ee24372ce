//! Draw units: one physical card copy.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::{main_deck, CardId, CardMetadata, DeckEntry, EntryId};

/// One physical copy of a main-deck entry.
///
/// An entry with quantity 3 expands to three units sharing the same entry
/// but with copy indices 0, 1 and 2, so each can be tracked on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawUnit {
    /// `"<entryId>-<copyIndex>"`, unique within one expansion.
    pub unit_id: String,
    /// Which copy of the entry this is, from 0.
    pub copy_index: u32,
    /// The originating entry.
    pub entry: Arc<DeckEntry>,
}

impl DrawUnit {
    fn new(entry: Arc<DeckEntry>, copy_index: u32) -> Self {
        Self {
            unit_id: format!("{}-{}", entry.entry_id, copy_index),
            copy_index,
            entry,
        }
    }

    /// Originating entry id.
    #[must_use]
    pub fn entry_id(&self) -> &EntryId {
        &self.entry.entry_id
    }

    /// Underlying card id.
    #[must_use]
    pub fn card_id(&self) -> &CardId {
        &self.entry.card_id
    }

    /// Card name (card id when the metadata has none).
    #[must_use]
    pub fn name(&self) -> &str {
        self.entry.display_name()
    }

    /// Card metadata.
    #[must_use]
    pub fn metadata(&self) -> &CardMetadata {
        &self.entry.metadata
    }
}

/// Expand the main deck into one unit per physical copy, in entry order.
#[must_use]
pub fn expand(entries: &[DeckEntry]) -> Vec<DrawUnit> {
    let mut units = Vec::with_capacity(main_deck(entries).map(|e| e.quantity as usize).sum());
    for entry in main_deck(entries) {
        let shared = Arc::new(entry.clone());
        units.extend((0..entry.quantity).map(|copy| DrawUnit::new(Arc::clone(&shared), copy)));
    }
    units
}
