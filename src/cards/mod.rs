//! Card metadata model: deck entries and the card data they carry.
//!
//! ## Key Types
//!
//! - `EntryId`: Unique identifier of a deck row
//! - `CardId`: Identifier of the underlying card (shared across rows)
//! - `DeckCategory`: Main deck or sideboard
//! - `CardMetadata`: Game-specific card data (name, cost, type line, ...)
//! - `DeckEntry`: One row of a deck list
//!
//! This module holds no logic beyond field access and small predicates.

pub mod entry;
pub mod metadata;

pub use entry::{main_deck, CardId, DeckCategory, DeckEntry, EntryId};
pub use metadata::CardMetadata;
