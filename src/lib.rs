//! # rust-deck-engine
//!
//! Deck analysis, format legality and playtest simulation for trading
//! card game deck lists.
//!
//! ## Design Principles
//!
//! 1. **Total Functions**: Bad cost strings, missing type lines, unknown
//!    formats and empty decks all have well-defined results. Nothing here
//!    panics or errors on user-entered card data.
//!
//! 2. **Explicit Absence**: "No curve for this game" and "format not
//!    evaluated" are their own variants, never an empty or zeroed result.
//!
//! 3. **Configuration Over Code**: Format rules are declarative TOML data.
//!    New formats need no validator changes.
//!
//! ## Architecture
//!
//! - **Pure Aggregation**: Statistics and legality are stateless and
//!   recomputed from the entry list on every call.
//!
//! - **Persistent Snapshots**: The playtest simulator is the only stateful
//!   component. Each transition returns an `im`-backed snapshot that
//!   shares structure with the previous one.
//!
//! ## Modules
//!
//! - `core`: Game identifiers, shuffle RNG
//! - `cards`: Deck entries and card metadata
//! - `analysis`: Cost tokenizer, type classifier, curve/color/type stats
//! - `legality`: Format rule table and validator
//! - `playtest`: Draw units, sessions, simulator
//! - `error`: Configuration errors

pub mod analysis;
pub mod analyzer;
pub mod cards;
pub mod core;
pub mod error;
pub mod legality;
pub mod playtest;

// Re-export commonly used types
pub use crate::core::{Game, ShuffleRng};

pub use crate::cards::{CardId, CardMetadata, DeckCategory, DeckEntry, EntryId};

pub use crate::analysis::{
    AggregateStats, Applicability, CardTypeCategory, ColorDistribution, ColorSymbol,
    ManaCost, ManaCurve, TypeBucket, TypeDistribution,
};

pub use crate::legality::{FormatRule, FormatRuleTable, Legality, LegalityReport, Violation};

pub use crate::playtest::{DrawUnit, PlaytestPhase, PlaytestSession, PlaytestSimulator};

pub use crate::analyzer::{DeckAnalyzer, DeckReport};

pub use crate::error::FormatTableError;
