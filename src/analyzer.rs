//! One-call deck report for hosts.

use serde::{Deserialize, Serialize};

use crate::analysis::AggregateStats;
use crate::cards::DeckEntry;
use crate::core::Game;
use crate::legality::{validate, FormatRuleTable, Legality};

/// Statistics and legality for one deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckReport {
    pub stats: AggregateStats,
    pub legality: Legality,
}

/// Analyzer bound to a format rule table.
///
/// ## Example
///
/// ```
/// use deck_engine::cards::{CardMetadata, DeckEntry};
/// use deck_engine::DeckAnalyzer;
///
/// let deck = vec![
///     DeckEntry::new("e1", "c1", CardMetadata::named("Island").with_type_line("Basic Land — Island"), 17),
///     DeckEntry::new("e2", "c2", CardMetadata::named("Lightning Bolt").with_mana_cost("{R}").with_type_line("Instant"), 4),
/// ];
///
/// let report = DeckAnalyzer::builtin().analyze(&deck, "mtg", Some("Modern"));
/// assert_eq!(report.stats.total_main, 21);
/// assert_eq!(
///     report.legality.report().unwrap().messages(),
///     vec!["Deck has 21 cards (minimum: 60)"]
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DeckAnalyzer<'a> {
    table: &'a FormatRuleTable,
}

impl DeckAnalyzer<'static> {
    /// Analyzer using the bundled format table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(FormatRuleTable::builtin())
    }
}

impl<'a> DeckAnalyzer<'a> {
    /// Analyzer using a host-provided format table.
    #[must_use]
    pub fn new(table: &'a FormatRuleTable) -> Self {
        Self { table }
    }

    /// Compute statistics and legality from host inputs.
    ///
    /// An unrecognized `game_id` is not an error: aggregations report
    /// not applicable and legality reports not evaluated.
    #[must_use]
    pub fn analyze(&self, entries: &[DeckEntry], game_id: &str, format: Option<&str>) -> DeckReport {
        let game = Game::from_id(game_id);
        if game.is_none() {
            tracing::debug!(game_id, "unrecognized game id");
        }

        DeckReport {
            stats: AggregateStats::compute(entries, game),
            legality: validate(entries, game, format, self.table),
        }
    }

    /// Legality only.
    #[must_use]
    pub fn legality(&self, entries: &[DeckEntry], game_id: &str, format: Option<&str>) -> Legality {
        validate(entries, Game::from_id(game_id), format, self.table)
    }
}
