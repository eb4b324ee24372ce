//! Type distribution and the combined deck statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::color::{color_distribution, ColorDistribution};
use super::cost::ManaCost;
use super::curve::{mana_curve, ManaCurve};
use super::types::TypeBucket;
use super::{composition, Applicability};
use crate::cards::{main_deck, DeckEntry};
use crate::core::Game;

/// Main-deck copy counts per type bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDistribution {
    counts: BTreeMap<TypeBucket, u32>,
}

impl TypeDistribution {
    /// Build the distribution for a deck of the given game.
    #[must_use]
    pub fn from_entries(entries: &[DeckEntry], game: Game) -> Self {
        let mut counts = BTreeMap::new();
        for entry in main_deck(entries) {
            let count = counts
                .entry(TypeBucket::for_card(game, &entry.metadata))
                .or_insert(0u32);
            *count = count.saturating_add(entry.quantity);
        }
        Self { counts }
    }

    /// Count for one bucket (0 when absent).
    #[must_use]
    pub fn count(&self, bucket: &TypeBucket) -> u32 {
        self.counts.get(bucket).copied().unwrap_or(0)
    }

    /// Buckets present, in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&TypeBucket, u32)> + Clone + '_ {
        self.counts.iter().map(|(b, &n)| (b, n))
    }

    /// Sum over all buckets.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().fold(0, |sum, &n| sum.saturating_add(n))
    }

    /// Number of distinct buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// No cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Percentage of cards per bucket. `None` for an empty deck.
    #[must_use]
    pub fn composition(&self) -> Option<Vec<(&TypeBucket, f64)>> {
        composition(self.iter())
    }
}

/// Type distribution for a deck. Unrecognized games are `NotApplicable`.
#[must_use]
pub fn type_distribution(entries: &[DeckEntry], game: Option<Game>) -> Applicability<TypeDistribution> {
    match game {
        Some(g) => Applicability::Applicable(TypeDistribution::from_entries(entries, g)),
        None => Applicability::NotApplicable,
    }
}

/// Everything the deck statistics panel shows.
///
/// Derived data: recomputed on every call, never cached or persisted.
///
/// ## Example
///
/// ```
/// use deck_engine::analysis::AggregateStats;
/// use deck_engine::cards::{CardMetadata, DeckEntry};
/// use deck_engine::core::Game;
///
/// let deck = vec![
///     DeckEntry::new("e1", "c1", CardMetadata::named("Island").with_type_line("Basic Land — Island"), 17),
///     DeckEntry::new("e2", "c2", CardMetadata::named("Opt").with_mana_cost("{U}").with_type_line("Instant"), 4),
/// ];
/// let stats = AggregateStats::compute(&deck, Some(Game::Mtg));
///
/// assert_eq!(stats.total_main, 21);
/// assert_eq!(stats.average_converted_cost, Some(1.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Mana curve (symbolic-cost games only).
    pub curve: Applicability<ManaCurve>,
    /// Color pips (symbolic-cost games only).
    pub colors: Applicability<ColorDistribution>,
    /// Type distribution (any recognized game).
    pub types: Applicability<TypeDistribution>,
    /// Copies in the main deck.
    pub total_main: u32,
    /// Copies in the sideboard.
    pub total_sideboard: u32,
    /// Number of entries, main and sideboard.
    pub unique_entry_count: usize,
    /// Mean converted cost over non-land main-deck copies. `None` when
    /// there are none, or the game has no symbolic costs.
    pub average_converted_cost: Option<f64>,
}

impl AggregateStats {
    /// Compute all statistics for a deck.
    #[must_use]
    pub fn compute(entries: &[DeckEntry], game: Option<Game>) -> Self {
        let total_main = main_deck(entries).fold(0u32, |sum, e| sum.saturating_add(e.quantity));
        let total_sideboard = entries
            .iter()
            .filter(|e| !e.is_main())
            .fold(0u32, |sum, e| sum.saturating_add(e.quantity));

        let average_converted_cost = match game {
            Some(g) if g.has_symbolic_cost() => average_converted_cost(entries, g),
            _ => None,
        };

        Self {
            curve: mana_curve(entries, game),
            colors: color_distribution(entries, game),
            types: type_distribution(entries, game),
            total_main,
            total_sideboard,
            unique_entry_count: entries.len(),
            average_converted_cost,
        }
    }
}

fn average_converted_cost(entries: &[DeckEntry], game: Game) -> Option<f64> {
    let mut cost_sum: u64 = 0;
    let mut copies: u64 = 0;

    for entry in main_deck(entries) {
        if TypeBucket::for_card(game, &entry.metadata).is_land() {
            continue;
        }
        let cost = ManaCost::parse(entry.metadata.mana_cost()).converted();
        cost_sum = cost_sum.saturating_add(u64::from(cost) * u64::from(entry.quantity));
        copies += u64::from(entry.quantity);
    }

    (copies > 0).then(|| cost_sum as f64 / copies as f64)
}
