//! Mana curve aggregation.

use serde::{Deserialize, Serialize};

use super::cost::ManaCost;
use super::types::CardTypeCategory;
use super::Applicability;
use crate::cards::{main_deck, DeckEntry};
use crate::core::Game;

/// Highest curve bucket. Costs at or above it share the last bucket.
pub const CURVE_CAP: u32 = 6;

/// Copy counts of non-land main-deck cards, bucketed by converted cost
/// `0..=6` where 6 means "6 or more".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaCurve {
    buckets: [u32; CURVE_CAP as usize + 1],
}

impl ManaCurve {
    /// Build the curve for a deck. Sideboard entries and land-classified
    /// cards are skipped.
    #[must_use]
    pub fn from_entries(entries: &[DeckEntry]) -> Self {
        let mut curve = Self::default();
        for entry in main_deck(entries) {
            if CardTypeCategory::classify(entry.metadata.type_line()) == CardTypeCategory::Land {
                continue;
            }
            let cost = ManaCost::parse(entry.metadata.mana_cost()).converted();
            let slot = &mut curve.buckets[Self::slot(cost)];
            *slot = slot.saturating_add(entry.quantity);
        }
        curve
    }

    fn slot(cost: u32) -> usize {
        cost.min(CURVE_CAP) as usize
    }

    /// Count for the bucket a converted cost falls into.
    #[must_use]
    pub fn bucket(&self, cost: u32) -> u32 {
        self.buckets[Self::slot(cost)]
    }

    /// All buckets as `(cost, count)`, zeros included.
    pub fn buckets(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..=CURVE_CAP).zip(self.buckets.iter().copied())
    }

    /// Cards on the curve.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.buckets.iter().fold(0, |sum, &n| sum.saturating_add(n))
    }

    /// Largest bucket, never below 1. Used for chart scaling.
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.buckets.iter().copied().max().unwrap_or(0).max(1)
    }
}

/// Mana curve for a deck of the given game.
///
/// Only games with symbolic costs have a curve; everything else, including
/// unrecognized games, is `NotApplicable`.
#[must_use]
pub fn mana_curve(entries: &[DeckEntry], game: Option<Game>) -> Applicability<ManaCurve> {
    match game {
        Some(g) if g.has_symbolic_cost() => Applicability::Applicable(ManaCurve::from_entries(entries)),
        _ => Applicability::NotApplicable,
    }
}
