//! Color pip distribution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::cost::{ColorSymbol, ManaCost};
use super::{composition, Applicability};
use crate::cards::{main_deck, DeckEntry};
use crate::core::Game;

/// Color pips across the main deck, each card's pips multiplied by its
/// copy count. Colors with no pips are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDistribution {
    counts: BTreeMap<ColorSymbol, u32>,
}

impl ColorDistribution {
    /// Build the distribution for a deck.
    #[must_use]
    pub fn from_entries(entries: &[DeckEntry]) -> Self {
        let mut counts = BTreeMap::new();
        for entry in main_deck(entries) {
            let cost = ManaCost::parse(entry.metadata.mana_cost());
            for (color, pips) in cost.colors() {
                let count = counts.entry(color).or_insert(0u32);
                *count = count.saturating_add(pips.saturating_mul(entry.quantity));
            }
        }
        Self { counts }
    }

    /// Pip count for a color (0 when absent).
    #[must_use]
    pub fn count(&self, color: ColorSymbol) -> u32 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Colors present, in WUBRG-then-colorless order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorSymbol, u32)> + Clone + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// Sum of all pips.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().fold(0, |sum, &n| sum.saturating_add(n))
    }

    /// Number of colors present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// No pips at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Percentage of all pips per color. `None` when there are no pips.
    #[must_use]
    pub fn composition(&self) -> Option<Vec<(ColorSymbol, f64)>> {
        composition(self.iter())
    }
}

/// Color distribution for a deck of the given game.
#[must_use]
pub fn color_distribution(entries: &[DeckEntry], game: Option<Game>) -> Applicability<ColorDistribution> {
    match game {
        Some(g) if g.has_symbolic_cost() => {
            Applicability::Applicable(ColorDistribution::from_entries(entries))
        }
        _ => Applicability::NotApplicable,
    }
}
