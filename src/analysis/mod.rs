//! Deck statistics: cost tokenizing, type classification and aggregation.
//!
//! ## Components
//!
//! - `cost`: Mana cost tokenizer (`ManaCost`, `ColorSymbol`)
//! - `types`: Type classifier (`CardTypeCategory`, `TypeBucket`)
//! - `curve`: Mana curve over non-land main-deck cards
//! - `color`: Color pip distribution weighted by copy count
//! - `stats`: Type distribution, totals and the combined `AggregateStats`
//!
//! Every function here is pure. Results are recomputed from scratch on
//! each call and depend only on their arguments.

pub mod color;
pub mod cost;
pub mod curve;
pub mod stats;
pub mod types;

pub use color::{color_distribution, ColorDistribution};
pub use cost::{tokenize, ColorSymbol, CostSymbol, ManaCost};
pub use curve::{mana_curve, ManaCurve, CURVE_CAP};
pub use stats::{type_distribution, AggregateStats, TypeDistribution};
pub use types::{CardTypeCategory, TypeBucket, UNKNOWN_TYPE};

use serde::{Deserialize, Serialize};

/// Result of an aggregation that only makes sense for some games.
///
/// `NotApplicable` is distinct from an empty result: a Pokemon deck has no
/// mana curve at all, while an MTG deck of only lands has a flat one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Applicability<T> {
    Applicable(T),
    NotApplicable,
}

impl<T> Applicability<T> {
    /// Borrow the value if applicable.
    #[must_use]
    pub fn applicable(&self) -> Option<&T> {
        match self {
            Applicability::Applicable(value) => Some(value),
            Applicability::NotApplicable => None,
        }
    }

    /// Is there a value?
    #[must_use]
    pub fn is_applicable(&self) -> bool {
        matches!(self, Applicability::Applicable(_))
    }

    /// Transform the value, keeping `NotApplicable` as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Applicability<U> {
        match self {
            Applicability::Applicable(value) => Applicability::Applicable(f(value)),
            Applicability::NotApplicable => Applicability::NotApplicable,
        }
    }
}

/// Percentage share of each count. `None` when the counts sum to zero.
fn composition<K: Clone>(counts: impl Iterator<Item = (K, u32)> + Clone) -> Option<Vec<(K, f64)>> {
    let total: u64 = counts.clone().map(|(_, n)| u64::from(n)).sum();
    if total == 0 {
        return None;
    }
    Some(
        counts
            .map(|(key, n)| (key, f64::from(n) * 100.0 / total as f64))
            .collect(),
    )
}
