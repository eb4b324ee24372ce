//! Immutable playtest snapshots.
//!
//! A `PlaytestSession` is never mutated. Dealing produces a fresh session;
//! drawing produces a new one that shares structure with the old via
//! persistent vectors, so holding on to earlier snapshots is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::unit::{expand, DrawUnit};
use crate::cards::DeckEntry;
use crate::core::ShuffleRng;

/// Opening hand size.
pub const HAND_SIZE: usize = 7;

/// Snapshot of one sample-hand simulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaytestSession {
    shuffled: Vector<DrawUnit>,
    hand: Vector<DrawUnit>,
    drawn: Vector<DrawUnit>,
    remaining: Vector<DrawUnit>,
}

impl PlaytestSession {
    /// Shuffle the main deck and deal an opening hand.
    ///
    /// Decks smaller than a hand deal everything into the hand and leave
    /// nothing remaining.
    #[must_use]
    pub fn deal(entries: &[DeckEntry], rng: &mut ShuffleRng) -> Self {
        let mut units = expand(entries);
        rng.shuffle(&mut units);

        let shuffled: Vector<DrawUnit> = units.into_iter().collect();
        let split = HAND_SIZE.min(shuffled.len());
        let (hand, remaining) = shuffled.clone().split_at(split);

        Self {
            shuffled,
            hand,
            drawn: Vector::new(),
            remaining,
        }
    }

    /// Draw the top remaining card. Returns an identical snapshot when the
    /// deck is exhausted.
    #[must_use]
    pub fn draw_one(&self) -> Self {
        let mut next = self.clone();
        if let Some(unit) = next.remaining.pop_front() {
            next.drawn.push_back(unit);
        }
        next
    }

    /// Full shuffled order at deal time.
    #[must_use]
    pub fn shuffled(&self) -> &Vector<DrawUnit> {
        &self.shuffled
    }

    /// Opening hand.
    #[must_use]
    pub fn hand(&self) -> &Vector<DrawUnit> {
        &self.hand
    }

    /// Cards drawn after the opening hand, in draw order.
    #[must_use]
    pub fn drawn(&self) -> &Vector<DrawUnit> {
        &self.drawn
    }

    /// Undrawn cards, top first.
    #[must_use]
    pub fn remaining(&self) -> &Vector<DrawUnit> {
        &self.remaining
    }

    /// Undrawn card count.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Nothing left to draw.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}
