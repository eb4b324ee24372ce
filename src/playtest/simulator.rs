//! Playtest state machine.
//!
//! ```text
//!            start_new_hand         draw_one (nothing left)
//!   Empty ──────────────────► HandDrawn ──────────────────► Exhausted
//!     ▲                         │  ▲ draw_one                  │
//!     │        reset            │  └──────┘                    │
//!     └─────────────────────────┴──────────────────────────────┘
//! ```
//!
//! `start_new_hand` is allowed from every state, always lands in
//! `HandDrawn` (even for a short deck with nothing left to draw) and
//! discards the previous session. A `draw_one` that finds `remaining`
//! empty moves to `Exhausted` without changing the session. `draw_one`
//! from `Empty` or `Exhausted` changes nothing.

use serde::{Deserialize, Serialize};

use super::session::PlaytestSession;
use crate::cards::DeckEntry;
use crate::core::ShuffleRng;

/// Where the simulator is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaytestPhase {
    /// No session.
    Empty,
    /// A hand is dealt. `remaining` may already be empty.
    HandDrawn,
    /// A draw was attempted with nothing left to draw.
    Exhausted,
}

/// Sample-hand simulator for one deck view.
///
/// Each simulator owns its RNG and session; separate simulators never
/// share state. Every transition hands back an independent snapshot.
///
/// ## Example
///
/// ```
/// use deck_engine::cards::{CardMetadata, DeckEntry};
/// use deck_engine::playtest::{PlaytestPhase, PlaytestSimulator};
///
/// let deck = vec![DeckEntry::new("e1", "c1", CardMetadata::named("Island"), 40)];
/// let mut sim = PlaytestSimulator::with_seed(7);
///
/// let opening = sim.start_new_hand(&deck);
/// assert_eq!(opening.hand().len(), 7);
///
/// let after = sim.draw_one().unwrap();
/// assert_eq!(after.drawn().len(), 1);
/// assert_eq!(after.remaining_count(), 32);
///
/// sim.reset();
/// assert_eq!(sim.phase(), PlaytestPhase::Empty);
/// ```
#[derive(Clone, Debug)]
pub struct PlaytestSimulator {
    rng: ShuffleRng,
    phase: PlaytestPhase,
    session: Option<PlaytestSession>,
}

impl Default for PlaytestSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaytestSimulator {
    /// Create a simulator with a fresh seed from the OS entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(ShuffleRng::from_entropy())
    }

    /// Create a simulator with a fixed seed, for reproducible sessions.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ShuffleRng::new(seed))
    }

    fn from_rng(rng: ShuffleRng) -> Self {
        Self {
            rng,
            phase: PlaytestPhase::Empty,
            session: None,
        }
    }

    /// Seed of this simulator's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> PlaytestPhase {
        self.phase
    }

    /// Current session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&PlaytestSession> {
        self.session.as_ref()
    }

    /// Shuffle the main deck and deal a new opening hand, replacing any
    /// previous session.
    pub fn start_new_hand(&mut self, entries: &[DeckEntry]) -> PlaytestSession {
        let session = PlaytestSession::deal(entries, &mut self.rng);
        tracing::debug!(
            seed = self.rng.seed(),
            units = session.shuffled().len(),
            hand = session.hand().len(),
            remaining = session.remaining_count(),
            "dealt playtest hand"
        );
        self.phase = PlaytestPhase::HandDrawn;
        self.session = Some(session.clone());
        session
    }

    /// Draw one card into the drawn pile.
    ///
    /// Returns the new snapshot, or `None` when no hand has been dealt.
    /// Drawing from an exhausted deck returns the unchanged snapshot.
    pub fn draw_one(&mut self) -> Option<PlaytestSession> {
        let current = self.session.as_ref()?;
        if current.is_exhausted() {
            tracing::debug!("playtest deck exhausted, draw ignored");
            self.phase = PlaytestPhase::Exhausted;
            return Some(current.clone());
        }
        let next = current.draw_one();
        self.session = Some(next.clone());
        Some(next)
    }

    /// Discard the session and return to `Empty`.
    pub fn reset(&mut self) {
        self.phase = PlaytestPhase::Empty;
        self.session = None;
    }
}
