//! Playtest simulation: shuffle the main deck, deal a sample hand, draw.
//!
//! ## Key Types
//!
//! - `DrawUnit`: One physical card copy, traced back to its deck entry
//! - `PlaytestSession`: Immutable snapshot (shuffled, hand, drawn, remaining)
//! - `PlaytestSimulator`: Owns the RNG and the current session
//!
//! Simulators are independent. Two open decks get two simulators, each
//! seeded separately.

pub mod session;
pub mod simulator;
pub mod unit;

pub use session::{PlaytestSession, HAND_SIZE};
pub use simulator::{PlaytestPhase, PlaytestSimulator};
pub use unit::{expand, DrawUnit};
