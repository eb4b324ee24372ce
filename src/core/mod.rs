//! Core engine types: game identifiers and the shuffle RNG.
//!
//! Everything here is leaf-level and shared by the analysis, legality
//! and playtest modules.

pub mod game;
pub mod rng;

pub use game::Game;
pub use rng::ShuffleRng;
