//! Core building blocks: RNG, configuration, errors.
//!
//! Nothing here knows about turns or boards; the session module builds on
//! these.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::GameRng;
pub use config::{Difficulty, SessionConfig, Timing, DEFAULT_FLIP_BACK_DELAY, DEFAULT_WIN_DELAY};
pub use error::{DeckError, ParseDifficultyError};
