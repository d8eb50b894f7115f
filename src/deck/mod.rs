//! Symbols, themes and the deck generator.
//!
//! A deck is an ordered list of symbols in which every symbol appears exactly
//! twice. The session deals one per game from a symbol pool; themes provide
//! ready-made pools.

pub mod symbol;
pub mod theme;
pub mod generator;

pub use symbol::{pool, Symbol};
pub use theme::Theme;
pub use generator::{distinct_count, generate_deck};
