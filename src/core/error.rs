//! Error types.
//!
//! Only dealing a deck can fail. Everything a player can do to a running
//! session is forgiving: bad picks are ignored, not reported as errors.

use derive_more::{Display, Error};

/// Failure to deal a deck from a symbol pool.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum DeckError {
    /// The pool has fewer distinct symbols than the requested pair count.
    #[display("insufficient symbols: {requested} pairs requested, pool has {available} distinct symbols")]
    InsufficientSymbols {
        /// Pairs requested.
        requested: usize,
        /// Distinct symbols available in the pool.
        available: usize,
    },
    /// A pair count of zero.
    #[display("a deck needs at least one pair")]
    NoPairs,
}

/// Unrecognised difficulty name.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty {input:?} (expected easy, medium or hard)")]
pub struct ParseDifficultyError {
    /// The rejected input.
    pub input: String,
}
