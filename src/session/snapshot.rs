//! Read-only view handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::card::Phase;
use crate::deck::Symbol;

/// How one card should be drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Index into the board.
    pub position: usize,
    /// Face value. Renderers should only show it when `revealed` is set.
    pub symbol: Symbol,
    /// Face-up, either selected this turn or matched.
    pub revealed: bool,
    /// Pair already found.
    pub matched: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cards in board order.
    pub cards: Vec<CardView>,
    /// Completed turns.
    pub move_count: u32,
    /// Pairs found.
    pub matched_count: usize,
    /// Pairs on the board.
    pub pair_count: usize,
    /// Current phase.
    pub phase: Phase,
}

impl Snapshot {
    /// Cards currently face-up.
    pub fn revealed(&self) -> impl Iterator<Item = &CardView> {
        self.cards.iter().filter(|c| c.revealed)
    }

    /// Whether every pair has been found (the win may not be announced yet).
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.pair_count > 0 && self.matched_count == self.pair_count
    }
}
