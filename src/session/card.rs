//! Cards, the current selection and the session phase.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::deck::Symbol;

/// One board cell.
///
/// Dealt once per game and never mutated; whether it is face-up is derived
/// from the session's selection and matched set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Index into the board.
    pub position: usize,
    /// Face value.
    pub symbol: Symbol,
}

impl Card {
    /// Create a new card.
    pub fn new(position: usize, symbol: Symbol) -> Self {
        Self { position, symbol }
    }
}

/// Game phase as seen by the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No board dealt yet.
    #[default]
    NotStarted,
    /// Accepting picks.
    InProgress,
    /// Every pair found and the win announced.
    Won,
}

/// Face-up, unmatched positions picked this turn. Never more than two.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection(SmallVec<[usize; 2]>);

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `position` is selected.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.0.contains(&position)
    }

    /// Selected positions in pick order.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    pub(crate) fn push(&mut self, position: usize) {
        debug_assert!(self.0.len() < 2, "selection holds at most two cards");
        self.0.push(position);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// Why a pick was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The session is not in progress.
    NotInProgress,
    /// A mismatched pair is still face-up.
    AwaitingFlipBack,
    /// No card at that position.
    OutOfRange,
    /// The card's pair has been found.
    AlreadyMatched,
    /// The card is already face-up this turn.
    AlreadySelected,
}

/// Result of a pick.
///
/// Ignored picks change nothing; they are reported only so a caller can
/// tell them apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selected {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a turn turned face-up.
    FirstPick,
    /// Second card matched the first.
    Match {
        /// The matched symbol.
        symbol: Symbol,
        /// Whether this was the last pair on the board.
        completes_board: bool,
    },
    /// Second card did not match; both flip back after a delay.
    Mismatch,
}

impl Selected {
    /// Whether the pick was ignored.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Selected::Ignored(_))
    }

    /// Whether the pick completed a turn.
    #[must_use]
    pub fn completes_turn(&self) -> bool {
        matches!(self, Selected::Match { .. } | Selected::Mismatch)
    }
}
