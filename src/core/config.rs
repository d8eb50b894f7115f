//! Session configuration.
//!
//! A game is configured at start time by:
//! - `SessionConfig`: pair count and the symbol pool to deal from
//! - `Timing`: the delays of the two deferred transitions
//! - `Difficulty`: the preset grid sizes
//!
//! Nothing here is persisted. All types are serde-friendly so a host can
//! load them from whatever format it uses.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{DeckError, ParseDifficultyError};
use crate::deck::{distinct_count, Symbol, Theme};

/// Default delay before a mismatched pair flips back.
pub const DEFAULT_FLIP_BACK_DELAY: Duration = Duration::from_millis(1000);

/// Default delay between the final match and the win announcement.
pub const DEFAULT_WIN_DELAY: Duration = Duration::from_millis(500);

/// Delays of the deferred transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// How long a mismatched pair stays face-up.
    #[serde(rename = "flip_back_delay_ms", with = "millis")]
    pub flip_back_delay: Duration,

    /// How long after the last match the game is declared won.
    #[serde(rename = "win_delay_ms", with = "millis")]
    pub win_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            flip_back_delay: DEFAULT_FLIP_BACK_DELAY,
            win_delay: DEFAULT_WIN_DELAY,
        }
    }
}

impl Timing {
    /// Both transitions fire on the next clock advance.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            flip_back_delay: Duration::ZERO,
            win_delay: Duration::ZERO,
        }
    }

    /// Set the flip-back delay.
    #[must_use]
    pub fn with_flip_back_delay(mut self, delay: Duration) -> Self {
        self.flip_back_delay = delay;
        self
    }

    /// Set the win-announcement delay.
    #[must_use]
    pub fn with_win_delay(mut self, delay: Duration) -> Self {
        self.win_delay = delay;
        self
    }
}

/// Everything needed to start a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of pairs on the board.
    pub pair_count: usize,

    /// Pool the deck is dealt from, in preference order.
    pub symbols: Vec<Symbol>,

    /// Deferred-transition delays.
    #[serde(default)]
    pub timing: Timing,
}

impl SessionConfig {
    /// Create a configuration with default timing.
    pub fn new(pair_count: usize, symbols: impl Into<Vec<Symbol>>) -> Self {
        Self {
            pair_count,
            symbols: symbols.into(),
            timing: Timing::default(),
        }
    }

    /// A preset board size dealt from a built-in theme.
    #[must_use]
    pub fn from_difficulty(difficulty: Difficulty, theme: Theme) -> Self {
        Self::new(difficulty.pair_count(), theme.symbols())
    }

    /// Set the timing.
    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Check that a deck can be dealt from this configuration.
    ///
    /// # Errors
    ///
    /// The same errors [`crate::deck::generate_deck`] would return.
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.pair_count == 0 {
            return Err(DeckError::NoPairs);
        }
        let available = distinct_count(&self.symbols);
        if available < self.pair_count {
            return Err(DeckError::InsufficientSymbols {
                requested: self.pair_count,
                available,
            });
        }
        Ok(())
    }
}

/// Preset board sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 4x4 grid, 8 pairs.
    #[default]
    Easy,
    /// 6x6 grid, 18 pairs.
    Medium,
    /// 8x8 grid, 32 pairs.
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Side length of the square grid.
    #[must_use]
    pub const fn grid_size(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 6,
            Difficulty::Hard => 8,
        }
    }

    /// Pairs on a full grid.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.grid_size() * self.grid_size() / 2
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError {
                input: s.to_string(),
            }),
        }
    }
}

/// `Duration` as integer milliseconds.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
