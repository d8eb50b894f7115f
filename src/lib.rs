//! # memory-match
//!
//! A memory-matching card game engine: a grid of face-down cards, two picks
//! per turn, matches stay up, mismatches flip back, the game is won when
//! every pair is found.
//!
//! ## Design Principles
//!
//! 1. **One explicit session**: all game state lives in a `Session` value
//!    with a defined lifecycle. Start and reset deal a fresh board; nothing
//!    is shared implicitly with the renderer.
//!
//! 2. **Configuration at start time**: board size and symbol pool are
//!    parameters, not separate game variants.
//!
//! 3. **Deterministic by default**: the shuffle is the only randomness and it
//!    comes from a seedable RNG. Delays run on a logical clock the host
//!    advances, so every game is replayable.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `deck`: symbols, themes, deck generation
//! - `session`: the game state machine and its snapshot
//! - `timer`: optional countdown for timed play
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{pool, Phase, Selected, Session};
//!
//! let mut session = Session::new(42);
//! session.start(2, &pool(["A", "B"])).unwrap();
//!
//! let a: Vec<_> = session.board().iter().filter(|c| c.symbol.as_str() == "A").map(|c| c.position).collect();
//! let b: Vec<_> = session.board().iter().filter(|c| c.symbol.as_str() == "B").map(|c| c.position).collect();
//!
//! session.select_card(a[0]);
//! session.select_card(a[1]);
//! session.select_card(b[0]);
//! assert!(matches!(session.select_card(b[1]), Selected::Match { completes_board: true, .. }));
//!
//! // The win is announced after a short delay
//! assert_eq!(session.phase(), Phase::InProgress);
//! session.advance(Duration::from_millis(500));
//! assert_eq!(session.phase(), Phase::Won);
//! assert_eq!(session.move_count(), 2);
//! ```

pub mod core;
pub mod deck;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    DeckError, Difficulty, GameRng, ParseDifficultyError, SessionConfig, Timing,
};

pub use crate::deck::{generate_deck, pool, Symbol, Theme};

pub use crate::session::{
    Card, CardView, Generation, IgnoreReason, Phase, Selected, Selection, Session, Snapshot,
};

pub use crate::timer::{Countdown, CountdownStatus};
