//! The game session: board, turns, matches and the win.
//!
//! ## Turn resolution
//!
//! A turn is two picks. The first pick turns a card face-up. The second
//! completes the turn and counts one move:
//!
//! - **Match**: the symbol joins the matched set and both cards stay up.
//!   If that was the last pair, the win is announced after `win_delay`.
//! - **Mismatch**: both cards stay up for `flip_back_delay`, then turn
//!   face-down. Picks in between are ignored.
//!
//! ## Deferred transitions
//!
//! Delays run on a logical clock owned by the session; the host calls
//! [`Session::advance`] with elapsed time. Starting or resetting cancels
//! pending transitions and bumps the session [`Generation`], and any task
//! that still fires against a newer generation does nothing.

pub mod card;
pub mod schedule;
pub mod snapshot;
mod engine;

pub use card::{Card, IgnoreReason, Phase, Selected, Selection};
pub use schedule::{Generation, ScheduledTask, Scheduler, TaskKind};
pub use snapshot::{CardView, Snapshot};
pub use engine::Session;
