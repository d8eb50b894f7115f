//! Deferred transitions on a logical clock.
//!
//! The session never sleeps. It records what should happen and when, and the
//! host advances the clock (from a frame loop, a timer, or a test). Every task
//! is tagged with the generation of the game it belongs to, so a task that
//! outlives its game is recognised and dropped.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Version tag of a dealt game. Bumped on every start and reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// What a deferred task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Turn a mismatched pair face-down.
    FlipBack,
    /// Declare the game won.
    AnnounceWin,
}

/// A pending transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    /// What to do.
    pub kind: TaskKind,
    /// Game the task was scheduled against.
    pub generation: Generation,
    /// Clock reading at which the task is due.
    pub due_at: Duration,
}

/// Pending tasks plus the clock they run on.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether a task of `kind` is pending.
    #[must_use]
    pub fn has(&self, kind: TaskKind) -> bool {
        self.tasks.iter().any(|t| t.kind == kind)
    }

    /// Schedule `kind` to fire `delay` from now.
    pub fn schedule(&mut self, kind: TaskKind, generation: Generation, delay: Duration) {
        self.tasks.push(ScheduledTask {
            kind,
            generation,
            due_at: self.now.saturating_add(delay),
        });
    }

    /// Drop every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        dropped
    }

    /// Time until the earliest pending task is due.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.tasks
            .iter()
            .map(|t| t.due_at.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward and take every task now due, earliest first.
    ///
    /// Tasks due at the same instant come out in scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledTask> {
        self.now = self.now.saturating_add(elapsed);

        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due_at <= now);
        self.tasks = pending;

        due.sort_by_key(|t| t.due_at);
        due
    }
}
