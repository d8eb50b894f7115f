//! The game session state machine.

use std::time::Duration;

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, instrument, trace};

use super::card::{Card, IgnoreReason, Phase, Selected, Selection};
use super::schedule::{Generation, ScheduledTask, Scheduler, TaskKind};
use super::snapshot::{CardView, Snapshot};
use crate::core::{DeckError, Difficulty, GameRng, SessionConfig, Timing};
use crate::deck::{generate_deck, Symbol, Theme};

/// Internal turn progress while a game is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnState {
    WaitingForFirstPick,
    WaitingForSecondPick,
    ResolvingFlipBack,
}

/// Parameters of the last successful start, replayed by `reset`.
#[derive(Clone, Debug)]
struct StartParams {
    pair_count: usize,
    symbols: Vec<Symbol>,
}

/// One player's memory game.
///
/// The session owns the board, the selection, the matched set and every
/// pending deferred transition. Presentation code reads it through
/// [`Session::snapshot`] and the query methods and drives it with
/// [`Session::start`], [`Session::select_card`], [`Session::reset`] and
/// [`Session::advance`].
///
/// Cloning is cheap: the board is a persistent vector.
#[derive(Clone, Debug)]
pub struct Session {
    timing: Timing,
    rng: GameRng,
    params: Option<StartParams>,

    board: Vector<Card>,
    selection: Selection,
    matched: FxHashSet<Symbol>,
    move_count: u32,
    phase: Phase,

    generation: Generation,
    scheduler: Scheduler,
}

impl Session {
    /// Create an unstarted session with default timing.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_timing(Timing::default(), GameRng::new(seed))
    }

    /// Create an unstarted session with explicit timing and RNG.
    #[must_use]
    pub fn with_timing(timing: Timing, rng: GameRng) -> Self {
        Self {
            timing,
            rng,
            params: None,
            board: Vector::new(),
            selection: Selection::new(),
            matched: FxHashSet::default(),
            move_count: 0,
            phase: Phase::NotStarted,
            generation: Generation::default(),
            scheduler: Scheduler::new(),
        }
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Deal a new game, discarding whatever was in play.
    ///
    /// On error the session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns the [`DeckError`] from dealing the deck.
    #[instrument(skip(self, symbol_pool), fields(pool_len = symbol_pool.len()))]
    pub fn start(&mut self, pair_count: usize, symbol_pool: &[Symbol]) -> Result<(), DeckError> {
        let mut rng = self.rng.clone();
        let mut deal_rng = rng.fork();
        let deck = generate_deck(pair_count, symbol_pool, &mut deal_rng)?;

        self.rng = rng;
        self.params = Some(StartParams {
            pair_count,
            symbols: symbol_pool.to_vec(),
        });
        self.install(deck);
        Ok(())
    }

    /// Deal a new game from a configuration, adopting its timing.
    ///
    /// # Errors
    ///
    /// Returns the [`DeckError`] from dealing the deck.
    pub fn start_with(&mut self, config: &SessionConfig) -> Result<(), DeckError> {
        self.start(config.pair_count, &config.symbols)?;
        self.timing = config.timing;
        Ok(())
    }

    /// Deal a preset board size from a built-in theme.
    ///
    /// # Errors
    ///
    /// Fails if the theme has too few symbols for the difficulty.
    pub fn start_difficulty(&mut self, difficulty: Difficulty, theme: Theme) -> Result<(), DeckError> {
        self.start(difficulty.pair_count(), &theme.symbols())
    }

    /// Deal again with the parameters of the last start.
    ///
    /// Does nothing if the session was never started.
    ///
    /// # Errors
    ///
    /// Returns the [`DeckError`] from dealing the deck.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), DeckError> {
        match self.params.clone() {
            Some(params) => self.start(params.pair_count, &params.symbols),
            None => {
                trace!("reset before first start");
                Ok(())
            }
        }
    }

    /// Turn the card at `position` face-up.
    ///
    /// Picks that make no sense right now are ignored without touching any
    /// state; the returned [`Selected`] says what happened.
    #[instrument(level = "debug", skip(self), fields(generation = %self.generation))]
    pub fn select_card(&mut self, position: usize) -> Selected {
        if let Some(reason) = self.reject_reason(position) {
            trace!(?reason, "pick ignored");
            return Selected::Ignored(reason);
        }

        let first = match self.turn_state() {
            TurnState::WaitingForFirstPick => {
                self.selection.push(position);
                return Selected::FirstPick;
            }
            TurnState::WaitingForSecondPick => self.selection.positions()[0],
            // Already rejected above
            TurnState::ResolvingFlipBack => {
                return Selected::Ignored(IgnoreReason::AwaitingFlipBack)
            }
        };

        self.selection.push(position);
        self.move_count += 1;

        let first_symbol = &self.board[first].symbol;
        let second_symbol = &self.board[position].symbol;

        if first_symbol == second_symbol {
            let symbol = first_symbol.clone();
            self.matched.insert(symbol.clone());
            self.selection.clear();

            let completes_board = self.matched.len() == self.pair_count();
            debug!(%symbol, moves = self.move_count, matched = self.matched.len(), "pair matched");
            if completes_board {
                self.scheduler
                    .schedule(TaskKind::AnnounceWin, self.generation, self.timing.win_delay);
            }
            Selected::Match {
                symbol,
                completes_board,
            }
        } else {
            debug!(first, second = position, moves = self.move_count, "mismatch");
            self.scheduler
                .schedule(TaskKind::FlipBack, self.generation, self.timing.flip_back_delay);
            Selected::Mismatch
        }
    }

    /// Advance the session clock, firing every deferred transition now due.
    ///
    /// Returns how many transitions took effect. Tasks left over from an
    /// earlier game are dropped.
    #[instrument(level = "trace", skip(self))]
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let due = self.scheduler.advance(elapsed);
        due.into_iter().filter(|&task| self.fire(task)).count()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed turns this game.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Pairs found this game.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Pairs on the current board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.board.len() / 2
    }

    /// The dealt board.
    #[must_use]
    pub fn board(&self) -> &Vector<Card> {
        &self.board
    }

    /// Positions face-up this turn.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Version tag of the current game.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Delays in effect.
    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Whether a deferred transition is pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.scheduler.is_empty()
    }

    /// Time until the next deferred transition is due.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.scheduler.next_due_in()
    }

    /// Whether the card at `position` is face-up.
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.selection.contains(position) || self.is_matched(position)
    }

    /// Whether the card at `position` belongs to a found pair.
    #[must_use]
    pub fn is_matched(&self, position: usize) -> bool {
        self.board
            .get(position)
            .is_some_and(|card| self.matched.contains(&card.symbol))
    }

    /// Render-ready view of the whole session.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let cards = self
            .board
            .iter()
            .map(|card| {
                let matched = self.matched.contains(&card.symbol);
                CardView {
                    position: card.position,
                    symbol: card.symbol.clone(),
                    revealed: matched || self.selection.contains(card.position),
                    matched,
                }
            })
            .collect();

        Snapshot {
            cards,
            move_count: self.move_count,
            matched_count: self.matched.len(),
            pair_count: self.pair_count(),
            phase: self.phase,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn install(&mut self, deck: Vec<Symbol>) {
        let cancelled = self.scheduler.cancel_all();
        self.generation = self.generation.next();

        self.board = deck
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| Card::new(position, symbol))
            .collect();
        self.selection.clear();
        self.matched.clear();
        self.move_count = 0;
        self.phase = Phase::InProgress;

        debug!(
            generation = %self.generation,
            pairs = self.pair_count(),
            cancelled,
            "new game dealt"
        );
    }

    fn turn_state(&self) -> TurnState {
        match self.selection.len() {
            0 => TurnState::WaitingForFirstPick,
            1 => TurnState::WaitingForSecondPick,
            _ => TurnState::ResolvingFlipBack,
        }
    }

    fn reject_reason(&self, position: usize) -> Option<IgnoreReason> {
        if self.phase != Phase::InProgress {
            return Some(IgnoreReason::NotInProgress);
        }
        if self.turn_state() == TurnState::ResolvingFlipBack {
            return Some(IgnoreReason::AwaitingFlipBack);
        }
        if position >= self.board.len() {
            return Some(IgnoreReason::OutOfRange);
        }
        if self.is_matched(position) {
            return Some(IgnoreReason::AlreadyMatched);
        }
        if self.selection.contains(position) {
            return Some(IgnoreReason::AlreadySelected);
        }
        None
    }

    /// Apply a due task. Returns false for stale tasks.
    fn fire(&mut self, task: ScheduledTask) -> bool {
        if task.generation != self.generation {
            trace!(
                task = ?task.kind,
                scheduled = %task.generation,
                current = %self.generation,
                "stale task dropped"
            );
            return false;
        }

        match task.kind {
            TaskKind::FlipBack => {
                debug!(positions = ?self.selection.positions(), "flip back");
                self.selection.clear();
            }
            TaskKind::AnnounceWin => {
                if self.phase == Phase::InProgress && self.matched.len() == self.pair_count() {
                    self.phase = Phase::Won;
                    debug!(moves = self.move_count, "game won");
                }
            }
        }
        true
    }
}
