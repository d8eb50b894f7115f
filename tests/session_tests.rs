//! Game session integration tests.
//!
//! These tests drive a session the way a presentation layer would: picks,
//! clock advances and resets, checking only observable state.

use std::time::Duration;

use memory_match::{
    pool, IgnoreReason, Phase, Selected, Session, SessionConfig, Symbol, Theme, Timing,
};
use proptest::prelude::*;

const FLIP: Duration = Duration::from_millis(1000);
const WIN: Duration = Duration::from_millis(500);

fn eight_symbols() -> Vec<Symbol> {
    pool(["A", "B", "C", "D", "E", "F", "G", "H"])
}

fn started(pairs: usize, seed: u64) -> Session {
    let mut session = Session::new(seed);
    session.start(pairs, &eight_symbols()).unwrap();
    session
}

/// The other card showing the same symbol as `position`.
fn partner(session: &Session, position: usize) -> usize {
    let symbol = &session.board()[position].symbol;
    session
        .board()
        .iter()
        .find(|c| c.position != position && &c.symbol == symbol)
        .map(|c| c.position)
        .unwrap()
}

/// A card whose symbol differs from `position`'s.
fn stranger(session: &Session, position: usize) -> usize {
    let symbol = &session.board()[position].symbol;
    session
        .board()
        .iter()
        .find(|c| &c.symbol != symbol)
        .map(|c| c.position)
        .unwrap()
}

/// Match every pair in board order.
fn solve(session: &mut Session) {
    for position in 0..session.board().len() {
        if session.is_revealed(position) {
            continue;
        }
        let other = partner(session, position);
        session.select_card(position);
        session.select_card(other);
    }
}

// =============================================================================
// Start
// =============================================================================

/// Starting with 8 pairs deals 16 cards, 8 symbols twice each.
#[test]
fn test_start_eight_pairs() {
    let session = started(8, 42);
    let snapshot = session.snapshot();

    assert_eq!(snapshot.cards.len(), 16);
    assert_eq!(snapshot.pair_count, 8);
    assert_eq!(snapshot.phase, Phase::InProgress);
    assert_eq!(snapshot.move_count, 0);
    assert_eq!(snapshot.matched_count, 0);
    assert!(snapshot.cards.iter().all(|c| !c.revealed && !c.matched));

    for symbol in eight_symbols() {
        let n = snapshot.cards.iter().filter(|c| c.symbol == symbol).count();
        assert_eq!(n, 2, "{symbol} should appear twice");
    }
    for (i, card) in snapshot.cards.iter().enumerate() {
        assert_eq!(card.position, i);
    }
}

/// A pool too small for the pair count is rejected and nothing starts.
#[test]
fn test_start_insufficient_symbols() {
    let mut session = Session::new(1);
    assert!(session.start(9, &eight_symbols()).is_err());
    assert_eq!(session.phase(), Phase::NotStarted);
    assert!(session.board().is_empty());
}

/// Start while a game is in progress discards it.
#[test]
fn test_start_is_reentrant() {
    let mut session = started(8, 42);
    let other = stranger(&session, 0);
    session.select_card(0);
    session.select_card(other);
    assert_eq!(session.move_count(), 1);

    session.start(4, &eight_symbols()).unwrap();
    assert_eq!(session.board().len(), 8);
    assert_eq!(session.move_count(), 0);
    assert!(session.selection().is_empty());
    assert!(!session.has_pending());
}

// =============================================================================
// Turns
// =============================================================================

/// A matching pair stays up, counts one move and clears the selection.
#[test]
fn test_match() {
    let mut session = started(8, 42);
    let other = partner(&session, 0);
    let symbol = session.board()[0].symbol.clone();

    assert_eq!(session.select_card(0), Selected::FirstPick);
    assert_eq!(session.move_count(), 0);
    assert!(session.is_revealed(0));

    assert_eq!(
        session.select_card(other),
        Selected::Match {
            symbol,
            completes_board: false
        }
    );
    assert_eq!(session.matched_count(), 1);
    assert!(session.selection().is_empty());
    assert_eq!(session.move_count(), 1);
    assert!(session.is_revealed(0));
    assert!(session.is_revealed(other));
    assert!(session.is_matched(other));

    // Not won: seven pairs left
    session.advance(WIN);
    assert_eq!(session.phase(), Phase::InProgress);
}

/// A mismatched pair stays up for the flip-back delay, then turns down.
#[test]
fn test_mismatch_flips_back() {
    let mut session = started(8, 42);
    let other = stranger(&session, 0);

    session.select_card(0);
    assert_eq!(session.select_card(other), Selected::Mismatch);
    assert_eq!(session.move_count(), 1);
    assert_eq!(session.snapshot().revealed().count(), 2);
    assert!(session.is_revealed(0));
    assert!(session.is_revealed(other));

    session.advance(FLIP - Duration::from_millis(1));
    assert!(session.is_revealed(0));

    assert_eq!(session.advance(Duration::from_millis(1)), 1);
    assert!(session.selection().is_empty());
    assert!(!session.is_revealed(0));
    assert!(!session.is_revealed(other));
    assert_eq!(session.move_count(), 1);
}

/// A third pick while a mismatch is showing is ignored.
#[test]
fn test_third_pick_during_flip_back_ignored() {
    let mut session = started(8, 42);
    let other = stranger(&session, 0);
    let third = (0..16).find(|&p| p != 0 && p != other).unwrap();

    session.select_card(0);
    session.select_card(other);
    let before = session.snapshot();

    assert_eq!(
        session.select_card(third),
        Selected::Ignored(IgnoreReason::AwaitingFlipBack)
    );
    assert_eq!(session.snapshot(), before);

    // Accepted again once the pair has flipped back
    session.advance(FLIP);
    assert_eq!(session.select_card(third), Selected::FirstPick);
}

/// Picking the selected card again is ignored.
#[test]
fn test_same_card_twice_ignored() {
    let mut session = started(8, 42);
    session.select_card(3);
    let before = session.snapshot();

    assert_eq!(
        session.select_card(3),
        Selected::Ignored(IgnoreReason::AlreadySelected)
    );
    assert_eq!(session.snapshot(), before);
}

/// Picking a matched card is ignored, including right after the match.
#[test]
fn test_matched_card_ignored() {
    let mut session = started(8, 42);
    let other = partner(&session, 0);
    session.select_card(0);
    session.select_card(other);
    let before = session.snapshot();

    assert_eq!(
        session.select_card(other),
        Selected::Ignored(IgnoreReason::AlreadyMatched)
    );
    assert_eq!(
        session.select_card(0),
        Selected::Ignored(IgnoreReason::AlreadyMatched)
    );
    assert_eq!(session.snapshot(), before);
}

/// Positions off the board are ignored.
#[test]
fn test_out_of_range_ignored() {
    let mut session = started(2, 42);
    assert_eq!(
        session.select_card(4),
        Selected::Ignored(IgnoreReason::OutOfRange)
    );
    assert!(!session.is_revealed(4));
}

// =============================================================================
// Win
// =============================================================================

/// The win is announced only after the win delay.
#[test]
fn test_win_after_delay() {
    let mut session = started(8, 42);
    solve(&mut session);

    assert_eq!(session.matched_count(), 8);
    assert_eq!(session.move_count(), 8);
    assert!(session.snapshot().all_matched());
    assert_eq!(session.phase(), Phase::InProgress);

    session.advance(WIN - Duration::from_millis(1));
    assert_eq!(session.phase(), Phase::InProgress);

    session.advance(Duration::from_millis(1));
    assert_eq!(session.phase(), Phase::Won);
    assert!(session.snapshot().cards.iter().all(|c| c.revealed && c.matched));
}

/// After winning, picks are ignored.
#[test]
fn test_picks_after_win_ignored() {
    let mut session = started(2, 42);
    solve(&mut session);
    session.advance(WIN);

    assert_eq!(session.phase(), Phase::Won);
    assert_eq!(
        session.select_card(0),
        Selected::Ignored(IgnoreReason::NotInProgress)
    );
}

/// The last match reports that it completes the board.
#[test]
fn test_last_match_completes_board() {
    let mut session = started(1, 42);
    session.select_card(0);
    assert_eq!(
        session.select_card(1),
        Selected::Match {
            symbol: Symbol::from("A"),
            completes_board: true
        }
    );
}

/// Win detection follows the current board after switching sizes.
#[test]
fn test_win_uses_current_pair_count() {
    let mut session = started(8, 42);
    solve(&mut session);
    session.advance(WIN);
    assert_eq!(session.phase(), Phase::Won);

    session
        .start(18, &Theme::Animals.symbols())
        .unwrap();
    assert_eq!(session.pair_count(), 18);

    // Eight matches no longer win
    for _ in 0..8 {
        let first = (0..36).find(|&p| !session.is_revealed(p)).unwrap();
        let other = partner(&session, first);
        session.select_card(first);
        session.select_card(other);
    }
    session.advance(WIN);
    assert_eq!(session.phase(), Phase::InProgress);

    solve(&mut session);
    session.advance(WIN);
    assert_eq!(session.phase(), Phase::Won);
    assert_eq!(session.move_count(), 18);
}

// =============================================================================
// Reset
// =============================================================================

/// Reset mid-turn cancels the pending flip-back; the old timer never fires.
#[test]
fn test_reset_cancels_pending_flip_back() {
    let mut session = started(8, 42);
    let other = stranger(&session, 0);
    session.select_card(0);
    session.select_card(other);
    assert!(session.has_pending());
    let old_generation = session.generation();

    session.reset().unwrap();
    assert!(!session.has_pending());
    assert_ne!(session.generation(), old_generation);
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(session.pair_count(), 8);

    // New turn in the new game, then let the old deadline pass
    session.select_card(5);
    assert_eq!(session.advance(FLIP * 2), 0);
    assert!(session.is_revealed(5));
    assert_eq!(session.selection().positions(), &[5]);
}

/// Reset after the final match cancels the pending win.
#[test]
fn test_reset_cancels_pending_win() {
    let mut session = started(2, 42);
    solve(&mut session);
    assert!(session.has_pending());

    session.reset().unwrap();
    session.advance(WIN);
    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(session.matched_count(), 0);
}

/// Reset replays the last start parameters.
#[test]
fn test_reset_keeps_parameters() {
    let mut session = started(4, 9);
    session.reset().unwrap();
    assert_eq!(session.pair_count(), 4);

    let symbols: Vec<_> = session.board().iter().map(|c| c.symbol.as_str()).collect();
    assert!(symbols.iter().all(|s| ["A", "B", "C", "D"].contains(s)));
}

// =============================================================================
// Configuration
// =============================================================================

/// Custom timing from a JSON config.
#[test]
fn test_custom_timing_from_config() {
    let config: SessionConfig = serde_json::from_str(
        r#"{
            "pair_count": 2,
            "symbols": ["A", "B"],
            "timing": { "flip_back_delay_ms": 200, "win_delay_ms": 0 }
        }"#,
    )
    .unwrap();

    let mut session = Session::new(3);
    session.start_with(&config).unwrap();
    assert_eq!(session.timing().flip_back_delay, Duration::from_millis(200));

    let other = stranger(&session, 0);
    session.select_card(0);
    session.select_card(other);
    assert_eq!(session.next_due_in(), Some(Duration::from_millis(200)));
    session.advance(Duration::from_millis(200));
    assert!(session.selection().is_empty());

    solve(&mut session);
    session.advance(Duration::ZERO);
    assert_eq!(session.phase(), Phase::Won);
}

/// Snapshots serialize for a renderer.
#[test]
fn test_snapshot_serializes() {
    let mut session = started(2, 42);
    session.select_card(0);

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["cards"].as_array().unwrap().len(), 4);
    assert_eq!(json["cards"][0]["revealed"], true);
    assert_eq!(json["phase"], "InProgress");
    assert_eq!(json["pair_count"], 2);
}

/// Immediate timing resolves on a zero advance.
#[test]
fn test_immediate_timing() {
    let mut session = Session::with_timing(Timing::immediate(), memory_match::GameRng::new(1));
    session.start(3, &eight_symbols()).unwrap();
    let other = stranger(&session, 0);
    session.select_card(0);
    session.select_card(other);

    assert_eq!(session.advance(Duration::ZERO), 1);
    assert!(session.selection().is_empty());
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Pick(usize),
    Wait(u64),
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0usize..18).prop_map(Op::Pick),
        3 => (0u64..1200).prop_map(Op::Wait),
        1 => Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn prop_session_invariants(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..200)) {
        let mut session = started(8, seed);

        for op in ops {
            let before = session.snapshot();
            match op {
                Op::Pick(position) => {
                    let outcome = session.select_card(position);
                    let after = session.snapshot();
                    if outcome.is_ignored() {
                        prop_assert_eq!(&after, &before);
                    } else if outcome.completes_turn() {
                        prop_assert_eq!(after.move_count, before.move_count + 1);
                    } else {
                        prop_assert_eq!(after.move_count, before.move_count);
                    }
                }
                Op::Wait(ms) => {
                    session.advance(Duration::from_millis(ms));
                    let after = session.snapshot();
                    prop_assert_eq!(after.move_count, before.move_count);
                    prop_assert!(after.matched_count >= before.matched_count);
                }
                Op::Reset => {
                    session.reset().unwrap();
                    prop_assert_eq!(session.move_count(), 0);
                    prop_assert!(!session.has_pending());
                }
            }

            let snapshot = session.snapshot();
            prop_assert!(session.selection().len() <= 2);
            let unmatched = snapshot.cards.iter().filter(|c| !c.matched).count();
            prop_assert_eq!(snapshot.matched_count * 2 + unmatched, snapshot.cards.len());
            for &p in session.selection().positions() {
                prop_assert!(!session.is_matched(p));
            }
            if snapshot.phase == Phase::Won {
                prop_assert!(snapshot.all_matched());
            }
        }
    }
}
