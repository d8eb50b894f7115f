//! Dealing a shuffled, paired deck.

use rustc_hash::FxHashSet;
use tracing::{debug, instrument};

use super::symbol::Symbol;
use crate::core::{DeckError, GameRng};

/// Deal `2 * pair_count` symbols: the first `pair_count` distinct symbols of
/// the pool, each twice, in uniformly random order.
///
/// Pool order decides which symbols play; only the layout is random.
/// Repeated faces in the pool count once.
///
/// # Errors
///
/// - [`DeckError::NoPairs`] if `pair_count` is zero.
/// - [`DeckError::InsufficientSymbols`] if the pool has fewer than
///   `pair_count` distinct symbols.
#[instrument(level = "debug", skip(symbol_pool, rng), fields(pool_len = symbol_pool.len()))]
pub fn generate_deck(
    pair_count: usize,
    symbol_pool: &[Symbol],
    rng: &mut GameRng,
) -> Result<Vec<Symbol>, DeckError> {
    if pair_count == 0 {
        return Err(DeckError::NoPairs);
    }

    let chosen = first_distinct(symbol_pool, pair_count);
    if chosen.len() < pair_count {
        return Err(DeckError::InsufficientSymbols {
            requested: pair_count,
            available: distinct_count(symbol_pool),
        });
    }

    let mut deck = Vec::with_capacity(pair_count * 2);
    for symbol in chosen {
        deck.push(symbol.clone());
        deck.push(symbol.clone());
    }
    rng.shuffle(&mut deck);

    debug!(cards = deck.len(), "dealt deck");
    Ok(deck)
}

/// Number of distinct symbols in a pool.
#[must_use]
pub fn distinct_count(symbol_pool: &[Symbol]) -> usize {
    symbol_pool.iter().collect::<FxHashSet<_>>().len()
}

fn first_distinct(symbol_pool: &[Symbol], limit: usize) -> Vec<&Symbol> {
    let mut seen = FxHashSet::default();
    symbol_pool
        .iter()
        .filter(|symbol| seen.insert(*symbol))
        .take(limit)
        .collect()
}
