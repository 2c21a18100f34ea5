//! AI draw-index selection.
//!
//! The AI picks which of the opponent's cards to draw. Each difficulty tier
//! mixes a card-hunting heuristic with uniformly random draws; see
//! [`Difficulty`] for the mix.

use rand::Rng;

use crate::card::JOKER_RANK;
use crate::hand::Hand;
use crate::options::Difficulty;

/// Number of distinct rank values (0 for jokers, 1..=13 ranked).
const RANK_SLOTS: usize = 14;

fn rank_counts(hand: &Hand) -> [usize; RANK_SLOTS] {
    let mut counts = [0; RANK_SLOTS];
    for card in hand.cards() {
        counts[card.rank as usize] += 1;
    }
    counts
}

/// Picks the index the AI draws from `opponent`, mixing
/// [`optimal_draw_index`] with a uniformly random pick according to
/// `difficulty`.
///
/// # Panics
///
/// Panics if `opponent` is empty; the turn engine only calls this for a
/// non-empty opponent hand.
pub fn choose_draw_index<R: Rng + ?Sized>(
    difficulty: Difficulty,
    rng: &mut R,
    ai_hand: &Hand,
    opponent: &Hand,
) -> usize {
    if rng.random_bool(difficulty.heuristic_chance()) {
        optimal_draw_index(rng, ai_hand, opponent)
    } else {
        rng.random_range(0..opponent.len())
    }
}

/// The heuristic half of [`choose_draw_index`].
///
/// In priority order: a card whose rank the AI already counts among its own
/// ranks, provided that card is a joker (with jokers at rank 0 this only
/// fires when the AI itself holds one, and it lands on the same card the
/// joker rule below picks); otherwise the first joker in the opponent's
/// hand; otherwise the first card of the rank most frequent within the
/// opponent's own hand, ties going to the rank seen first in hand order;
/// otherwise a uniformly random index.
///
/// # Panics
///
/// Panics if `opponent` is empty.
pub fn optimal_draw_index<R: Rng + ?Sized>(rng: &mut R, ai_hand: &Hand, opponent: &Hand) -> usize {
    let ai_counts = rank_counts(ai_hand);

    for (index, card) in opponent.cards().iter().enumerate() {
        if ai_counts[card.rank as usize] > 0 && card.rank == JOKER_RANK {
            return index;
        }
    }

    for (index, card) in opponent.cards().iter().enumerate() {
        if card.is_joker() {
            return index;
        }
    }

    let opponent_counts = rank_counts(opponent);
    let mut target_rank = None;
    let mut target_count = 0;
    for card in opponent.cards() {
        let count = opponent_counts[card.rank as usize];
        if count > target_count {
            target_count = count;
            target_rank = Some(card.rank);
        }
    }

    if let Some(rank) = target_rank {
        for (index, card) in opponent.cards().iter().enumerate() {
            if card.rank == rank {
                return index;
            }
        }
    }

    rng.random_range(0..opponent.len())
}
