//! Pack construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, JokerColor, PACK_SIZE, Suit};

/// Builds the canonical 54-card pack: 13 ranks of each suit in suit-major,
/// rank-minor order, followed by the red and black jokers.
///
/// The layout is deterministic, so card ids map 1:1 onto positions here.
///
/// # Example
///
/// ```
/// let pack = oldmaid::build_pack();
/// assert_eq!(pack.len(), oldmaid::PACK_SIZE);
/// assert_eq!(pack[0].id, 1);
/// assert!(pack[53].is_joker());
/// ```
#[must_use]
pub fn build_pack() -> Vec<Card> {
    let mut cards = Vec::with_capacity(PACK_SIZE);

    for suit in Suit::all() {
        for rank in 1..=13 {
            cards.push(Card::suited(suit, rank));
        }
    }

    cards.push(Card::joker(JokerColor::Red));
    cards.push(Card::joker(JokerColor::Black));

    cards
}

/// Returns a uniformly shuffled copy of `pack`. The input is left untouched.
#[must_use]
pub fn shuffled<R: Rng + ?Sized>(pack: &[Card], rng: &mut R) -> Vec<Card> {
    let mut cards = pack.to_vec();
    cards.shuffle(rng);
    cards
}
