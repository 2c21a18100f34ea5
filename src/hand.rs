//! Hand representation, dealing, and pair resolution.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Two cards of the same rank removed from a hand together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    /// The matched cards, in the order they sat in the hand.
    pub cards: [Card; 2],
}

impl Pair {
    /// The shared rank of the pair.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.cards[0].rank
    }
}

impl core::fmt::Display for Pair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "pair of {}s", self.cards[0].rank_label())
    }
}

/// One side's hand: an ordered sequence of cards.
///
/// Order only matters for positional draws; it carries no gameplay meaning
/// and is never reshuffled during play.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards, in the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Splits a shuffled pack into two contiguous halves: the first half is
    /// the player's hand, the rest the AI's. No further shuffling happens at
    /// deal time.
    #[must_use]
    pub fn deal(mut cards: Vec<Card>) -> (Self, Self) {
        let back = cards.split_off(cards.len() / 2);
        (Self::from_cards(cards), Self::from_cards(back))
    }

    /// Appends a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`, or `None` if out of range.
    pub fn take_card(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many jokers the hand holds (0, 1, or 2).
    #[must_use]
    pub fn joker_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_joker()).count()
    }

    /// Removes every matched pair from the hand and returns the pairs in
    /// formation order.
    ///
    /// Each scan groups the non-joker cards by rank and, for ranks low to
    /// high, removes two cards at a time in the order they sit in the hand;
    /// an odd count leaves one card of that rank behind. Scans repeat until
    /// one finds no rank with two or more cards. Jokers carry rank 0 and are
    /// never grouped, so they survive every scan.
    ///
    /// Calling this on an already-resolved hand returns no pairs and leaves
    /// the hand unchanged.
    pub fn discard_pairs(&mut self) -> Vec<Pair> {
        let mut pairs = Vec::new();

        loop {
            // Indices of each rank, in hand order.
            let mut by_rank: [Vec<usize>; 14] = core::array::from_fn(|_| Vec::new());
            for (index, card) in self.cards.iter().enumerate() {
                if !card.is_joker() {
                    by_rank[card.rank as usize].push(index);
                }
            }

            let mut removed: Vec<usize> = Vec::new();
            for indices in &by_rank[1..] {
                for chunk in indices.chunks_exact(2) {
                    pairs.push(Pair {
                        cards: [self.cards[chunk[0]], self.cards[chunk[1]]],
                    });
                    removed.extend_from_slice(chunk);
                }
            }

            if removed.is_empty() {
                break;
            }

            // Remove back to front so earlier indices stay valid.
            removed.sort_unstable_by(|a, b| b.cmp(a));
            for index in removed {
                self.cards.remove(index);
            }
        }

        pairs
    }
}
