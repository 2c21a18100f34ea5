//! Engine events for presentation layers.
//!
//! Every draw and every pair discard emits one event; the order of the feed
//! is the order the engine detected them. A presentation layer drains the
//! feed with [`Game::drain_events`](crate::Game::drain_events) and renders
//! it however it likes (battle log, animations, narration).

use crate::card::Card;
use crate::game::Side;
use crate::hand::Pair;

/// Something observable that happened inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A side drew a card from its opponent's hand.
    CardDrawn {
        /// The side that drew.
        side: Side,
        /// The card it now holds.
        card: Card,
    },
    /// A side discarded a matched pair from its own hand.
    PairDiscarded {
        /// The side that discarded.
        side: Side,
        /// The discarded pair.
        pair: Pair,
    },
    /// The game ended.
    GameEnded {
        /// The side that emptied its hand.
        winner: Side,
        /// Whether the loser was left holding both jokers.
        loser_held_both_jokers: bool,
    },
}
