//! Result types reported by the engine.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Side;
use crate::hand::Pair;

/// The final outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// The side that emptied its hand.
    pub winner: Side,
    /// Whether the losing side was left holding both jokers. Narrative
    /// flavor only; it never decides the winner.
    pub loser_held_both_jokers: bool,
}

/// Everything that happened during one draw action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    /// The card taken from the opponent's hand.
    pub card: Card,
    /// Pairs discarded from the acting side's hand as a result, in
    /// formation order.
    pub pairs: Vec<Pair>,
    /// The game outcome, if this draw ended the game.
    pub outcome: Option<GameOutcome>,
}
