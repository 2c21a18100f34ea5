//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing a card from the opponent's hand.
///
/// A rejected draw leaves the game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The game has already ended.
    #[error("the game has already ended")]
    GameOver,
    /// It is the other side's turn to draw.
    #[error("it is the other side's turn to draw")]
    NotYourTurn,
    /// The opponent has no cards left to draw from.
    #[error("the opponent has no cards left to draw from")]
    EmptyOpponentHand,
    /// The target index is outside the opponent's hand.
    #[error("the target index is outside the opponent's hand")]
    IndexOutOfRange,
}
