//! Game state types.

use crate::result::GameOutcome;

/// One of the two sides of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Ai,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Ai,
            Self::Ai => Self::Player,
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Player => f.write_str("Player"),
            Self::Ai => f.write_str("AI"),
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to draw from the AI's hand.
    PlayerTurn,
    /// Waiting for the AI to draw from the player's hand.
    AiTurn,
    /// The game has ended.
    Over(GameOutcome),
}

impl GameState {
    /// The side whose turn it is, or `None` once the game is over.
    #[must_use]
    pub const fn turn(self) -> Option<Side> {
        match self {
            Self::PlayerTurn => Some(Side::Player),
            Self::AiTurn => Some(Side::Ai),
            Self::Over(_) => None,
        }
    }

    /// The turn state in which `side` draws.
    #[must_use]
    pub const fn turn_of(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerTurn,
            Side::Ai => Self::AiTurn,
        }
    }
}
