//! Game configuration options.

/// AI difficulty tier.
///
/// Difficulty controls how often the AI uses its card-hunting heuristic
/// instead of drawing at random. `Hard` is intentionally the weakest tier:
/// the AI always draws at random, so the human wins more often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// The AI plays its heuristic 80% of the time.
    #[default]
    Easy,
    /// The AI plays its heuristic half the time.
    Medium,
    /// The AI always draws at random.
    Hard,
}

impl Difficulty {
    /// Probability that a draw uses the heuristic rather than a uniformly
    /// random index.
    #[must_use]
    pub const fn heuristic_chance(self) -> f64 {
        match self {
            Self::Easy => 0.8,
            Self::Medium => 0.5,
            Self::Hard => 0.0,
        }
    }
}

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use oldmaid::{Difficulty, GameOptions};
///
/// let options = GameOptions::default().with_difficulty(Difficulty::Medium);
/// assert_eq!(options.difficulty, Difficulty::Medium);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// AI difficulty tier.
    pub difficulty: Difficulty,
}

impl GameOptions {
    /// Sets the AI difficulty.
    ///
    /// # Example
    ///
    /// ```
    /// use oldmaid::{Difficulty, GameOptions};
    ///
    /// let options = GameOptions::default().with_difficulty(Difficulty::Hard);
    /// assert_eq!(options.difficulty, Difficulty::Hard);
    /// ```
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}
