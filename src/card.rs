//! Card types for the 54-card pack.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in pack order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs]
    }

    const fn ordinal(self) -> u8 {
        match self {
            Self::Spades => 0,
            Self::Hearts => 1,
            Self::Diamonds => 2,
            Self::Clubs => 3,
        }
    }

    /// Lowercase suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
        }
    }
}

/// Marker distinguishing the two jokers. Presentation only; the two jokers
/// are identical for pairing purposes (they never pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JokerColor {
    /// The red joker (id 53).
    Red,
    /// The black joker (id 54).
    Black,
}

impl JokerColor {
    /// Lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

/// The printed face of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// A ranked card of one of the four suits.
    Suited(Suit),
    /// One of the two jokers.
    Joker(JokerColor),
}

/// Rank value carried by jokers. Rank 0 never matches a populated rank, so
/// jokers are structurally unable to pair.
pub const JOKER_RANK: u8 = 0;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Stable identifier in `1..=54`, for presentation lookup (card art,
    /// sort keys). Never consulted by game logic.
    pub id: u8,
    /// Pairing rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King,
    /// [`JOKER_RANK`] for jokers).
    pub rank: u8,
    /// The printed face of the card.
    pub face: Face,
}

impl Card {
    /// Creates a ranked card. The id is derived from the pack layout
    /// (suit-major, rank-minor).
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but yield ids outside the standard pack.
    #[must_use]
    pub const fn suited(suit: Suit, rank: u8) -> Self {
        Self {
            id: suit.ordinal() * 13 + rank,
            rank,
            face: Face::Suited(suit),
        }
    }

    /// Creates one of the two jokers.
    #[must_use]
    pub const fn joker(color: JokerColor) -> Self {
        let id = match color {
            JokerColor::Red => 53,
            JokerColor::Black => 54,
        };
        Self {
            id,
            rank: JOKER_RANK,
            face: Face::Joker(color),
        }
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == JOKER_RANK
    }

    /// Short rank label ("A", "2".."10", "J", "Q", "K", "Joker").
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "Joker",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face {
            Face::Suited(suit) => write!(f, "{} of {}", self.rank_label(), suit.name()),
            Face::Joker(color) => write!(f, "Joker ({})", color.name()),
        }
    }
}

/// Number of cards in the pack (52 ranked cards plus 2 jokers).
pub const PACK_SIZE: usize = 54;
