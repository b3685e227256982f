//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in build order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Lower-case name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card face, from Ace up to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    /// Ace (rank 1).
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (rank 11).
    Jack,
    /// Queen (rank 12).
    Queen,
    /// King (rank 13).
    King,
}

impl Face {
    /// All faces in build order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the comparison rank of the face (Ace = 1, King = 13).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
        }
    }

    /// Returns the printed label of the face.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Looks up the face with the given rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::RankOutOfRange`] if `rank` is not in `1..=13`.
    pub fn from_rank(rank: u8) -> Result<Self, CardError> {
        Self::ALL
            .iter()
            .copied()
            .find(|face| face.rank() == rank)
            .ok_or(CardError::RankOutOfRange(rank))
    }

    /// Parses a face label such as `"A"`, `"7"` or `"Q"`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownFace`] for anything that is not one of the
    /// thirteen labels.
    ///
    /// # Example
    ///
    /// ```
    /// use war::Face;
    ///
    /// assert_eq!(Face::from_label("J").unwrap().rank(), 11);
    /// assert!(Face::from_label("joker").is_err());
    /// ```
    pub fn from_label(label: &str) -> Result<Self, CardError> {
        Self::ALL
            .iter()
            .copied()
            .find(|face| face.label() == label)
            .ok_or_else(|| CardError::UnknownFace(label.into()))
    }
}

impl FromStr for Face {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// The rank is not stored; it is always derived from the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The face of the card.
    pub face: Face,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, face: Face) -> Self {
        Self { suit, face }
    }

    /// Returns the comparison rank of the card (1 = Ace, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.face.rank()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
