//! Error types for deck and game operations.

use thiserror::Error;

use crate::player::Player;

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("the deck is empty")]
    Empty,
}

/// Errors that can occur when constructing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The face label is not one of A, 2-10, J, Q, K.
    #[error("unknown face label {0:?}")]
    UnknownFace(String),
    /// The rank is outside 1..=13.
    #[error("rank {0} is outside 1..=13")]
    RankOutOfRange(u8),
}

/// Errors that can occur while playing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A battle card was dealt from an empty deck.
    ///
    /// Rounds only start while both decks hold cards, so this means the
    /// card count invariant was broken.
    #[error("{0} had no battle card to deal")]
    EmptyDeck(Player),
    /// The game has already ended.
    #[error("the game has already ended")]
    Finished,
}
