//! The standard 52-card deck.

use core::fmt;

use crate::card::{Card, DECK_SIZE, Face, Suit};
use crate::error::DeckError;
use crate::shuffle::ShuffleSource;

/// An ordered stack of cards.
///
/// The top of the deck is the end of the underlying sequence: cards are
/// dealt from and added to the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck holding the standard 52 cards in build order.
    #[must_use]
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.build();
        deck
    }

    /// Replaces the contents with the standard 52 cards.
    ///
    /// Cards are laid down suit by suit (diamonds, clubs, hearts, spades),
    /// Ace to King within each suit, so the King of spades ends on top.
    pub fn build(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);

        for suit in Suit::ALL {
            for face in Face::ALL {
                self.cards.push(Card::new(suit, face));
            }
        }
    }

    /// Shuffles the deck in place with Fisher–Yates.
    ///
    /// Walks from the top index down to 1, swapping each position with the
    /// index the source picks from `0..=i`.
    pub fn shuffle<S: ShuffleSource + ?Sized>(&mut self, source: &mut S) {
        for i in (1..self.cards.len()).rev() {
            let j = source.pick(i).min(i);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards. The deck is left
    /// untouched.
    pub fn deal_top(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Puts a card on top of the deck.
    pub fn add_card(&mut self, card: Card) -> &mut Self {
        self.cards.push(card);
        self
    }

    /// Puts cards on top of the deck in iteration order, so the last card
    /// ends on top.
    pub fn add_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) -> &mut Self {
        self.cards.extend(cards);
        self
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Alias for [`Deck::size`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    /// Yields the cards from bottom to top.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl Extend<Card> for Deck {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl fmt::Display for Deck {
    /// Lists the cards top first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("(empty)");
        }

        for (i, card) in self.cards.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
