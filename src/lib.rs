//! A standard 52-card deck and a simulator for the card game War.
//!
//! The crate provides a [`Deck`] that can be built, shuffled, dealt from and
//! refilled, and a [`Game`] that plays two decks against each other until one
//! player holds every card.
//!
//! Shuffling draws its randomness from a [`ShuffleSource`]. Games created with
//! [`Game::new`] use a seeded ChaCha8 RNG; tests can inject [`Identity`] or a
//! scripted [`FromFn`] for exact permutations.
//!
//! # Example
//!
//! ```
//! use war::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 7);
//! let result = game.run().unwrap();
//! assert_eq!(game.total_cards(), 104);
//! println!("{result}");
//! ```
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError, GameError};
pub use game::{Game, GameState, RoundState};
pub use options::GameOptions;
pub use player::Player;
pub use result::{Ending, GameResult, Outcome, Resolution, RoundReport};
pub use shuffle::{FromFn, Identity, ShuffleSource};
