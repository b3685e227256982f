//! Entropy sources for shuffling.
//!
//! [`Deck::shuffle`](crate::Deck::shuffle) runs Fisher–Yates and asks a
//! [`ShuffleSource`] for every swap partner. Production code uses a seeded
//! [`ChaCha8Rng`]; tests can pass [`Identity`] or a scripted [`FromFn`] to get
//! exact, reproducible permutations.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Supplies the swap indices for a Fisher–Yates shuffle.
pub trait ShuffleSource {
    /// Returns an index in `0..=upper`.
    ///
    /// The shuffle swaps position `upper` with the returned position.
    fn pick(&mut self, upper: usize) -> usize;
}

impl ShuffleSource for ChaCha8Rng {
    fn pick(&mut self, upper: usize) -> usize {
        self.random_range(0..=upper)
    }
}

impl<S: ShuffleSource + ?Sized> ShuffleSource for &mut S {
    fn pick(&mut self, upper: usize) -> usize {
        (**self).pick(upper)
    }
}

/// A source that never moves a card, making the shuffle the identity
/// permutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl ShuffleSource for Identity {
    fn pick(&mut self, upper: usize) -> usize {
        upper
    }
}

/// A source backed by a closure.
///
/// Picks larger than `upper` are clamped to `upper`.
///
/// # Example
///
/// ```
/// use war::{Deck, FromFn};
///
/// // Swap every position with the bottom card.
/// let mut deck = Deck::standard();
/// deck.shuffle(&mut FromFn::new(|_| 0));
/// assert_eq!(deck.size(), 52);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<F: FnMut(usize) -> usize> FromFn<F> {
    /// Wraps a closure that maps `upper` to a swap index.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: FnMut(usize) -> usize> ShuffleSource for FromFn<F> {
    fn pick(&mut self, upper: usize) -> usize {
        (self.0)(upper).min(upper)
    }
}
