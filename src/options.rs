//! Game configuration options.

/// Configuration options for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use war::GameOptions;
///
/// let options = GameOptions::default().with_max_rounds(500);
/// assert_eq!(options.max_rounds, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of rounds after which the game is stopped.
    ///
    /// A backstop only: collected cards are shuffled, so games end on their
    /// own long before the default limit. When the limit is reached the
    /// player holding more cards wins; equal counts are a draw. 0 disables
    /// the limit, which can loop forever with a [`ShuffleSource`] that never
    /// reorders cards, such as [`Identity`].
    ///
    /// [`ShuffleSource`]: crate::ShuffleSource
    /// [`Identity`]: crate::Identity
    pub max_rounds: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { max_rounds: 100_000 }
    }
}

impl GameOptions {
    /// Sets the round limit.
    ///
    /// # Example
    ///
    /// ```
    /// use war::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(0);
    /// assert_eq!(options.max_rounds, 0);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
