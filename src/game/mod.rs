//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{Ending, GameResult, Outcome, RoundReport};
use crate::shuffle::ShuffleSource;

mod round;
pub mod state;

pub use state::{GameState, RoundState};

/// A game of War between two players.
///
/// The game owns both decks, the cards on the table during a round, and the
/// shuffle source used to mix the cards a player collects. Cards are only
/// ever moved between decks and table, so the total number of cards never
/// changes.
#[derive(Debug, Clone)]
pub struct Game<S = ChaCha8Rng> {
    /// Player decks, indexed by seat.
    decks: [Deck; 2],
    /// Cards wagered in the current round, indexed by seat.
    table: [Vec<Card>; 2],
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Rounds played so far.
    rounds: u32,
    /// Rounds that went to war so far.
    wars: u32,
    /// Total number of cards in the game.
    total: usize,
    /// Final result once the game is over.
    result: Option<GameResult>,
    /// Shuffles collected cards before they go back on a deck.
    source: S,
}

impl Game {
    /// Creates a new game with two freshly built decks shuffled by a seeded
    /// RNG. The same RNG later mixes collected cards.
    ///
    /// # Example
    ///
    /// ```
    /// use war::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let result = game.run().unwrap();
    /// println!("{result}");
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<S: ShuffleSource> Game<S> {
    /// Creates a new game, shuffling both decks one after the other with
    /// `source` and keeping it for the rest of the game.
    #[must_use]
    pub fn with_source(options: GameOptions, mut source: S) -> Self {
        let mut one = Deck::standard();
        let mut two = Deck::standard();
        one.shuffle(&mut source);
        two.shuffle(&mut source);
        Self::from_decks(options, one, two, source)
    }

    /// Creates a game from decks as they are, without building or shuffling
    /// them. `source` only mixes collected cards.
    ///
    /// If either deck is empty the game is already over.
    #[must_use]
    pub fn from_decks(options: GameOptions, one: Deck, two: Deck, source: S) -> Self {
        let total = one.size() + two.size();
        let mut game = Self {
            decks: [one, two],
            table: [Vec::new(), Vec::new()],
            options,
            state: GameState::InProgress,
            rounds: 0,
            wars: 0,
            total,
            result: None,
            source,
        };
        game.finish_if_over(None);
        game
    }

    /// Plays rounds until the game is over.
    ///
    /// # Errors
    ///
    /// Returns an error if a deck runs out outside of a war, which means the
    /// card count invariant was broken.
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        self.run_with(|_, _| {})
    }

    /// Plays rounds until the game is over, calling `observe` after each one.
    ///
    /// # Errors
    ///
    /// Same as [`Game::run`].
    pub fn run_with<F>(&mut self, mut observe: F) -> Result<GameResult, GameError>
    where
        F: FnMut(&RoundReport, &Self),
    {
        loop {
            if let Some(result) = self.result {
                return Ok(result);
            }
            let report = self.play_round()?;
            observe(&report, self);
        }
    }

    /// Returns the deck of the given player.
    #[must_use]
    pub const fn deck(&self, player: Player) -> &Deck {
        &self.decks[player.index()]
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the result, if the game is over.
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds
    }

    /// Returns the number of rounds that went to war.
    #[must_use]
    pub const fn wars_fought(&self) -> u32 {
        self.wars
    }

    /// Returns the number of cards wagered but not yet collected.
    ///
    /// This is always 0 between rounds.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.table.iter().map(Vec::len).sum()
    }

    /// Returns the total number of cards in the game.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.total
    }

    fn held_cards(&self) -> usize {
        self.decks.iter().map(Deck::size).sum::<usize>() + self.cards_in_play()
    }

    fn debug_check_conservation(&self) {
        debug_assert_eq!(self.held_cards(), self.total, "cards were created or lost");
    }

    /// Ends the game if a deck is empty, the round limit is hit, or `forced`
    /// names an ending.
    fn finish_if_over(&mut self, forced: Option<Ending>) {
        if self.state == GameState::Finished {
            return;
        }

        let ending = forced.or_else(|| {
            if self.decks.iter().any(Deck::is_empty) {
                Some(Ending::Exhausted)
            } else if self.options.max_rounds != 0 && self.rounds >= self.options.max_rounds {
                Some(Ending::RoundLimit)
            } else {
                None
            }
        });
        let Some(ending) = ending else {
            return;
        };

        let outcome = match ending {
            Ending::Stalemate => Outcome::Draw,
            Ending::Exhausted | Ending::Forfeit | Ending::RoundLimit => self.leader(),
        };
        let result = GameResult {
            outcome,
            ending,
            rounds: self.rounds,
            wars: self.wars,
        };

        info!(
            ?outcome,
            ?ending,
            rounds = self.rounds,
            wars = self.wars,
            "game over"
        );
        self.result = Some(result);
        self.state = GameState::Finished;
    }

    /// The player holding more cards, or a draw on equal counts.
    fn leader(&self) -> Outcome {
        let [one, two] = [self.decks[0].size(), self.decks[1].size()];
        match one.cmp(&two) {
            core::cmp::Ordering::Greater => Outcome::Winner(Player::One),
            core::cmp::Ordering::Less => Outcome::Winner(Player::Two),
            core::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}
