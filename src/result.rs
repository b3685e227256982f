//! Round and game result types.

use core::fmt;

use crate::card::Card;
use crate::player::Player;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A strictly higher card won the round.
    Won {
        /// The player who took the cards.
        winner: Player,
        /// Number of cards taken, including the winner's own.
        cards: usize,
    },
    /// One player could not deal a war card and forfeited the game.
    Forfeit {
        /// The player who could still deal and took both war piles.
        winner: Player,
        /// Number of cards taken, including the winner's own.
        cards: usize,
    },
    /// Both players ran out of cards in the same war.
    ///
    /// Each player takes back their own war pile.
    Stalemate,
}

impl Resolution {
    /// Returns the player who took the cards, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        match *self {
            Self::Won { winner, .. } | Self::Forfeit { winner, .. } => Some(winner),
            Self::Stalemate => None,
        }
    }
}

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// One-based round number.
    pub round: u32,
    /// The battle cards, indexed by seat.
    pub battle: [Card; 2],
    /// War cards dealt after each tie, in order.
    pub wars: Vec<[Card; 2]>,
    /// How the round ended.
    pub resolution: Resolution,
    /// Deck sizes after the round, indexed by seat.
    pub deck_sizes: [usize; 2],
}

impl RoundReport {
    /// Returns whether the battle cards tied.
    #[must_use]
    pub fn went_to_war(&self) -> bool {
        self.battle[0].rank() == self.battle[1].rank()
    }
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round {}", self.round)?;
        for player in Player::BOTH {
            writeln!(f, "{player} deals {}", self.battle[player.index()])?;
        }

        for [one, two] in &self.wars {
            writeln!(f, "War! Player 1 deals {one}, Player 2 deals {two}")?;
        }
        if self.went_to_war() && self.wars.is_empty() {
            writeln!(f, "War!")?;
        }

        match self.resolution {
            Resolution::Won { winner, cards } if self.wars.is_empty() => {
                write!(f, "{winner} wins the round and takes {cards} cards")
            }
            Resolution::Won { winner, cards } => {
                write!(f, "{winner} wins the war and takes {cards} cards")
            }
            Resolution::Forfeit { winner, cards } => write!(
                f,
                "{} cannot continue the war; {winner} takes {cards} cards",
                winner.opponent()
            ),
            Resolution::Stalemate => {
                f.write_str("Both players ran out of cards during the war")
            }
        }
    }
}

/// Final outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// One player won.
    Winner(Player),
    /// Neither player won.
    Draw,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// One deck ran out after a regular round.
    Exhausted,
    /// A player could not deal a war card.
    Forfeit,
    /// Both players ran out of cards in the same war.
    Stalemate,
    /// The configured round limit was reached.
    RoundLimit,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Who won.
    pub outcome: Outcome,
    /// Why the game ended.
    pub ending: Ending,
    /// Number of rounds played.
    pub rounds: u32,
    /// Number of rounds that went to war.
    pub wars: u32,
}

impl GameResult {
    /// Returns the winner, if the game was not drawn.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        match self.outcome {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Winner(player) => write!(f, "{player} wins the game!"),
            Outcome::Draw => f.write_str("The game is a draw!"),
        }
    }
}
