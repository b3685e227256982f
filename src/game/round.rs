use core::cmp::Ordering;
use core::mem;

use tracing::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::player::Player;
use crate::result::{Ending, Resolution, RoundReport};

use crate::shuffle::ShuffleSource;

use super::{Game, GameState, RoundState};

impl<S: ShuffleSource> Game<S> {
    /// Plays one round.
    ///
    /// Both players deal a battle card and the higher rank takes both. On a
    /// tie the players go to war: each deals another card onto their pile
    /// and the higher of the new cards takes every card on the table. Ties
    /// keep the war going.
    ///
    /// If a player has no card left for the war, they forfeit and the
    /// opponent takes the whole table, ending the game. If both run out at
    /// once, each takes back their own pile and the game is a draw.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Finished`] if the game is already over, and
    /// [`GameError::EmptyDeck`] if a player has no battle card.
    pub fn play_round(&mut self) -> Result<RoundReport, GameError> {
        if self.state == GameState::Finished {
            return Err(GameError::Finished);
        }

        let battle = self.deal_battle()?;
        self.rounds += 1;
        self.debug_check_conservation();
        debug!(round = self.rounds, one = %battle[0], two = %battle[1], "battle");

        let mut wars: Vec<[Card; 2]> = Vec::new();
        let mut newest = battle;
        let mut state = RoundState::Dealt;

        let resolution = loop {
            state = match state {
                RoundState::Dealt | RoundState::WarDealt => {
                    match newest[0].rank().cmp(&newest[1].rank()) {
                        Ordering::Greater => RoundState::Resolved(Resolution::Won {
                            winner: Player::One,
                            cards: self.collect(Player::One),
                        }),
                        Ordering::Less => RoundState::Resolved(Resolution::Won {
                            winner: Player::Two,
                            cards: self.collect(Player::Two),
                        }),
                        Ordering::Equal => {
                            if wars.is_empty() {
                                self.wars += 1;
                            }
                            debug!(round = self.rounds, rank = newest[0].rank(), "war");
                            RoundState::AtWar
                        }
                    }
                }
                RoundState::AtWar => match self.deal_war() {
                    Some(cards) => {
                        wars.push(cards);
                        newest = cards;
                        RoundState::WarDealt
                    }
                    None => RoundState::Resolved(self.settle_shortfall()),
                },
                RoundState::Resolved(resolution) => break resolution,
            };
            self.debug_check_conservation();
        };

        let report = RoundReport {
            round: self.rounds,
            battle,
            wars,
            resolution,
            deck_sizes: [self.decks[0].size(), self.decks[1].size()],
        };

        let forced = match resolution {
            Resolution::Won { .. } => None,
            Resolution::Forfeit { .. } => Some(Ending::Forfeit),
            Resolution::Stalemate => Some(Ending::Stalemate),
        };
        self.finish_if_over(forced);

        Ok(report)
    }

    /// Deals one battle card per player onto the table.
    fn deal_battle(&mut self) -> Result<[Card; 2], GameError> {
        // Both decks are checked before either deals.
        for player in Player::BOTH {
            if self.decks[player.index()].is_empty() {
                return Err(GameError::EmptyDeck(player));
            }
        }

        let one = self.decks[0]
            .deal_top()
            .map_err(|_| GameError::EmptyDeck(Player::One))?;
        let two = self.decks[1]
            .deal_top()
            .map_err(|_| GameError::EmptyDeck(Player::Two))?;
        self.table[0].push(one);
        self.table[1].push(two);
        Ok([one, two])
    }

    /// Deals one war card per player, or nothing if either deck is empty.
    fn deal_war(&mut self) -> Option<[Card; 2]> {
        if self.decks.iter().any(Deck::is_empty) {
            return None;
        }

        let one = self.decks[0].deal_top().ok()?;
        let two = self.decks[1].deal_top().ok()?;
        self.table[0].push(one);
        self.table[1].push(two);
        Some([one, two])
    }

    /// Resolves a war that cannot continue because a deck ran out.
    fn settle_shortfall(&mut self) -> Resolution {
        match (self.decks[0].is_empty(), self.decks[1].is_empty()) {
            (true, true) => {
                warn!(round = self.rounds, "both players ran out of cards during a war");
                for (deck, pile) in self.decks.iter_mut().zip(self.table.iter_mut()) {
                    deck.add_cards(mem::take(pile));
                }
                Resolution::Stalemate
            }
            (one_empty, _) => {
                let winner = if one_empty { Player::Two } else { Player::One };
                warn!(
                    round = self.rounds,
                    loser = %winner.opponent(),
                    "player cannot deal a war card and forfeits"
                );
                Resolution::Forfeit {
                    winner,
                    cards: self.collect(winner),
                }
            }
        }
    }

    /// Moves every card on the table onto the winner's deck and returns how
    /// many were moved.
    ///
    /// The collected cards are shuffled with the game's source before they
    /// go on top of the winner's deck.
    fn collect(&mut self, winner: Player) -> usize {
        let own = mem::take(&mut self.table[winner.index()]);
        let other = mem::take(&mut self.table[winner.opponent().index()]);
        let mut won: Deck = own.into_iter().chain(other).collect();
        won.shuffle(&mut self.source);

        let cards = won.size();
        self.decks[winner.index()].add_cards(won);
        cards
    }
}
