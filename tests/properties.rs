//! Property-based tests for deck and game invariants.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use war::{Card, DECK_SIZE, Deck, Ending, Game, GameOptions, Player, Resolution};

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort();
    cards
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Shuffling is a permutation: nothing is duplicated or lost.
    #[test]
    fn shuffle_preserves_cards(seed in any::<u64>()) {
        let mut deck = Deck::standard();
        let before = sorted(deck.cards());
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(deck.size(), DECK_SIZE);
        prop_assert_eq!(sorted(deck.cards()), before);
    }

    // Arbitrary picks (clamped into range) still only permute.
    #[test]
    fn scripted_shuffle_preserves_cards(picks in prop::collection::vec(any::<usize>(), 51)) {
        let mut deck = Deck::standard();
        let mut picks = picks.into_iter();
        deck.shuffle(&mut war::FromFn::new(move |upper| {
            picks.next().map_or(upper, |pick| pick % (upper + 1))
        }));
        prop_assert_eq!(sorted(deck.cards()), sorted(Deck::standard().cards()));
    }

    // Dealing the top card and putting it back is a no-op.
    #[test]
    fn deal_then_add_round_trips(seed in any::<u64>(), deals in 0usize..DECK_SIZE) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        for _ in 0..deals {
            deck.deal_top().unwrap();
        }
        let before = deck.clone();
        let top = deck.deal_top().unwrap();
        deck.add_card(top);
        prop_assert_eq!(deck, before);
    }

    // Every game plays out to a single deck holding all the cards.
    #[test]
    fn games_terminate_and_conserve_cards(seed in any::<u64>()) {
        let mut game = Game::new(GameOptions::default(), seed);
        let mut conserved = true;

        let result = game
            .run_with(|report, game| {
                let held = game.deck(Player::One).size() + game.deck(Player::Two).size();
                conserved &= held + game.cards_in_play() == 2 * DECK_SIZE;
                conserved &= report.deck_sizes[0] + report.deck_sizes[1] == 2 * DECK_SIZE;
            })
            .unwrap();

        prop_assert!(conserved);
        prop_assert!(
            matches!(result.ending, Ending::Exhausted | Ending::Forfeit),
            "ended with {:?} after {} rounds",
            result.ending,
            result.rounds
        );

        let winner = result.winner().unwrap();
        prop_assert_eq!(game.deck(winner).size(), 2 * DECK_SIZE);
        prop_assert!(game.deck(winner.opponent()).is_empty());
    }

    // Whoever takes the cards in a round held the higher newest card.
    #[test]
    fn round_winner_holds_the_higher_card(seed in any::<u64>()) {
        let mut game = Game::new(GameOptions::default().with_max_rounds(200), seed);
        let mut consistent = true;

        game.run_with(|report, _| {
            if let Resolution::Won { winner, cards } = report.resolution {
                let last = report.wars.last().copied().unwrap_or(report.battle);
                let mine = last[winner.index()].rank();
                let theirs = last[winner.opponent().index()].rank();
                consistent &= mine > theirs;
                consistent &= cards == 2 * (report.wars.len() + 1);
            }
        })
        .unwrap();

        prop_assert!(consistent);
    }
}
