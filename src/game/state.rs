//! Game state types.

use crate::result::Resolution;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Rounds can still be played.
    InProgress,
    /// The game is over and a result is available.
    Finished,
}

/// Progress of a single round.
///
/// A round starts at `Dealt`. A tie moves it to `AtWar`, dealing war cards
/// moves it to `WarDealt`, and comparing those either resolves the round or
/// goes back to `AtWar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Battle cards are on the table.
    Dealt,
    /// The newest cards tied; war cards must be dealt.
    AtWar,
    /// War cards are on the table.
    WarDealt,
    /// The round is over.
    Resolved(Resolution),
}
