//! Game state types.

/// Round state.
///
/// A round moves `Idle → AwaitingBet → PlayerTurn → DealerTurn → Settled`
/// and returns to `Idle` on cleanup. A player bust jumps from `PlayerTurn`
/// straight to `Settled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No round in progress; the table is clear.
    Idle,
    /// The deck is shuffled and a bet is expected.
    AwaitingBet,
    /// The player is deciding whether to draw.
    PlayerTurn,
    /// The dealer draws to the stand threshold.
    DealerTurn,
    /// The round has been paid out.
    Settled,
}
