//! The display and input boundary the session loop talks to.

use crate::card::Card;

/// Whose hand is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A yes/no question put to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    /// Draw one more card?
    AnotherCard,
    /// Play another round?
    AnotherRound,
}

/// Session events the presenter reports to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Announcement {
    /// The session has started.
    Welcome,
    /// The session is over.
    Goodbye,
    /// A new round begins.
    RoundStart,
    /// The current round is over.
    RoundEnd,
    /// The dealer's second card stays face down.
    HoleCardHidden,
    /// Chips the player can bet with this round.
    AvailableChips(usize),
    /// The bet accepted for this round.
    BetPlaced(usize),
    /// The player won the round.
    PlayerWins,
    /// The round was a push.
    PlayerPushes,
    /// The player lost the round.
    PlayerLoses,
    /// Chips available after settlement.
    ChipBalance(usize),
    /// The player cannot cover the minimum bet.
    OutOfChips,
}

/// Display and input adapter used by [`run_session`](crate::run_session).
///
/// Implementations own all retry logic: values they return are already
/// valid. `None` means the input stream is closed, which the session treats
/// as a decline.
pub trait Presenter {
    /// Shows the cards of one seat, in deal order.
    fn display_hand(&mut self, seat: Seat, cards: &[Card]);

    /// Shows the value of one seat's visible cards.
    fn display_hand_value(&mut self, seat: Seat, value: u8);

    /// Asks for a bet within `min..=max`.
    fn prompt_bet(&mut self, min: usize, max: usize) -> Option<usize>;

    /// Asks a yes/no question.
    fn prompt_yes_no(&mut self, question: Question) -> Option<bool>;

    /// Reports a session event.
    fn announce(&mut self, event: Announcement);
}
