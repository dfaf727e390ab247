//! The player: a hand plus a chip ledger.

use crate::card::Card;
use crate::error::BetError;
use crate::hand::{BLACKJACK, Hand};

/// The single player at the table.
///
/// Chips are split between `available` (free to bet) and `wagered` (the
/// current bet). `wagered` is zero outside an active round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    hand: Hand,
    chips_available: usize,
    chips_wagered: usize,
}

impl Player {
    /// Creates a player with no chips and an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            chips_available: 0,
            chips_wagered: 0,
        }
    }

    /// Adds chips to the available balance, saturating at `usize::MAX`.
    pub const fn grant_chips(&mut self, chips: usize) {
        self.chips_available = self.chips_available.saturating_add(chips);
    }

    /// Returns the chips free to bet.
    #[must_use]
    pub const fn chips_available(&self) -> usize {
        self.chips_available
    }

    /// Returns the chips in the betting box.
    #[must_use]
    pub const fn chips_wagered(&self) -> usize {
        self.chips_wagered
    }

    /// Returns whether the player can cover a bet of `minimum_bet`.
    #[must_use]
    pub const fn has_chips_to_play(&self, minimum_bet: usize) -> bool {
        self.chips_available >= minimum_bet && self.chips_available > 0
    }

    /// Moves `amount` chips from the available balance into the betting box.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::BetBelowMinimum`] if `amount < minimum_bet`, or
    /// [`BetError::InsufficientChips`] if `amount` exceeds the available
    /// balance. Balances are untouched on error.
    ///
    /// # Example
    ///
    /// ```
    /// use bjconsole::{BetError, Player};
    ///
    /// let mut player = Player::new();
    /// player.grant_chips(100);
    /// assert_eq!(
    ///     player.place_bet(0, 1),
    ///     Err(BetError::BetBelowMinimum { amount: 0, minimum: 1 })
    /// );
    /// player.place_bet(10, 1).unwrap();
    /// assert_eq!(player.chips_available(), 90);
    /// assert_eq!(player.chips_wagered(), 10);
    /// ```
    pub const fn place_bet(&mut self, amount: usize, minimum_bet: usize) -> Result<(), BetError> {
        if amount < minimum_bet || amount == 0 {
            return Err(BetError::BetBelowMinimum {
                amount,
                minimum: minimum_bet,
            });
        }

        if amount > self.chips_available {
            return Err(BetError::InsufficientChips {
                amount,
                available: self.chips_available,
            });
        }

        self.chips_available -= amount;
        self.chips_wagered += amount;
        Ok(())
    }

    /// Pays the bet 1:1. Returns the chips credited (stake plus winnings).
    ///
    /// The balance saturates at `usize::MAX` rather than wrapping.
    pub const fn settle_win(&mut self) -> usize {
        let payout = self.chips_wagered.saturating_mul(2);
        self.chips_available = self.chips_available.saturating_add(payout);
        self.chips_wagered = 0;
        payout
    }

    /// Returns the stake unchanged. Returns the chips credited.
    pub const fn settle_push(&mut self) -> usize {
        let payout = self.chips_wagered;
        self.chips_available = self.chips_available.saturating_add(payout);
        self.chips_wagered = 0;
        payout
    }

    /// Forfeits the stake. Always credits nothing.
    pub const fn settle_lose(&mut self) -> usize {
        self.chips_wagered = 0;
        0
    }

    /// Adds a card to the player's hand.
    pub fn hit(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the value of the player's hand.
    #[must_use]
    pub fn hand_value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the player's hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns whether the hand totals exactly 21, whatever the card count.
    ///
    /// A 21 carries no bonus; it only stops the player from drawing.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.hand.value() == BLACKJACK
    }

    /// Discards the player's cards.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }
}
