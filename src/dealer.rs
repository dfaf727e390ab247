//! The house dealer.

use crate::card::Card;
use crate::hand::{Hand, evaluate_cards};

/// Total at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u8 = 17;

/// The dealer: one hand and a hidden hole card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
    hole_revealed: bool,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the dealer's hand.
    pub fn hit(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the full value of the dealer's hand.
    #[must_use]
    pub fn hand_value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the dealer's hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns whether the dealer stops drawing at `threshold`.
    ///
    /// Soft totals are already counted at their higher value, so a threshold
    /// of 17 stands on soft 17.
    #[must_use]
    pub fn should_stand(&self, threshold: u8) -> bool {
        self.hand.value() >= threshold
    }

    /// Returns the face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns the cards the player may see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            self.hand.cards()
        } else {
            &self.hand.cards()[..self.hand.len().min(1)]
        }
    }

    /// Returns the value of the visible cards, so a lone ace up shows as 11.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        evaluate_cards(self.visible_cards()).0
    }

    /// Returns whether the hole card has been turned over.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Turns over the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Discards the dealer's cards and hides the next hole card.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}
