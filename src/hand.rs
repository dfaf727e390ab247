//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Returns the hand total and whether an ace was counted as 11.
///
/// At most one ace is ever promoted, so two aces count as 12.
pub(crate) fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.is_ace();
        value = value.saturating_add(card.value());
    }

    if has_ace && value <= 11 {
        (value + 10, true)
    } else {
        (value, false)
    }
}

/// Cards held by the player or the dealer during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Every card counts its face value (Ace = 1). If the hand holds an ace
    /// and the total is 11 or less, one ace is counted as 11 instead.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (an ace is counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discards all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
