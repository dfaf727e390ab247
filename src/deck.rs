//! The dealing shoe: a single 52-card deck with a seeded shuffle.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A single deck of cards. The end of the sequence is the top of the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an ordered 52-card deck whose shuffles are driven by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Creates a deck whose successive draws yield `draws` in order.
    ///
    /// Once exhausted, the deck refills and shuffles with `seed` like any other.
    ///
    /// # Example
    ///
    /// ```
    /// use bjconsole::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let king = Card::new(Rank::King, Suit::Hearts);
    /// let mut deck = Deck::stacked(&[ace, king], 0);
    /// assert_eq!(deck.draw(), Ok(ace));
    /// assert_eq!(deck.draw(), Ok(king));
    /// assert!(deck.is_empty());
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card], seed: u64) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Discards the current contents and rebuilds the canonical deck,
    /// suit by suit (Spades, Hearts, Diamonds, Clubs), Ace through King.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self) {
        if !self.cards.is_empty() {
            self.cards.shuffle(&mut self.rng);
        }
    }

    /// Rebuilds the full deck and shuffles it.
    pub fn refill(&mut self) {
        self.reset();
        self.shuffle();
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Discards every remaining card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
