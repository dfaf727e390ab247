//! Error types for game operations.

use thiserror::Error;

use crate::game::GameState;

/// Errors that can occur when building a card from raw indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank index outside Ace..King.
    #[error("card rank {0} is not recognized")]
    UnrecognizedRank(u8),
    /// Suit index outside the four suits.
    #[error("card suit {0} is not recognized")]
    UnrecognizedSuit(u8),
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("cannot draw card from an empty deck")]
    EmptyDeck,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet is smaller than the table minimum.
    #[error("bet of {amount} is below the minimum bet of {minimum}")]
    BetBelowMinimum {
        /// The attempted bet.
        amount: usize,
        /// The table minimum.
        minimum: usize,
    },
    /// Bet is larger than the chips the player has available.
    #[error("bet of {amount} exceeds the {available} available chips")]
    InsufficientChips {
        /// The attempted bet.
        amount: usize,
        /// Chips available to the player.
        available: usize,
    },
}

/// Errors raised by the round engine.
///
/// Every variant is an internal-consistency failure: the presenter only
/// hands validated input to the engine, so none of these are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A card could not be constructed.
    #[error(transparent)]
    Card(#[from] CardError),
    /// A draw hit an empty deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The operation is not valid in the current game state.
    #[error("expected game state {expected:?}, found {actual:?}")]
    InvalidState {
        /// State the operation requires.
        expected: GameState,
        /// State the game was in.
        actual: GameState,
    },
    /// A bet was already placed this round.
    #[error("a bet has already been placed this round")]
    BetAlreadyPlaced,
    /// Cards were requested before a bet was placed.
    #[error("no bet has been placed this round")]
    NoBet,
    /// The player's hand can take no more cards (bust or 21).
    #[error("player hand is closed to further cards")]
    HandClosed,
    /// Settlement was requested before the dealer reached the stand threshold.
    #[error("dealer has not finished drawing")]
    DealerNotFinished,
}
