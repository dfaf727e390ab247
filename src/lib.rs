//! A single-player console blackjack game with an optional `no_std` engine.
//!
//! The crate provides a [`Game`] type that runs one round at a time
//! (bet, deal, player turn, dealer turn, settlement, cleanup) and
//! [`run_session`], which plays rounds through a [`Presenter`] until the
//! player quits or runs out of chips.
//!
//! Rules: one 52-card deck reshuffled every round, no split, double,
//! surrender or insurance, dealer stands on soft 17, wins pay 1:1.
//!
//! # Example
//!
//! ```
//! use bjconsole::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_round().unwrap();
//! game.place_bet(10).unwrap();
//! game.deal().unwrap();
//! assert_eq!(game.state(), GameState::PlayerTurn);
//! assert_eq!(game.player().hand().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod presenter;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::{DEALER_STANDS_ON, Dealer};
pub use deck::Deck;
pub use error::{BetError, CardError, DeckError, GameError};
pub use game::{Game, GameState, play_round, run_session};
pub use hand::{BLACKJACK, Hand};
pub use options::{GameOptions, MAX_STARTING_CHIPS};
pub use player::Player;
pub use presenter::{Announcement, Presenter, Question, Seat};
pub use result::{HandOutcome, RoundResult, SessionSummary};
