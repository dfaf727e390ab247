//! Round engine and state management.

use tracing::{debug, warn};

use crate::card::Card;
use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::error::{DeckError, GameError};
use crate::options::GameOptions;
use crate::player::Player;

mod actions;
mod bet;
mod dealer;
mod session;
pub mod state;

pub use session::{play_round, run_session};
pub use state::GameState;

/// A single-player blackjack table: the shoe, the player, and the dealer.
///
/// Each round step is a method taking `&mut self`; the state machine is
/// documented on [`GameState`]. [`run_session`] composes the steps with a
/// [`Presenter`](crate::Presenter).
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    player: Player,
    dealer: Dealer,
    options: GameOptions,
    state: GameState,
}

impl Game {
    /// Creates a new game with the given seed and grants the starting chips.
    ///
    /// # Example
    ///
    /// ```
    /// use bjconsole::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.player().chips_available(), 100);
    /// assert_eq!(game.state(), GameState::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut player = Player::new();
        player.grant_chips(options.starting_chips);

        Self {
            deck: Deck::new(seed),
            player,
            dealer: Dealer::new(),
            options,
            state: GameState::Idle,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the dealing shoe.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the dealing shoe mutably, e.g. to stack it for a replay.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the player can cover the minimum bet.
    #[must_use]
    pub const fn player_can_bet(&self) -> bool {
        self.player.has_chips_to_play(self.options.minimum_bet)
    }

    fn ensure_state(&self, expected: GameState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }

    /// Draws a card, refilling the shoe first if it ran dry.
    fn draw(&mut self) -> Result<Card, DeckError> {
        if self.deck.is_empty() {
            warn!("shoe exhausted mid-round, reshuffling a fresh deck");
            self.deck.refill();
        }
        let card = self.deck.draw()?;
        debug!(%card, remaining = self.deck.len(), "card drawn");
        Ok(card)
    }

    /// Starts a round: a fresh deck is shuffled into the shoe.
    ///
    /// The shoe is rebuilt at every round start, however many cards remain.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the table is idle.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        self.ensure_state(GameState::Idle)?;
        self.deck.refill();
        debug!(cards = self.deck.len(), "shoe refilled for new round");
        self.state = GameState::AwaitingBet;
        Ok(())
    }

    /// Discards both hands and the rest of the shoe, returning to idle.
    ///
    /// Valid in any state. A wager from an abandoned, unsettled round is
    /// returned to the player.
    pub fn clear_round(&mut self) {
        if self.player.chips_wagered() > 0 {
            let refund = self.player.settle_push();
            warn!(refund, "round abandoned before settlement, bet returned");
        }
        self.player.clear_hand();
        self.dealer.clear_hand();
        self.deck.clear();
        self.state = GameState::Idle;
    }
}
