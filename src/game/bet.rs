use tracing::info;

use crate::error::GameError;

use super::{Game, GameState};

impl Game {
    /// Places the player's bet for the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a bet, a bet was already
    /// placed, or the amount is outside `minimum_bet..=chips_available`.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), GameError> {
        self.ensure_state(GameState::AwaitingBet)?;

        if self.player.chips_wagered() > 0 {
            return Err(GameError::BetAlreadyPlaced);
        }

        self.player.place_bet(amount, self.options.minimum_bet)?;
        info!(
            bet = amount,
            available = self.player.chips_available(),
            "bet placed"
        );

        Ok(())
    }

    /// Deals the opening cards: two to the player, then the dealer's up card
    /// and hole card.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a bet or no bet has been
    /// placed.
    pub fn deal(&mut self) -> Result<(), GameError> {
        self.ensure_state(GameState::AwaitingBet)?;

        if self.player.chips_wagered() == 0 {
            return Err(GameError::NoBet);
        }

        let card = self.draw()?;
        self.player.hit(card);
        let card = self.draw()?;
        self.player.hit(card);

        // Up card, then the hole card.
        let card = self.draw()?;
        self.dealer.hit(card);
        let card = self.draw()?;
        self.dealer.hit(card);

        self.state = GameState::PlayerTurn;

        Ok(())
    }
}
