use tracing::debug;

use crate::card::Card;
use crate::error::GameError;
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Returns whether the player may still ask for a card: the turn is
    /// active and the hand is neither bust nor at 21.
    #[must_use]
    pub fn player_can_hit(&self) -> bool {
        self.state == GameState::PlayerTurn
            && !self.player.is_bust()
            && !self.player.has_blackjack()
    }

    /// Player action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the hand
    /// is already bust or at 21.
    pub fn player_hit(&mut self) -> Result<Card, GameError> {
        self.ensure_state(GameState::PlayerTurn)?;

        if !self.player_can_hit() {
            return Err(GameError::HandClosed);
        }

        let card = self.draw()?;
        self.player.hit(card);
        debug!(%card, value = self.player.hand_value(), "player hits");

        Ok(card)
    }

    /// Ends the player's turn.
    ///
    /// A busted hand is settled as a loss on the spot and the dealer's turn is
    /// skipped; the result is returned. Otherwise the hole card is revealed,
    /// the dealer's turn begins, and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn finish_player_turn(&mut self) -> Result<Option<RoundResult>, GameError> {
        self.ensure_state(GameState::PlayerTurn)?;

        if self.player.is_bust() {
            debug!(value = self.player.hand_value(), "player busts");
            return self.lose_round().map(Some);
        }

        self.dealer.reveal_hole();
        self.state = GameState::DealerTurn;
        Ok(None)
    }
}
