use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::GameError;
use crate::result::{HandOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Returns whether the dealer has reached the stand threshold.
    #[must_use]
    pub fn dealer_done(&self) -> bool {
        self.dealer.should_stand(self.options.dealer_stands_on)
    }

    /// Draws one card for the dealer if the hand is below the threshold.
    ///
    /// Returns the card drawn, or `None` once the dealer stands.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_hit(&mut self) -> Result<Option<Card>, GameError> {
        self.ensure_state(GameState::DealerTurn)?;

        if self.dealer_done() {
            return Ok(None);
        }

        let card = self.draw()?;
        self.dealer.hit(card);
        debug!(%card, value = self.dealer.hand_value(), "dealer hits");

        Ok(Some(card))
    }

    /// Dealer plays out the hand, drawing until the stand threshold.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, GameError> {
        let mut drawn_cards = Vec::new();
        while let Some(card) = self.dealer_hit()? {
            drawn_cards.push(card);
        }
        Ok(drawn_cards)
    }

    /// Compares hands and pays out the round.
    ///
    /// A dealer bust wins for the player; otherwise the higher value wins and
    /// equal values push. Wins pay 1:1. A 21 gets no bonus.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the
    /// dealer has not reached the stand threshold.
    pub fn settle(&mut self) -> Result<RoundResult, GameError> {
        self.ensure_state(GameState::DealerTurn)?;

        if !self.dealer_done() {
            return Err(GameError::DealerNotFinished);
        }

        let player_value = self.player.hand_value();
        let dealer_value = self.dealer.hand_value();

        let outcome = if self.dealer.is_bust() || player_value > dealer_value {
            HandOutcome::Win
        } else if player_value < dealer_value {
            HandOutcome::Lose
        } else {
            HandOutcome::Push
        };

        Ok(self.apply_outcome(outcome))
    }

    /// Settles a player bust without a dealer turn.
    pub(super) fn lose_round(&mut self) -> Result<RoundResult, GameError> {
        self.ensure_state(GameState::PlayerTurn)?;
        Ok(self.apply_outcome(HandOutcome::Lose))
    }

    fn apply_outcome(&mut self, outcome: HandOutcome) -> RoundResult {
        let bet = self.player.chips_wagered();
        let payout = match outcome {
            HandOutcome::Win => self.player.settle_win(),
            HandOutcome::Push => self.player.settle_push(),
            HandOutcome::Lose => self.player.settle_lose(),
        };
        self.state = GameState::Settled;

        let result = RoundResult {
            outcome,
            bet,
            payout,
            player_value: self.player.hand_value(),
            dealer_value: self.dealer.hand_value(),
            player_bust: self.player.is_bust(),
            dealer_bust: self.dealer.is_bust(),
            chips_available: self.player.chips_available(),
        };
        info!(
            ?outcome,
            bet,
            payout,
            player_value = result.player_value,
            dealer_value = result.dealer_value,
            chips = result.chips_available,
            "round settled"
        );
        result
    }
}
