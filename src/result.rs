//! Round and session result types.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses (player busts or dealer has the higher value).
    Lose,
    /// Push (tie).
    Push,
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome for the player.
    pub outcome: HandOutcome,
    /// The amount that was wagered.
    pub bet: usize,
    /// Chips credited back to the player (stake plus winnings).
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Chips available to the player after settlement.
    pub chips_available: usize,
}

impl RoundResult {
    /// Net chips won (positive) or lost (negative) this round.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "chip counts fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

/// Tally of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Rounds that reached settlement.
    pub rounds_played: usize,
    /// Rounds won.
    pub wins: usize,
    /// Rounds pushed.
    pub pushes: usize,
    /// Rounds lost.
    pub losses: usize,
    /// Chips available when the session ended.
    pub final_chips: usize,
}

impl SessionSummary {
    /// Records a settled round.
    pub const fn record(&mut self, result: &RoundResult) {
        self.rounds_played += 1;
        match result.outcome {
            HandOutcome::Win => self.wins += 1,
            HandOutcome::Push => self.pushes += 1,
            HandOutcome::Lose => self.losses += 1,
        }
        self.final_chips = result.chips_available;
    }
}
