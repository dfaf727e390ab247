//! Game configuration options.

use crate::dealer::DEALER_STANDS_ON;

/// Largest starting balance a session accepts.
pub const MAX_STARTING_CHIPS: usize = 1_000_000_000;

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjconsole::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_chips(250)
///     .with_minimum_bet(5);
/// assert_eq!(options.dealer_stands_on, 17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Chips granted to the player when the session starts.
    pub starting_chips: usize,
    /// Smallest accepted bet.
    pub minimum_bet: usize,
    /// Total at which the dealer stops drawing (soft totals included).
    pub dealer_stands_on: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_chips: 100,
            minimum_bet: 1,
            dealer_stands_on: DEALER_STANDS_ON,
        }
    }
}

impl GameOptions {
    /// Sets the starting chip balance, capped at [`MAX_STARTING_CHIPS`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjconsole::{GameOptions, MAX_STARTING_CHIPS};
    ///
    /// let options = GameOptions::default().with_starting_chips(500);
    /// assert_eq!(options.starting_chips, 500);
    ///
    /// let options = GameOptions::default().with_starting_chips(usize::MAX);
    /// assert_eq!(options.starting_chips, MAX_STARTING_CHIPS);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = if chips > MAX_STARTING_CHIPS {
            MAX_STARTING_CHIPS
        } else {
            chips
        };
        self
    }

    /// Sets the minimum bet. Values below 1 are raised to 1.
    ///
    /// # Example
    ///
    /// ```
    /// use bjconsole::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().with_minimum_bet(10).minimum_bet, 10);
    /// assert_eq!(GameOptions::default().with_minimum_bet(0).minimum_bet, 1);
    /// ```
    #[must_use]
    pub const fn with_minimum_bet(mut self, minimum: usize) -> Self {
        self.minimum_bet = if minimum == 0 { 1 } else { minimum };
        self
    }

    /// Sets the dealer's stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjconsole::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, threshold: u8) -> Self {
        self.dealer_stands_on = threshold;
        self
    }
}
