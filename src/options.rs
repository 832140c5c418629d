//! Game configuration options.

use crate::error::OptionsError;

/// Most seats a table supports.
pub const MAX_SEATS: u8 = 9;

/// Most decks a shoe supports.
pub const MAX_DECKS: u8 = 8;

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_seats(3)
///     .with_decks(2)
///     .with_stand_on_soft_17(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of seats (one bettor per seat).
    pub seats: u8,
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Maximum split depth of any hand descending from one original hand.
    pub max_splits: u8,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seats: 1,
            decks: 6,
            max_splits: 2,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of seats.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_seats(4);
    /// assert_eq!(options.seats, 4);
    /// ```
    #[must_use]
    pub const fn with_seats(mut self, seats: u8) -> Self {
        self.seats = seats;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the maximum split depth.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_splits(0);
    /// assert_eq!(options.max_splits, 0);
    /// ```
    #[must_use]
    pub const fn with_max_splits(mut self, max_splits: u8) -> Self {
        self.max_splits = max_splits;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Checks that the table can be run with these options.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no seats or decks, or more than
    /// [`MAX_SEATS`] seats or [`MAX_DECKS`] decks.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.seats == 0 {
            return Err(OptionsError::NoSeats);
        }
        if self.seats > MAX_SEATS {
            return Err(OptionsError::TooManySeats(self.seats));
        }
        if self.decks == 0 {
            return Err(OptionsError::NoDecks);
        }
        if self.decks > MAX_DECKS {
            return Err(OptionsError::TooManyDecks(self.decks));
        }
        Ok(())
    }
}
