//! Table configuration options.

/// What happens to the bet when player and dealer tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum PushRule {
    /// A tie pays nothing; the bet taken at deal time is kept by the house.
    #[default]
    Forfeit,
    /// A tie returns the original bet.
    ReturnBet,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::{PushRule, TableOptions};
///
/// let options = TableOptions::default()
///     .with_initial_bankroll(500)
///     .with_bet_limit(Some(100))
///     .with_push(PushRule::ReturnBet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Chips a new player starts with.
    pub initial_bankroll: usize,
    /// Largest bet accepted, if any.
    pub bet_limit: Option<usize>,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// How a tie is paid.
    pub push: PushRule,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            initial_bankroll: 100,
            bet_limit: None,
            stand_on_soft_17: true,
            push: PushRule::Forfeit,
        }
    }
}

impl TableOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::TableOptions;
    ///
    /// let options = TableOptions::default().with_initial_bankroll(250);
    /// assert_eq!(options.initial_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_initial_bankroll(mut self, chips: usize) -> Self {
        self.initial_bankroll = chips;
        self
    }

    /// Sets the table bet limit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::TableOptions;
    ///
    /// let options = TableOptions::default().with_bet_limit(Some(100));
    /// assert_eq!(options.bet_limit, Some(100));
    /// ```
    #[must_use]
    pub const fn with_bet_limit(mut self, limit: Option<usize>) -> Self {
        self.bet_limit = limit;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets how ties are paid.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{PushRule, TableOptions};
    ///
    /// let options = TableOptions::default().with_push(PushRule::ReturnBet);
    /// assert_eq!(options.push, PushRule::ReturnBet);
    /// ```
    #[must_use]
    pub const fn with_push(mut self, push: PushRule) -> Self {
        self.push = push;
        self
    }
}
