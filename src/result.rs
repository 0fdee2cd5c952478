//! Settlement types for a resolved round.

/// How the player's hand fared against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Lose,
    /// Totals tie with neither side bust.
    Push,
}

/// Result of settling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Settlement {
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The bet that was at risk.
    pub bet: usize,
    /// Chips credited back to the bankroll.
    pub payout: usize,
    /// The player's final total.
    pub player_total: u16,
    /// The dealer's final total.
    pub dealer_total: u16,
}

impl Settlement {
    /// Net chip change for the round, counting the bet taken at deal time.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}
