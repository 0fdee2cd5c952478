//! Round phase and participant types.

use alloc::string::String;

use crate::hand::{DealerStatus, Hand, PlayerStatus};
use crate::ledger::Bankroll;

/// Round phase.
///
/// Phases only move forward; [`RoundState::reset`](super::RoundState::reset)
/// is the one way back to `Betting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    /// Accepting a bet for the next round.
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been resolved and paid.
    Settled,
}

/// Name given to a player who did not choose one.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// The player seated at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub(super) name: String,
    pub(super) hand: Hand,
    pub(super) status: PlayerStatus,
    pub(super) bankroll: Bankroll,
    pub(super) current_bet: usize,
}

impl Player {
    pub(super) const fn new(name: String, bankroll: usize) -> Self {
        Self {
            name,
            hand: Hand::new(),
            status: PlayerStatus::Active,
            bankroll: Bankroll::new(bankroll),
            current_bet: 0,
        }
    }

    /// Returns the player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's status.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns the chips not currently at risk.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll.chips()
    }

    /// Returns the bet for the current round, or 0 if none was placed.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }
}

/// The dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    pub(super) hand: Hand,
    pub(super) status: DealerStatus,
}

impl Dealer {
    pub(super) const fn new() -> Self {
        Self {
            hand: Hand::new(),
            status: DealerStatus::Waiting,
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the dealer's status.
    #[must_use]
    pub const fn status(&self) -> DealerStatus {
        self.status
    }
}
