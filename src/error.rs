//! Error types for round operations.

use thiserror::Error;

use crate::game::Phase;
use crate::hand::PlayerStatus;

/// The deck ran out of cards while a draw was required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// A bankroll deduction exceeded the available balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("insufficient funds: requested {requested}, available {available}")]
pub struct InsufficientFundsError {
    /// Amount that was requested.
    pub requested: usize,
    /// Balance at the time of the request.
    pub available: usize,
}

/// A bankroll credit would exceed the largest representable balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("crediting {credit} chips to a balance of {balance} overflows")]
pub struct ChipOverflowError {
    /// Amount that was to be credited.
    pub credit: usize,
    /// Balance at the time of the credit.
    pub balance: usize,
}

/// Errors that can occur when placing or committing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidBetError {
    /// Bet amount is zero or negative.
    #[error("bet must be positive, got {0}")]
    NotPositive(i64),
    /// Bet amount is larger than the player's bankroll.
    #[error("bet of {amount} exceeds bankroll of {bankroll}")]
    ExceedsBankroll {
        /// Requested bet.
        amount: i64,
        /// Current bankroll.
        bankroll: usize,
    },
    /// Bet amount is above the table limit.
    #[error("bet of {amount} exceeds the table limit of {limit}")]
    AboveTableLimit {
        /// Requested bet.
        amount: usize,
        /// Configured table limit.
        limit: usize,
    },
    /// Dealing was requested before a bet was placed.
    #[error("no bet has been placed")]
    NoBetPlaced,
}

/// Errors returned by round operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The operation is not legal in the current phase.
    #[error("cannot {action} during the {phase:?} phase")]
    InvalidPhase {
        /// Operation that was attempted.
        action: &'static str,
        /// Phase the round was in.
        phase: Phase,
    },
    /// The player has already stood or busted.
    #[error("player is no longer active ({0:?})")]
    PlayerNotActive(PlayerStatus),
    /// The bet was rejected.
    #[error(transparent)]
    InvalidBet(#[from] InvalidBetError),
    /// The bankroll could not cover a deduction.
    #[error(transparent)]
    InsufficientFunds(#[from] InsufficientFundsError),
    /// The deck ran out of cards.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
    /// A payout would overflow the bankroll.
    #[error(transparent)]
    ChipOverflow(#[from] ChipOverflowError),
}
