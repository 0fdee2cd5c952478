//! Chip balances.

use crate::error::{ChipOverflowError, InsufficientFundsError};

/// A player's chip balance.
///
/// Balances are whole chips and can never go negative: a deduction larger
/// than the balance is rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Bankroll(usize);

impl Bankroll {
    /// Creates a bankroll holding `chips`.
    #[must_use]
    pub const fn new(chips: usize) -> Self {
        Self(chips)
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.0
    }

    /// Removes `amount` from the balance.
    ///
    /// # Errors
    ///
    /// Returns [`InsufficientFundsError`] if `amount` exceeds the balance. The
    /// balance is unchanged in that case.
    pub const fn deduct(&mut self, amount: usize) -> Result<(), InsufficientFundsError> {
        if amount > self.0 {
            return Err(InsufficientFundsError {
                requested: amount,
                available: self.0,
            });
        }
        self.0 -= amount;
        Ok(())
    }

    /// Adds `amount` to the balance.
    ///
    /// # Errors
    ///
    /// Returns [`ChipOverflowError`] if the new balance does not fit in a
    /// `usize`. The balance is unchanged in that case.
    pub const fn credit(&mut self, amount: usize) -> Result<(), ChipOverflowError> {
        match self.0.checked_add(amount) {
            Some(chips) => {
                self.0 = chips;
                Ok(())
            }
            None => Err(ChipOverflowError {
                credit: amount,
                balance: self.0,
            }),
        }
    }
}
