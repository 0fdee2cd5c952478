use crate::error::{InvalidBetError, RoundError};
use crate::hand::{DealerStatus, PlayerStatus};

use super::{Phase, RoundState};

impl RoundState {
    /// Places the bet for the next deal.
    ///
    /// The amount is validated against the bankroll and the table limit but
    /// not deducted until [`deal`](Self::deal). Calling this again before the
    /// deal replaces the earlier bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the `Betting` phase, the amount
    /// is not positive, or it exceeds the bankroll or the table limit.
    pub fn place_bet(&self, amount: i64) -> Result<Self, RoundError> {
        self.ensure_phase(Phase::Betting, "place a bet")?;

        if amount <= 0 {
            return Err(InvalidBetError::NotPositive(amount).into());
        }

        let bankroll = self.player.bankroll();
        let chips = usize::try_from(amount)
            .ok()
            .filter(|&chips| chips <= bankroll)
            .ok_or(InvalidBetError::ExceedsBankroll { amount, bankroll })?;

        if let Some(limit) = self.options.bet_limit {
            if chips > limit {
                return Err(InvalidBetError::AboveTableLimit {
                    amount: chips,
                    limit,
                }
                .into());
            }
        }

        let mut next = self.clone();
        next.player.current_bet = chips;

        tracing::debug!(bet = chips, bankroll, "bet placed");
        Ok(next)
    }

    /// Takes the bet and deals the opening hands.
    ///
    /// The player receives two face-up cards, then the dealer an up card and a
    /// face-down hole card. The bet leaves the bankroll immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the `Betting` phase, no bet was
    /// placed, the bankroll cannot cover the bet, or the deck runs out.
    pub fn deal(&self) -> Result<Self, RoundError> {
        self.ensure_phase(Phase::Betting, "deal")?;

        let bet = self.player.current_bet;
        if bet == 0 {
            return Err(InvalidBetError::NoBetPlaced.into());
        }

        let mut next = self.clone();
        next.player.bankroll.deduct(bet)?;

        for _ in 0..2 {
            let card = next.deck.draw()?;
            next.player.hand.add_card(card);
        }
        let up = next.deck.draw()?;
        next.dealer.hand.add_card(up);
        let hole = next.deck.draw()?;
        next.dealer.hand.add_card(hole.turned_down());

        next.player.status = PlayerStatus::Active;
        next.dealer.status = DealerStatus::Waiting;
        next.phase = Phase::PlayerTurn;

        tracing::debug!(
            bet,
            bankroll = next.player.bankroll(),
            player_total = next.player.hand.total(),
            dealer_up = next.dealer.hand.total(),
            "opening hands dealt"
        );
        Ok(next)
    }
}
