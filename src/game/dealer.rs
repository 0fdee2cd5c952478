use crate::error::{ChipOverflowError, EmptyDeckError};
use crate::hand::{BLACKJACK, DealerStatus, PlayerStatus};
use crate::options::PushRule;
use crate::result::{Outcome, Settlement};

use super::{Phase, RoundState};

/// Total at which the dealer stops drawing.
const DEALER_STANDS_ON: u16 = 17;

impl RoundState {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher. If `stand_on_soft_17` is false, the dealer also draws on a
    /// soft 17.
    pub(super) fn dealer_play(&mut self) -> Result<(), EmptyDeckError> {
        self.dealer.hand.reveal();

        loop {
            let value = self.dealer.hand.value();
            if value.total > DEALER_STANDS_ON {
                break;
            }
            if value.total == DEALER_STANDS_ON && (!value.soft || self.options.stand_on_soft_17) {
                break;
            }

            let card = self.deck.draw()?;
            self.dealer.hand.add_card(card);
            tracing::debug!(%card, total = self.dealer.hand.total(), "dealer draws");
        }

        self.dealer.status = if self.dealer.hand.is_bust() {
            DealerStatus::Bust
        } else {
            DealerStatus::Standing
        };
        Ok(())
    }

    /// Compares the player's hand to the dealer's and pays out.
    pub(super) fn settle(&mut self) -> Result<(), ChipOverflowError> {
        let bet = self.player.current_bet;
        let player_total = self.player.hand.total();
        let dealer_total = self.dealer.hand.total();

        let outcome = if self.player.status == PlayerStatus::Bust {
            Outcome::Lose
        } else if dealer_total > BLACKJACK || player_total > dealer_total {
            Outcome::Win
        } else if player_total == dealer_total {
            Outcome::Push
        } else {
            Outcome::Lose
        };

        let payout = match outcome {
            Outcome::Win => bet.checked_mul(2).ok_or(ChipOverflowError {
                credit: bet,
                balance: self.player.bankroll(),
            })?,
            Outcome::Push => match self.options.push {
                PushRule::ReturnBet => bet,
                PushRule::Forfeit => 0,
            },
            Outcome::Lose => 0,
        };

        self.player.bankroll.credit(payout)?;
        self.settlement = Some(Settlement {
            outcome,
            bet,
            payout,
            player_total,
            dealer_total,
        });
        self.phase = Phase::Settled;

        tracing::info!(
            ?outcome,
            player_total,
            dealer_total,
            payout,
            bankroll = self.player.bankroll(),
            "round settled"
        );
        Ok(())
    }
}
