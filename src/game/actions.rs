use crate::error::RoundError;
use crate::hand::PlayerStatus;

use super::{Phase, RoundState};

impl RoundState {
    /// Player action: Hit (draw a card).
    ///
    /// A total over 21 busts the player, which ends their turn. The phase
    /// stays `PlayerTurn` until [`stand`](Self::stand) is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the `PlayerTurn` phase, the
    /// player has already stood or busted, or the deck is empty.
    pub fn hit(&self) -> Result<Self, RoundError> {
        self.ensure_phase(Phase::PlayerTurn, "hit")?;

        if self.player.status != PlayerStatus::Active {
            return Err(RoundError::PlayerNotActive(self.player.status));
        }

        let mut next = self.clone();
        let card = next.deck.draw()?;
        next.player.hand.add_card(card);

        let value = next.player.hand.value();
        if value.is_bust() {
            next.player.status = PlayerStatus::Bust;
        }

        tracing::debug!(
            %card,
            total = value.total,
            bust = value.is_bust(),
            "player hit"
        );
        Ok(next)
    }

    /// Player action: Stand (end the turn and resolve the round).
    ///
    /// The dealer reveals the hole card and draws until reaching 17, then the
    /// round is settled against the player's hand. This is also how a busted
    /// player's turn is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the `PlayerTurn` phase, the
    /// deck runs out while the dealer must draw, or the payout would overflow
    /// the bankroll.
    pub fn stand(&self) -> Result<Self, RoundError> {
        self.ensure_phase(Phase::PlayerTurn, "stand")?;

        let mut next = self.clone();
        if next.player.status == PlayerStatus::Active {
            next.player.status = PlayerStatus::Standing;
        }
        next.phase = Phase::DealerTurn;

        next.dealer_play()?;
        next.settle()?;
        Ok(next)
    }
}
