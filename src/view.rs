//! Render-safe snapshots of a round.
//!
//! A [`RoundView`] carries everything a presentation layer needs to draw the
//! table. Face-down cards are replaced by [`CardView::Hidden`], so the hole
//! card's rank and suit never reach the renderer before it is revealed.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Phase, RoundState};
use crate::hand::{DealerStatus, Hand, PlayerStatus};
use crate::result::Settlement;

/// A card as seen from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CardView {
    /// A face-down card; draw a card back.
    Hidden,
    /// A face-up card.
    Shown(Card),
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        if card.face_down {
            Self::Hidden
        } else {
            Self::Shown(*card)
        }
    }
}

fn card_views(hand: &Hand) -> Vec<CardView> {
    hand.cards().iter().map(CardView::from).collect()
}

/// The dealer's side of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DealerView {
    /// Cards in deal order.
    pub cards: Vec<CardView>,
    /// Total of the face-up cards.
    pub visible_total: u16,
    /// Dealer status.
    pub status: DealerStatus,
}

/// The player's side of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerView {
    /// Display name.
    pub name: String,
    /// Cards in deal order.
    pub cards: Vec<CardView>,
    /// Hand total.
    pub total: u16,
    /// Whether an ace is counted as 11.
    pub soft: bool,
    /// Player status.
    pub status: PlayerStatus,
    /// Chips not at risk.
    pub bankroll: usize,
    /// Bet for the current round.
    pub bet: usize,
}

/// Snapshot of a round for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundView {
    /// Current phase.
    pub phase: Phase,
    /// Dealer's side.
    pub dealer: DealerView,
    /// Player's side.
    pub player: PlayerView,
    /// Undealt cards.
    pub cards_remaining: usize,
    /// Result of the round once settled.
    pub settlement: Option<Settlement>,
}

impl RoundState {
    /// Returns a snapshot of the round with face-down cards masked.
    #[must_use]
    pub fn view(&self) -> RoundView {
        let dealer = self.dealer();
        let player = self.player();
        let player_value = player.hand().value();

        RoundView {
            phase: self.phase(),
            dealer: DealerView {
                cards: card_views(dealer.hand()),
                visible_total: dealer.hand().total(),
                status: dealer.status(),
            },
            player: PlayerView {
                name: String::from(player.name()),
                cards: card_views(player.hand()),
                total: player_value.total,
                soft: player_value.soft,
                status: player.status(),
                bankroll: player.bankroll(),
                bet: player.current_bet(),
            },
            cards_remaining: self.cards_remaining(),
            settlement: self.settlement().copied(),
        }
    }
}
