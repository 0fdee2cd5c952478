//! Hand evaluation and participant hands.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u16 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// The evaluated total of a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    /// Best total after counting as many aces as 1 as needed.
    pub total: u16,
    /// Whether an ace is still counted as 11.
    pub soft: bool,
}

impl HandValue {
    /// Returns whether the total exceeds 21 after every ace reduction.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }
}

/// Evaluates a set of cards under blackjack ace rules.
///
/// Face-down cards are skipped. Aces start at 11 and are reduced to 1, one at
/// a time, while the total is above 21. Totals are exact for any realistic
/// number of cards; the running sum saturates at `u16::MAX`.
///
/// # Example
///
/// ```
/// use bjround::{Card, Suit, hand::evaluate};
///
/// let cards = [Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 6)];
/// let value = evaluate(&cards);
/// assert_eq!(value.total, 17);
/// assert!(value.soft);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u16 = 0;
    let mut soft_aces: u16 = 0;

    for card in cards.iter().filter(|card| !card.face_down) {
        if card.rank == 1 {
            soft_aces += 1;
        }
        total = total.saturating_add(u16::from(card_value(card.rank)));
    }

    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    HandValue {
        total,
        soft: soft_aces > 0,
    }
}

/// Player status within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PlayerStatus {
    /// Player may still hit or stand.
    Active,
    /// Player has stood.
    Standing,
    /// Player's total went over 21.
    Bust,
}

/// Dealer status within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DealerStatus {
    /// Hole card is hidden; the dealer has not played.
    Waiting,
    /// Dealer finished drawing at 17 or more.
    Standing,
    /// Dealer's total went over 21.
    Bust,
}

/// An ordered set of cards held by one participant.
///
/// Cards are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Turns every face-down card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.face_down = false;
        }
    }

    /// Returns whether any card is still face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(|card| card.face_down)
    }

    /// Evaluates the visible cards.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns the visible total.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.value().total
    }

    /// Returns whether the visible total is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value().is_bust()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
