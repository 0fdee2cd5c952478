//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Hearts, Self::Diamonds];

    const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
        }
    }
}

/// A playing card.
///
/// Suit and rank never change once a card is drawn. The `face_down` flag is
/// only cleared when the dealer's hole card is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Whether the card is dealt face down.
    pub face_down: bool,
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_down: false,
        }
    }

    /// Returns this card turned face down.
    #[must_use]
    pub const fn turned_down(mut self) -> Self {
        self.face_down = true;
        self
    }

    /// Returns this card turned face up.
    #[must_use]
    pub const fn turned_up(mut self) -> Self {
        self.face_down = false;
        self
    }

    /// Returns the `(suit, rank)` identity of the card, ignoring visibility.
    #[must_use]
    pub const fn identity(&self) -> (Suit, u8) {
        (self.suit, self.rank)
    }

    /// Returns the rank label printed on the card.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
