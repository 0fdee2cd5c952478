//! The shuffled card source for a round.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::EmptyDeckError;

/// An ordered pile of undealt cards. The top card is drawn first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards; the last element is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 52 distinct cards of a standard deck, unshuffled.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Builds a full deck in uniformly random order.
    ///
    /// Uses a Fisher-Yates shuffle driven by the supplied generator, so a
    /// seeded generator yields a reproducible deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{DECK_SIZE, Deck};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::shuffled(&mut rng);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck from an explicit card order.
    ///
    /// The last card of `cards` is the top of the deck. This is meant for
    /// replaying a recorded shuffle; no duplicate check is performed.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or_else(|| {
            tracing::warn!("draw attempted on an empty deck");
            EmptyDeckError
        })
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
