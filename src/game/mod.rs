//! Round engine and state management.

use alloc::string::String;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::options::TableOptions;
use crate::result::Settlement;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{DEFAULT_PLAYER_NAME, Dealer, Phase, Player};

/// The complete state of one blackjack round.
///
/// Every operation borrows the current state and returns a new one, leaving
/// the original untouched. A failed operation therefore never changes
/// anything, and any sequence of calls can be replayed from the same seed.
///
/// # Example
///
/// ```
/// use bjround::{Phase, RoundState};
///
/// let round = RoundState::new_round(100, 42);
/// let round = round.place_bet(10)?.deal()?;
/// assert_eq!(round.phase(), Phase::PlayerTurn);
/// assert_eq!(round.player().bankroll(), 90);
///
/// let round = round.stand()?;
/// assert_eq!(round.phase(), Phase::Settled);
/// let round = round.reset();
/// assert_eq!(round.phase(), Phase::Betting);
/// # Ok::<(), bjround::RoundError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    phase: Phase,
    deck: Deck,
    dealer: Dealer,
    player: Player,
    settlement: Option<Settlement>,
    options: TableOptions,
    rng: ChaCha8Rng,
}

impl RoundState {
    /// Starts a new session in the `Betting` phase with a freshly shuffled
    /// deck and the configured starting bankroll.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            phase: Phase::Betting,
            deck,
            dealer: Dealer::new(),
            player: Player::new(
                String::from(DEFAULT_PLAYER_NAME),
                options.initial_bankroll,
            ),
            settlement: None,
            options,
            rng,
        }
    }

    /// Starts a new session with default table options and the given stake.
    #[must_use]
    pub fn new_round(initial_bankroll: usize, seed: u64) -> Self {
        Self::new(
            TableOptions::default().with_initial_bankroll(initial_bankroll),
            seed,
        )
    }

    /// Names the seated player.
    ///
    /// The name carries over every [`reset`](Self::reset), like the bankroll.
    /// An empty or blank name keeps [`DEFAULT_PLAYER_NAME`].
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.player.name = name;
        }
        self
    }

    /// Replaces the undealt deck, for replaying a recorded card order.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round is in the `Betting` phase.
    pub fn with_deck(&self, deck: Deck) -> Result<Self, RoundError> {
        self.ensure_phase(Phase::Betting, "replace the deck")?;
        let mut next = self.clone();
        next.deck = deck;
        Ok(next)
    }

    /// Clears the table for a new round.
    ///
    /// Hands, bet and settlement are discarded and a fresh shuffled deck is
    /// drawn from the round's generator. The bankroll carries over. Resetting
    /// before the round is settled forfeits any bet already taken at deal.
    #[must_use]
    pub fn reset(&self) -> Self {
        let mut next = self.clone();
        next.deck = Deck::shuffled(&mut next.rng);
        next.dealer = Dealer::new();
        next.player = Player::new(self.player.name.clone(), self.player.bankroll());
        next.settlement = None;
        next.phase = Phase::Betting;

        tracing::debug!(
            from = ?self.phase,
            bankroll = next.player.bankroll(),
            "table reset"
        );
        next
    }

    fn ensure_phase(&self, expected: Phase, action: &'static str) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidPhase {
                action,
                phase: self.phase,
            })
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the settlement once the round is resolved.
    #[must_use]
    pub const fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }
}
