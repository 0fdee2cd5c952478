//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundState`] value that moves through betting,
//! dealing, the player's turn, dealer play, and settlement. Every operation
//! returns a new state (or an error) and leaves its input untouched, so a
//! round can be replayed deterministically from its seed.
//!
//! # Example
//!
//! ```
//! use bjround::{Phase, RoundState};
//!
//! let round = RoundState::new_round(100, 42);
//! let round = round.place_bet(10)?.deal()?;
//! let round = round.stand()?;
//! assert_eq!(round.phase(), Phase::Settled);
//! # Ok::<(), bjround::RoundError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{
    ChipOverflowError, EmptyDeckError, InsufficientFundsError, InvalidBetError, RoundError,
};
pub use game::{DEFAULT_PLAYER_NAME, Dealer, Phase, Player, RoundState};
pub use hand::{DealerStatus, Hand, HandValue, PlayerStatus};
pub use ledger::Bankroll;
pub use options::{PushRule, TableOptions};
pub use result::{Outcome, Settlement};
pub use view::{CardView, DealerView, PlayerView, RoundView};
