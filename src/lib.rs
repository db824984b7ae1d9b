//! A round engine for the card game twenty-one with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that manages the full round flow:
//! building and shuffling the deck, seating participants, the hit/stand
//! loop against the dealer, outcome scoring, and recycling discarded cards
//! back into the draw pile.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Table, TableOptions};
//!
//! let options = TableOptions::default();
//! let mut table = Table::new(options, 42);
//! table.join("Player #1");
//! let outcomes = table.play_round().expect("a fresh deck holds enough cards");
//! let _ = outcomes;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, create_deck};
pub use error::{CardError, DealError, DrawError};
pub use game::{Dealer, Participant, RoundPhase, Table, TurnState, play_turn};
pub use hand::Hand;
pub use options::{AceValuation, TableOptions};
pub use pile::{DiscardPile, DrawPile};
pub use result::{ParticipantSummary, RoundOutcome};
