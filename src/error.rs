//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when converting values into card types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The value is not a valid rank (valid point values are 2 through 14).
    #[error("invalid rank value: {0}")]
    InvalidRank(u8),
    /// The character is not a suit symbol.
    #[error("invalid suit symbol: {0}")]
    InvalidSuit(char),
}

/// Errors that can occur when drawing from a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The pile held no cards when the draw started.
    #[error("draw pile is empty")]
    EmptyPile,
}

/// Errors that can occur when the dealer deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The draw pile is exhausted and the discard pile holds nothing to
    /// recycle. Fatal for the round; does not occur under standard
    /// single-deck rules with at most seven seats.
    #[error("draw pile and discard pile are both exhausted")]
    DeckExhausted,
}

impl From<DrawError> for DealError {
    fn from(error: DrawError) -> Self {
        match error {
            DrawError::EmptyPile => Self::DeckExhausted,
        }
    }
}
