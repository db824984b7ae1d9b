//! Draw and discard piles.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::DrawError;

/// The pile cards are drawn from.
///
/// Cards leave from the front and recycled cards are appended to the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawPile {
    /// Cards in the pile, front first.
    cards: VecDeque<Card>,
}

impl DrawPile {
    /// Creates a new empty draw pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Removes and returns the first `count` cards from the front of the
    /// pile.
    ///
    /// When fewer than `count` cards remain, the remaining cards are
    /// returned; the draw only fails when the pile is already empty.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyPile`] if the pile holds no cards when the
    /// draw starts.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::EmptyPile);
        }

        let take = count.min(self.cards.len());
        Ok(self.cards.drain(..take).collect())
    }

    /// Randomly permutes the remaining cards in place.
    ///
    /// Uses [`SliceRandom::shuffle`], a uniform Fisher–Yates shuffle; every
    /// permutation of the pile is equally likely for a uniform source.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Appends cards to the back of the pile.
    pub fn combine<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Returns the cards in the pile, front first.
    #[must_use]
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for DrawPile {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

/// The pile discarded hands are collected into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPile {
    /// Discarded cards in collection order.
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Creates a new empty discard pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends cards to the pile.
    pub fn add<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Empties the pile and returns all of its cards.
    pub fn remove_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the number of discarded cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
