//! The dealer: a participant that also owns the piles.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::pile::{DiscardPile, DrawPile};

use super::participant::Participant;
use super::state::TurnState;

/// The dealer.
///
/// Composes the shared [`Participant`] capability set with exclusive
/// ownership of the draw pile, the discard pile, and the random source used
/// to shuffle. Other participants never touch the piles directly; cards
/// flow only through [`Dealer::deal`] and [`Dealer::collect_discarded`].
#[derive(Debug, Clone)]
pub struct Dealer {
    /// The dealer's seat: nickname, hand, and hit policy.
    participant: Participant,
    /// The pile cards are dealt from.
    draw_pile: DrawPile,
    /// The pile discarded hands are collected into.
    discard_pile: DiscardPile,
    /// Random source for shuffling.
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a dealer owning the given draw pile, with an empty discard
    /// pile and a random source seeded with `seed`.
    #[must_use]
    pub fn new(
        nickname: impl Into<String>,
        draw_pile: DrawPile,
        options: &TableOptions,
        seed: u64,
    ) -> Self {
        Self {
            participant: Participant::new(nickname, options),
            draw_pile,
            discard_pile: DiscardPile::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws `count` cards from the draw pile.
    ///
    /// When at most one card would remain before the draw, the discard pile
    /// is first recycled: all of its cards are moved into the draw pile,
    /// the pile is shuffled, and only then is the draw performed.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the draw pile is empty and
    /// the discard pile holds nothing to recycle.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        if self.draw_pile.len() <= 1 && !self.discard_pile.is_empty() {
            let recycled = self.discard_pile.remove_all();
            self.draw_pile.combine(recycled);
            self.draw_pile.shuffle(&mut self.rng);
        }

        Ok(self.draw_pile.draw(count)?)
    }

    /// Collects discarded cards into the discard pile.
    pub fn collect_discarded<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.discard_pile.add(cards);
    }

    /// Shuffles the draw pile.
    pub fn shuffle(&mut self) {
        self.draw_pile.shuffle(&mut self.rng);
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    /// Returns the draw pile mutably.
    ///
    /// Primarily for rigging a known card order in tests and custom
    /// setups.
    pub const fn draw_pile_mut(&mut self) -> &mut DrawPile {
        &mut self.draw_pile
    }

    /// Returns the discard pile.
    #[must_use]
    pub const fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    /// Returns the discard pile mutably.
    ///
    /// Primarily for rigging pile contents in tests and custom setups.
    pub const fn discard_pile_mut(&mut self) -> &mut DiscardPile {
        &mut self.discard_pile
    }

    /// Returns the dealer's nickname.
    #[must_use]
    pub fn nickname(&self) -> &str {
        self.participant.nickname()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        self.participant.hand()
    }

    /// Returns the Ace-adjusted value of the dealer's hand.
    #[must_use]
    pub fn hand_value(&self) -> u8 {
        self.participant.hand_value()
    }

    /// Returns where the dealer is in the current round.
    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.participant.state()
    }

    pub(crate) const fn set_state(&mut self, state: TurnState) {
        self.participant.set_state(state);
    }

    /// Returns whether the dealer may draw another card, given the hand
    /// value it has to beat.
    #[must_use]
    pub fn can_hit(&self, stand_value: u8) -> bool {
        self.participant.can_hit(stand_value)
    }

    /// Deals cards into the dealer's own hand.
    pub fn add_to_hand<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.participant.add_to_hand(cards);
    }

    /// Empties the dealer's hand and returns the discarded cards.
    pub fn discard_hand(&mut self) -> Vec<Card> {
        self.participant.discard_hand()
    }

    /// Returns whether the dealer's hand value exceeds 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.participant.is_busted()
    }

    /// Returns whether the dealer's hand is a natural win.
    #[must_use]
    pub fn is_natural_winner(&self) -> bool {
        self.participant.is_natural_winner()
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.participant)
    }
}
