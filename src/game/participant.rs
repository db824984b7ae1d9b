//! Participants and their hit policy.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::TableOptions;

use super::state::TurnState;

/// A seated participant: a nickname, an owned hand, and a hit policy.
///
/// The dealer shares this capability set and additionally owns the piles;
/// see [`Dealer`](super::Dealer).
#[derive(Debug, Clone)]
pub struct Participant {
    /// The participant's nickname.
    nickname: String,
    /// The participant's hand.
    hand: Hand,
    /// Hand value at or below which the participant keeps hitting.
    stand_value: u8,
    /// Maximum hand size the hit policy allows.
    max_cards: usize,
    /// Where the participant is in the current round.
    state: TurnState,
}

impl Participant {
    /// Creates a participant with the table's default policy.
    #[must_use]
    pub fn new(nickname: impl Into<String>, options: &TableOptions) -> Self {
        Self {
            nickname: nickname.into(),
            hand: Hand::with_valuation(options.ace_valuation),
            stand_value: options.stand_value,
            max_cards: options.max_cards,
            state: TurnState::Waiting,
        }
    }

    /// Overrides the stand value for this participant.
    #[must_use]
    pub const fn with_stand_value(mut self, stand_value: u8) -> Self {
        self.stand_value = stand_value;
        self
    }

    /// Returns the participant's nickname.
    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the hand value at or below which the participant keeps
    /// hitting.
    #[must_use]
    pub const fn stand_value(&self) -> u8 {
        self.stand_value
    }

    /// Returns the maximum hand size the hit policy allows.
    #[must_use]
    pub const fn max_cards(&self) -> usize {
        self.max_cards
    }

    /// Returns where the participant is in the current round.
    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.state
    }

    pub(crate) const fn set_state(&mut self, state: TurnState) {
        self.state = state;
    }

    /// Returns the Ace-adjusted value of the participant's hand.
    #[must_use]
    pub fn hand_value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the participant may draw another card.
    ///
    /// True while the hand is below the maximum size and its value does not
    /// exceed `stand_value`. A participant hits against their own stand
    /// value; the dealer is handed the player's hand value instead, so it
    /// draws until it is no longer behind.
    #[must_use]
    pub fn can_hit(&self, stand_value: u8) -> bool {
        self.hand.len() < self.max_cards && self.hand.value() <= stand_value
    }

    /// Deals cards into the participant's hand.
    pub fn add_to_hand<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.hand.add_all(cards);
    }

    /// Empties the participant's hand and returns the discarded cards.
    pub fn discard_hand(&mut self) -> Vec<Card> {
        self.hand.discard_all()
    }

    /// Returns whether the hand value exceeds 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.value() > 21
    }

    /// Returns whether the participant won outright: a hand of exactly 21,
    /// or a full hand (`max_cards` cards) that has not busted.
    #[must_use]
    pub fn is_natural_winner(&self) -> bool {
        let value = self.hand.value();
        value == 21 || (value < 21 && self.hand.len() == self.max_cards)
    }
}

impl fmt::Display for Participant {
    /// Formats the participant as `nickname: hand`, e.g.
    /// `Player #1: 2♣ K♦ (15)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.nickname, self.hand)
    }
}
