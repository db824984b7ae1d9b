//! Hand representation and Ace-aware valuation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::options::AceValuation;

fn evaluate_cards(cards: &[Card], valuation: AceValuation) -> u8 {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        let points = match valuation {
            AceValuation::AlwaysLow if card.rank.is_ace() => 1,
            _ => card.rank.points(),
        };
        value = value.saturating_add(points);
    }

    if valuation == AceValuation::Flexible {
        // Count aces as 1 instead of 14, one at a time, while the hand busts.
        while value > 21 && aces > 0 {
            value -= 13;
            aces -= 1;
        }
    }

    value
}

/// An ordered collection of cards.
///
/// Insertion order is draw order. The hand does not bound its own size;
/// the hit policy of the owning participant does (see
/// [`Participant::can_hit`](crate::game::Participant::can_hit)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// How aces are counted when valuing the hand.
    valuation: AceValuation,
}

impl Hand {
    /// Creates a new empty hand using the flexible Ace rule.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_valuation(AceValuation::Flexible)
    }

    /// Creates a new empty hand using the given Ace valuation.
    #[must_use]
    pub const fn with_valuation(valuation: AceValuation) -> Self {
        Self {
            cards: Vec::new(),
            valuation,
        }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds several cards to the hand, preserving their order.
    pub fn add_all<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Empties the hand and returns the discarded cards in draw order.
    pub fn discard_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the Ace valuation the hand was created with.
    #[must_use]
    pub const fn valuation(&self) -> AceValuation {
        self.valuation
    }

    /// Calculates the value of the hand.
    ///
    /// Under [`AceValuation::Flexible`] each Ace counts as 14, then is
    /// reduced to 1 (by subtracting 13), one Ace at a time, while the total
    /// exceeds 21 and an un-reduced Ace remains. Under
    /// [`AceValuation::AlwaysLow`] every Ace counts as 1 from the start.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add(Card::new(Rank::Ace, Suit::Spades));
    /// hand.add(Card::new(Rank::Ace, Suit::Hearts));
    /// hand.add(Card::new(Rank::Nine, Suit::Clubs));
    /// assert_eq!(hand.value(), 21);
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards, self.valuation)
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

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    /// Formats the hand as its cards followed by the value, e.g.
    /// `2♣ K♦ (15)`, or `-` for an empty hand.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("-");
        }

        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, " ({})", self.value())
    }
}
