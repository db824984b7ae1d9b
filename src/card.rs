//! Card types and deck utilities.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// Suits carry no point value; they are used only for display and for
/// telling two cards of the same rank apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck enumeration order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the display symbol for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '♣' => Ok(Self::Clubs),
            '♦' => Ok(Self::Diamonds),
            '♥' => Ok(Self::Hearts),
            '♠' => Ok(Self::Spades),
            other => Err(CardError::InvalidSuit(other)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank.
///
/// Ranks are ordered `Two` through `Ten`, then the face cards and the Ace.
/// The point value of a rank is its discriminant: 2–10 map to themselves,
/// Jack, Queen, and King are worth 11, 12, and 13, and the Ace is worth 14
/// (it may be counted as 1 when a hand would otherwise bust, see
/// [`Hand::value`](crate::hand::Hand::value)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace, the high card.
    Ace = 14,
}

impl Rank {
    /// All ranks in deck enumeration order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the point value of the rank.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Rank;
    ///
    /// assert_eq!(Rank::Seven.points(), 7);
    /// assert_eq!(Rank::King.points(), 13);
    /// assert_eq!(Rank::Ace.points(), 14);
    /// ```
    #[must_use]
    pub const fn points(self) -> u8 {
        self as u8
    }

    /// Returns whether the rank is the Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(points: u8) -> Result<Self, Self::Error> {
        match points {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            10 => Ok(Self::Ten),
            11 => Ok(Self::Jack),
            12 => Ok(Self::Queen),
            13 => Ok(Self::King),
            14 => Ok(Self::Ace),
            other => Err(CardError::InvalidRank(other)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jack => f.write_str("J"),
            Self::Queen => f.write_str("Q"),
            Self::King => f.write_str("K"),
            Self::Ace => f.write_str("A"),
            other => write!(f, "{}", other.points()),
        }
    }
}

/// A playing card.
///
/// Cards are immutable value pairs; equality compares rank and suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    /// Formats the card as its rank followed by the suit symbol, e.g. `2♣`
    /// or `K♠`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Creates the playing cards for the given number of decks.
///
/// Cards are produced in suit-major order: all clubs from `Two` up to
/// `Ace`, then diamonds, hearts, and spades, with the whole sequence
/// repeated once per deck copy. The order is deterministic; shuffling is
/// the draw pile's job.
///
/// # Example
///
/// ```
/// use twentyone::{DECK_SIZE, create_deck};
///
/// let cards = create_deck(2);
/// assert_eq!(cards.len(), 2 * DECK_SIZE);
/// ```
#[must_use]
pub fn create_deck(number_of_decks: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(number_of_decks * DECK_SIZE);

    for _ in 0..number_of_decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }

    cards
}
