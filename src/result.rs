//! Round outcome types for reporting.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use serde::Serialize;

use crate::hand::Hand;

/// Serialized state of one participant's hand at the end of a turn.
///
/// This is a projection for logging and display only; field names are not a
/// wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantSummary {
    /// The participant's nickname.
    pub nickname: String,
    /// The cards of the hand in draw order, as display text.
    pub cards: Vec<String>,
    /// The Ace-adjusted hand value.
    pub value: u8,
    /// Whether the hand value exceeds 21.
    pub busted: bool,
}

impl ParticipantSummary {
    /// Captures the given hand under the given nickname.
    #[must_use]
    pub fn capture(nickname: &str, hand: &Hand) -> Self {
        let value = hand.value();
        Self {
            nickname: nickname.to_string(),
            cards: hand.cards().iter().map(ToString::to_string).collect(),
            value,
            busted: value > 21,
        }
    }
}

impl fmt::Display for ParticipantSummary {
    /// Formats the summary as `nickname: cards (value)`, or `nickname: -`
    /// for an empty hand.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return write!(f, "{}: -", self.nickname);
        }

        write!(f, "{}: {} ({})", self.nickname, self.cards.join(" "), self.value)
    }
}

/// The outcome of one participant's round against the dealer.
///
/// Produced by [`Table::play_round`](crate::game::Table::play_round); not
/// persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    /// The participant's hand at showdown.
    pub player: ParticipantSummary,
    /// The dealer's hand at showdown.
    pub dealer: ParticipantSummary,
    /// Nickname of the declared winner.
    pub winner: String,
}

impl fmt::Display for RoundOutcome {
    /// Formats the outcome as the three-line score block:
    ///
    /// ```text
    /// Player #1: 2♣ K♦ 10♥ (25) BUSTED!
    /// Dealer: -
    /// Dealer wins!
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.player)?;
        if self.player.busted {
            f.write_str(" BUSTED!")?;
        }
        writeln!(f)?;

        write!(f, "{}", self.dealer)?;
        if !self.player.busted && self.dealer.busted {
            f.write_str(" BUSTED!")?;
        }
        writeln!(f)?;

        write!(f, "{} wins!", self.winner)
    }
}
