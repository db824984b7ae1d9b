//! Table configuration options.

/// How aces are counted when valuing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceValuation {
    /// An Ace counts as 14, reduced to 1 while the hand would bust.
    ///
    /// This is the standard rule of the game.
    #[default]
    Flexible,
    /// Every Ace counts as 1 and is never escalated.
    AlwaysLow,
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(2)
///     .with_stand_value(16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks loaded into the draw pile.
    pub decks: u8,
    /// Hand value at or below which a participant keeps hitting.
    pub stand_value: u8,
    /// Maximum number of cards a hand may grow to before the hit policy
    /// stops drawing.
    pub max_cards: usize,
    /// How aces are counted.
    pub ace_valuation: AceValuation,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            stand_value: 14,
            max_cards: 5,
            ace_valuation: AceValuation::Flexible,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the stand value participants are seated with by default.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_value(16);
    /// assert_eq!(options.stand_value, 16);
    /// ```
    #[must_use]
    pub const fn with_stand_value(mut self, stand_value: u8) -> Self {
        self.stand_value = stand_value;
        self
    }

    /// Sets the maximum hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_cards(4);
    /// assert_eq!(options.max_cards, 4);
    /// ```
    #[must_use]
    pub const fn with_max_cards(mut self, max_cards: usize) -> Self {
        self.max_cards = max_cards;
        self
    }

    /// Sets how aces are counted.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{AceValuation, TableOptions};
    ///
    /// let options = TableOptions::default().with_ace_valuation(AceValuation::AlwaysLow);
    /// assert_eq!(options.ace_valuation, AceValuation::AlwaysLow);
    /// ```
    #[must_use]
    pub const fn with_ace_valuation(mut self, ace_valuation: AceValuation) -> Self {
        self.ace_valuation = ace_valuation;
        self
    }
}
