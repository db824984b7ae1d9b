//! Round engine and table management.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::create_deck;
use crate::error::DealError;
use crate::options::TableOptions;
use crate::pile::DrawPile;
use crate::result::{ParticipantSummary, RoundOutcome};

mod dealer;
mod participant;
pub mod state;

pub use dealer::Dealer;
pub use participant::Participant;
pub use state::{RoundPhase, TurnState};

/// A card table: the dealer, the seated participants, and the options.
///
/// The table owns all game state explicitly; rounds run to completion on
/// the calling thread and either produce one [`RoundOutcome`] per seat or
/// fail with a fatal [`DealError`].
///
/// # Example
///
/// ```
/// use twentyone::{Table, TableOptions};
///
/// let mut table = Table::new(TableOptions::default(), 42);
/// table.join("Player #1");
/// table.join("Player #2");
///
/// let outcomes = table.play_round().expect("a fresh deck holds enough cards");
/// assert_eq!(outcomes.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    /// The dealer, owner of the piles.
    dealer: Dealer,
    /// Seated participants in seat order.
    participants: Vec<Participant>,
}

impl Table {
    /// Creates a table with a freshly built and shuffled draw pile.
    ///
    /// The deck count and policies come from `options`; `seed` seeds the
    /// dealer's random source, so two tables created with the same options
    /// and seed play identical rounds.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let cards = create_deck(options.decks as usize);
        let mut dealer = Dealer::new("Dealer", DrawPile::from(cards), &options, seed);
        dealer.shuffle();

        Self {
            options,
            dealer,
            participants: Vec::new(),
        }
    }

    /// Seats a participant with the table's default policy.
    ///
    /// Returns the seat index.
    pub fn join(&mut self, nickname: impl Into<String>) -> usize {
        self.participants
            .push(Participant::new(nickname, &self.options));
        self.participants.len() - 1
    }

    /// Seats a participant with their own stand value.
    ///
    /// Returns the seat index.
    pub fn join_with_stand_value(&mut self, nickname: impl Into<String>, stand_value: u8) -> usize {
        self.participants
            .push(Participant::new(nickname, &self.options).with_stand_value(stand_value));
        self.participants.len() - 1
    }

    /// Removes the participant at `seat` and returns them.
    ///
    /// Any cards still in the leaving participant's hand stay on the table,
    /// collected into the discard pile. Returns `None` for an unknown seat.
    pub fn leave(&mut self, seat: usize) -> Option<Participant> {
        if seat >= self.participants.len() {
            return None;
        }

        let mut participant = self.participants.remove(seat);
        let cards = participant.discard_hand();
        self.dealer.collect_discarded(cards);
        Some(participant)
    }

    /// Returns the seated participants in seat order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the dealer mutably.
    ///
    /// Primarily for rigging a known card order in tests and custom
    /// setups.
    pub const fn dealer_mut(&mut self) -> &mut Dealer {
        &mut self.dealer
    }

    /// Returns the number of cards on the table: draw pile, discard pile,
    /// and every hand.
    ///
    /// The total never changes across rounds; cards only move between the
    /// piles and the hands.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.dealer.draw_pile().len()
            + self.dealer.discard_pile().len()
            + self.dealer.hand().len()
            + self
                .participants
                .iter()
                .map(|participant| participant.hand().len())
                .sum::<usize>()
    }

    /// Plays one round: every seat against the dealer, in seat order.
    ///
    /// One opening card is dealt to every seat first; each seat then plays
    /// its turn to completion (hit loop, dealer play, scoring, discard)
    /// before the next seat starts. Returns one outcome per seat.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the draw pile runs out with
    /// nothing left to recycle; the round is aborted.
    pub fn play_round(&mut self) -> Result<Vec<RoundOutcome>, DealError> {
        let total = self.card_count();

        for participant in &mut self.participants {
            participant.set_state(TurnState::Waiting);
            let cards = self.dealer.deal(1)?;
            participant.add_to_hand(cards);
        }

        let mut outcomes = Vec::with_capacity(self.participants.len());
        for participant in &mut self.participants {
            outcomes.push(play_turn(&mut self.dealer, participant)?);
        }

        debug_assert_eq!(self.card_count(), total);
        Ok(outcomes)
    }
}

/// Plays a single participant's turn against the dealer.
///
/// Advances through the [`RoundPhase`] machine: the opening card (unless
/// one was already dealt), the second card, the participant's hit loop, the
/// dealer's draw against the participant's result, scoring, and the discard
/// of both hands into the dealer's discard pile.
///
/// # Errors
///
/// Returns [`DealError::DeckExhausted`] if a draw finds the draw pile empty
/// with nothing left to recycle.
#[expect(
    clippy::missing_panics_doc,
    reason = "the machine always scores a turn before completing it"
)]
pub fn play_turn(
    dealer: &mut Dealer,
    participant: &mut Participant,
) -> Result<RoundOutcome, DealError> {
    let mut phase = RoundPhase::Init;
    let mut scored: Option<RoundOutcome> = None;

    loop {
        phase = match phase {
            RoundPhase::Init => {
                participant.set_state(TurnState::Drawing);
                dealer.set_state(TurnState::Waiting);
                RoundPhase::DealingFirstCard
            }
            RoundPhase::DealingFirstCard => {
                if participant.hand().is_empty() {
                    let cards = dealer.deal(1)?;
                    participant.add_to_hand(cards);
                }
                RoundPhase::PlayerTurn
            }
            RoundPhase::PlayerTurn => {
                let cards = dealer.deal(1)?;
                participant.add_to_hand(cards);

                // Terminates: every hit either busts the hand or grows it
                // towards max_cards.
                while participant.can_hit(participant.stand_value()) {
                    let cards = dealer.deal(1)?;
                    participant.add_to_hand(cards);
                }

                if !participant.is_busted() && !participant.is_natural_winner() {
                    participant.set_state(TurnState::Standing);
                }
                RoundPhase::DealerTurn
            }
            RoundPhase::DealerTurn => {
                // The dealer only plays against a seat that is still in the
                // running; naturals and busts are already decided.
                if !participant.is_natural_winner() && !participant.is_busted() {
                    dealer.set_state(TurnState::Drawing);
                    let target = participant.hand_value();

                    while dealer.can_hit(target) {
                        let cards = dealer.deal(1)?;
                        dealer.add_to_hand(cards);
                    }

                    if !dealer.is_busted() {
                        dealer.set_state(TurnState::Standing);
                    }
                }
                RoundPhase::Scoring
            }
            RoundPhase::Scoring => {
                scored = Some(score(dealer, participant));
                RoundPhase::Discarding
            }
            RoundPhase::Discarding => {
                let mut cards = participant.discard_hand();
                cards.extend(dealer.discard_hand());
                dealer.collect_discarded(cards);

                participant.set_state(TurnState::Resolved);
                dealer.set_state(TurnState::Resolved);
                RoundPhase::Done
            }
            RoundPhase::Done => {
                break Ok(scored
                    .take()
                    .expect("turn is scored before the machine completes"));
            }
        };
    }
}

/// Compares the hands and declares a winner.
///
/// The participant wins on a natural, on a dealer bust, or with a higher
/// non-busted hand below 21. Every other case, ties included, goes to the
/// dealer.
fn score(dealer: &Dealer, participant: &Participant) -> RoundOutcome {
    let player_value = participant.hand_value();
    let dealer_value = dealer.hand_value();

    let player_wins = participant.is_natural_winner()
        || dealer_value > 21
        || (player_value < 21 && player_value > dealer_value);

    let winner = if player_wins {
        participant.nickname()
    } else {
        dealer.nickname()
    };

    RoundOutcome {
        player: ParticipantSummary::capture(participant.nickname(), participant.hand()),
        dealer: ParticipantSummary::capture(dealer.nickname(), dealer.hand()),
        winner: String::from(winner),
    }
}
