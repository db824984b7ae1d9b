//! Round engine integration tests.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use twentyone::{
    AceValuation, Card, CardError, DECK_SIZE, DealError, Dealer, DiscardPile, DrawError, DrawPile,
    Hand, Participant, Rank, Suit, Table, TableOptions, TurnState, create_deck, play_turn,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn set_draw_pile(table: &mut Table, draws: &[Card]) {
    *table.dealer_mut().draw_pile_mut() = DrawPile::from(draws.to_vec());
}

#[test]
fn deck_has_one_of_each_card_per_copy() {
    let cards = create_deck(2);
    assert_eq!(cards.len(), 2 * DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let copies = cards
                .iter()
                .filter(|c| c.rank == rank && c.suit == suit)
                .count();
            assert_eq!(copies, 2, "expected two copies of {rank}{suit}");
        }
    }
}

#[test]
fn deck_enumeration_is_suit_major() {
    let cards = create_deck(1);
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards[0], card(Rank::Two, Suit::Clubs));
    assert_eq!(cards[12], card(Rank::Ace, Suit::Clubs));
    assert_eq!(cards[13], card(Rank::Two, Suit::Diamonds));
    assert_eq!(cards[51], card(Rank::Ace, Suit::Spades));
}

#[test]
fn shuffle_is_a_permutation() {
    let original = create_deck(1);
    let mut pile = DrawPile::from(original.clone());

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    pile.shuffle(&mut rng);

    let shuffled: Vec<Card> = pile.cards().copied().collect();
    assert_eq!(shuffled.len(), original.len());
    for wanted in &original {
        assert_eq!(shuffled.iter().filter(|c| *c == wanted).count(), 1);
    }
    assert_ne!(shuffled, original);
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let mut first = DrawPile::from(create_deck(1));
    let mut second = DrawPile::from(create_deck(1));
    let mut third = DrawPile::from(create_deck(1));

    first.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    third.shuffle(&mut ChaCha8Rng::seed_from_u64(43));

    assert_eq!(first, second);
    assert_ne!(first, third);
}

#[test]
fn hand_value_adjusts_aces_one_at_a_time() {
    let mut hand = Hand::new();
    hand.add(card(Rank::Ace, Suit::Spades));
    assert_eq!(hand.value(), 14);

    hand.add(card(Rank::Ace, Suit::Hearts));
    hand.add(card(Rank::Nine, Suit::Clubs));
    // 14 + 14 + 9 busts twice; both aces drop to 1.
    assert_eq!(hand.value(), 21);

    let mut royal = Hand::new();
    royal.add(card(Rank::Ace, Suit::Spades));
    royal.add(card(Rank::King, Suit::Spades));
    assert_eq!(royal.value(), 14);
}

#[test]
fn always_low_valuation_never_escalates_aces() {
    let mut hand = Hand::with_valuation(AceValuation::AlwaysLow);
    hand.add(card(Rank::Ace, Suit::Spades));
    hand.add(card(Rank::Five, Suit::Hearts));
    assert_eq!(hand.value(), 6);

    hand.add(card(Rank::Ace, Suit::Clubs));
    hand.add(card(Rank::Nine, Suit::Diamonds));
    assert_eq!(hand.value(), 16);
}

#[test]
fn hand_display_lists_cards_and_value() {
    let mut hand = Hand::new();
    assert_eq!(hand.to_string(), "-");

    hand.add(card(Rank::Two, Suit::Clubs));
    hand.add(card(Rank::King, Suit::Diamonds));
    hand.add(card(Rank::Ten, Suit::Hearts));
    assert_eq!(hand.to_string(), "2♣ K♦ 10♥ (25)");
}

#[test]
fn participant_flags_follow_hand_value() {
    let options = TableOptions::default();

    let mut busted = Participant::new("Busted", &options);
    busted.add_to_hand([card(Rank::King, Suit::Clubs), card(Rank::Queen, Suit::Clubs)]);
    assert!(busted.is_busted());
    assert!(!busted.is_natural_winner());
    assert!(!busted.can_hit(busted.stand_value()));

    let mut natural = Participant::new("Natural", &options);
    natural.add_to_hand([card(Rank::King, Suit::Hearts), card(Rank::Eight, Suit::Hearts)]);
    assert_eq!(natural.hand_value(), 21);
    assert!(natural.is_natural_winner());
    assert!(!natural.is_busted());

    let mut full = Participant::new("Full", &options);
    full.add_to_hand([
        card(Rank::Two, Suit::Clubs),
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Four, Suit::Clubs),
    ]);
    assert_eq!(full.hand_value(), 14);
    assert!(full.is_natural_winner());
    assert!(!full.can_hit(full.stand_value()));

    let mut open = Participant::new("Open", &options);
    open.add_to_hand([card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Hearts)]);
    assert!(!open.is_busted());
    assert!(!open.is_natural_winner());
    assert!(open.can_hit(open.stand_value()));
}

#[test]
fn draw_pile_draws_from_the_front() {
    let mut pile = DrawPile::from(vec![
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Clubs),
    ]);

    let drawn = pile.draw(2).unwrap();
    assert_eq!(
        drawn,
        vec![card(Rank::Two, Suit::Clubs), card(Rank::Three, Suit::Clubs)]
    );
    assert_eq!(pile.len(), 1);
}

#[test]
fn draw_returns_fewer_cards_than_requested() {
    let mut pile = DrawPile::from(vec![
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
    ]);

    let drawn = pile.draw(5).unwrap();
    assert_eq!(drawn.len(), 2);
    assert!(pile.is_empty());
}

#[test]
fn draw_from_empty_pile_is_an_error() {
    let mut pile = DrawPile::new();
    assert_eq!(pile.draw(1).unwrap_err(), DrawError::EmptyPile);

    let mut drained = DrawPile::from(vec![card(Rank::Two, Suit::Clubs)]);
    drained.draw(1).unwrap();
    assert_eq!(drained.draw(1).unwrap_err(), DrawError::EmptyPile);
}

#[test]
fn discard_pile_removes_everything_at_once() {
    let mut pile = DiscardPile::new();
    assert!(pile.is_empty());

    pile.add([card(Rank::Two, Suit::Clubs), card(Rank::Three, Suit::Clubs)]);
    pile.add([card(Rank::Four, Suit::Clubs)]);
    assert_eq!(pile.len(), 3);

    let removed = pile.remove_all();
    assert_eq!(removed.len(), 3);
    assert!(pile.is_empty());
}

#[test]
fn dealer_recycles_discard_pile_before_drawing() {
    let options = TableOptions::default();
    let mut dealer = Dealer::new(
        "Dealer",
        DrawPile::from(vec![card(Rank::Two, Suit::Clubs)]),
        &options,
        9,
    );
    dealer.collect_discarded([
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Five, Suit::Hearts),
    ]);

    let drawn = dealer.deal(1).unwrap();
    assert_eq!(drawn.len(), 1);
    assert!(dealer.discard_pile().is_empty());
    assert_eq!(dealer.draw_pile().len() + drawn.len(), 4);
}

#[test]
fn dealer_recycles_an_already_empty_draw_pile() {
    let options = TableOptions::default();
    let mut dealer = Dealer::new("Dealer", DrawPile::new(), &options, 9);
    dealer.collect_discarded([card(Rank::Three, Suit::Hearts), card(Rank::Four, Suit::Hearts)]);

    let drawn = dealer.deal(1).unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(dealer.draw_pile().len(), 1);
}

#[test]
fn deal_with_nothing_to_recycle_is_exhausted() {
    let options = TableOptions::default();
    let mut dealer = Dealer::new("Dealer", DrawPile::new(), &options, 9);
    assert_eq!(dealer.deal(1).unwrap_err(), DealError::DeckExhausted);
}

#[test]
fn round_against_an_unshuffled_deck_is_predictable() {
    let mut table = Table::new(TableOptions::default(), 0);
    table.join("Player #1");
    set_draw_pile(&mut table, &create_deck(1));

    let outcomes = table.play_round().unwrap();
    assert_eq!(outcomes.len(), 1);

    // 2♣ 3♣ 4♣ 5♣ 6♣ fills the hand at 20: a natural win, so the dealer
    // never draws for itself.
    let outcome = &outcomes[0];
    assert_eq!(outcome.player.value, 20);
    assert!(!outcome.player.busted);
    assert_eq!(outcome.dealer.value, 0);
    assert_eq!(outcome.winner, "Player #1");
    assert_eq!(
        outcome.to_string(),
        "Player #1: 2♣ 3♣ 4♣ 5♣ 6♣ (20)\nDealer: -\nPlayer #1 wins!"
    );
}

#[test]
fn tied_hands_go_to_the_dealer() {
    let mut table = Table::new(TableOptions::default(), 0);
    table.join("Player #1");
    set_draw_pile(
        &mut table,
        &[
            card(Rank::Two, Suit::Hearts),   // player opening card
            card(Rank::Jack, Suit::Hearts),  // player second card (13)
            card(Rank::Seven, Suit::Hearts), // player hit (20, stands)
            card(Rank::Two, Suit::Spades),   // dealer draws to 20 on five cards
            card(Rank::Three, Suit::Spades),
            card(Rank::Four, Suit::Spades),
            card(Rank::Five, Suit::Spades),
            card(Rank::Six, Suit::Spades),
        ],
    );

    let outcomes = table.play_round().unwrap();
    let outcome = &outcomes[0];
    assert_eq!(outcome.player.value, 20);
    assert_eq!(outcome.dealer.value, 20);
    assert_eq!(outcome.winner, "Dealer");
}

#[test]
fn dealer_bust_hands_the_win_to_the_player() {
    let mut table = Table::new(TableOptions::default(), 0);
    table.join("Player #1");
    set_draw_pile(
        &mut table,
        &[
            card(Rank::Ten, Suit::Hearts),   // player opening card
            card(Rank::Eight, Suit::Hearts), // player second card (18, stands)
            card(Rank::King, Suit::Spades),  // dealer 13
            card(Rank::Queen, Suit::Spades), // dealer 25, bust
        ],
    );

    let outcomes = table.play_round().unwrap();
    let outcome = &outcomes[0];
    assert!(outcome.dealer.busted);
    assert_eq!(outcome.winner, "Player #1");
    assert_eq!(
        outcome.to_string(),
        "Player #1: 10♥ 8♥ (18)\nDealer: K♠ Q♠ (25) BUSTED!\nPlayer #1 wins!"
    );
}

#[test]
fn busted_player_loses_without_dealer_play() {
    let mut table = Table::new(TableOptions::default(), 0);
    table.join("Player #1");
    set_draw_pile(
        &mut table,
        &[
            card(Rank::King, Suit::Hearts),
            card(Rank::Queen, Suit::Hearts), // 25 on two cards
        ],
    );

    let outcomes = table.play_round().unwrap();
    let outcome = &outcomes[0];
    assert!(outcome.player.busted);
    assert!(outcome.dealer.cards.is_empty());
    assert_eq!(outcome.winner, "Dealer");
    assert_eq!(
        outcome.to_string(),
        "Player #1: K♥ Q♥ (25) BUSTED!\nDealer: -\nDealer wins!"
    );
}

#[test]
fn twenty_one_wins_outright() {
    let mut table = Table::new(TableOptions::default(), 0);
    table.join("Player #1");
    set_draw_pile(
        &mut table,
        &[
            card(Rank::King, Suit::Hearts),
            card(Rank::Eight, Suit::Hearts), // 21 on two cards
        ],
    );

    let outcomes = table.play_round().unwrap();
    let outcome = &outcomes[0];
    assert_eq!(outcome.player.value, 21);
    assert_eq!(outcome.winner, "Player #1");
}

#[test]
fn cards_are_conserved_across_rounds() {
    let mut table = Table::new(TableOptions::default(), 11);
    table.join("Player #1");
    table.join("Player #2");
    table.join("Player #3");
    assert_eq!(table.card_count(), DECK_SIZE);

    // Enough rounds to run the draw pile down and recycle the discards.
    for _ in 0..10 {
        let outcomes = table.play_round().unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(table.card_count(), DECK_SIZE);
        for participant in table.participants() {
            assert!(participant.hand().is_empty());
        }
        assert!(table.dealer().hand().is_empty());
    }
}

#[test]
fn per_seat_stand_value_is_honored() {
    let mut table = Table::new(TableOptions::default(), 3);
    table.join_with_stand_value("Cautious", 2);

    let outcomes = table.play_round().unwrap();
    // Any two cards exceed a stand value of 2, so the hand never grows.
    assert_eq!(outcomes[0].player.cards.len(), 2);
}

#[test]
fn participants_resolve_by_the_end_of_a_round() {
    let mut table = Table::new(TableOptions::default(), 5);
    table.join("Player #1");
    table.join("Player #2");
    assert!(
        table
            .participants()
            .iter()
            .all(|p| p.state() == TurnState::Waiting)
    );

    table.play_round().unwrap();
    assert!(
        table
            .participants()
            .iter()
            .all(|p| p.state() == TurnState::Resolved)
    );
    assert_eq!(table.dealer().state(), TurnState::Resolved);
}

#[test]
fn play_turn_deals_the_opening_card_when_missing() {
    let options = TableOptions::default();
    let mut dealer = Dealer::new("Dealer", DrawPile::from(create_deck(1)), &options, 0);
    let mut participant = Participant::new("Player #1", &options);

    let outcome = play_turn(&mut dealer, &mut participant).unwrap();
    assert_eq!(outcome.player.value, 20);
    assert_eq!(outcome.winner, "Player #1");

    // Both hands were discarded into the dealer's pile.
    assert!(participant.hand().is_empty());
    assert_eq!(dealer.discard_pile().len(), 5);
    assert_eq!(dealer.draw_pile().len(), DECK_SIZE - 5);
}

#[test]
fn leaving_mid_session_keeps_cards_on_the_table() {
    let mut table = Table::new(TableOptions::default(), 2);
    table.join("Player #1");
    table.join("Player #2");
    table.play_round().unwrap();

    let left = table.leave(0).unwrap();
    assert_eq!(left.nickname(), "Player #1");
    assert_eq!(table.participants().len(), 1);
    assert_eq!(table.card_count(), DECK_SIZE);
    assert!(table.leave(5).is_none());
}

#[test]
fn outcome_serializes_to_the_reporting_projection() {
    let mut table = Table::new(TableOptions::default(), 0);
    table.join("Player #1");
    set_draw_pile(&mut table, &create_deck(1));

    let outcomes = table.play_round().unwrap();
    let value = serde_json::to_value(&outcomes[0]).unwrap();

    assert_eq!(value["player"]["nickname"], "Player #1");
    assert_eq!(value["player"]["value"], 20);
    assert_eq!(value["player"]["busted"], false);
    assert_eq!(value["player"]["cards"][0], "2♣");
    assert_eq!(value["dealer"]["nickname"], "Dealer");
    assert_eq!(value["winner"], "Player #1");
}

#[test]
fn rank_conversion_rejects_non_card_values() {
    assert_eq!(Rank::try_from(2).unwrap(), Rank::Two);
    assert_eq!(Rank::try_from(14).unwrap(), Rank::Ace);
    assert_eq!(Rank::try_from(1).unwrap_err(), CardError::InvalidRank(1));
    assert_eq!(Rank::try_from(15).unwrap_err(), CardError::InvalidRank(15));

    assert_eq!(Suit::try_from('♠').unwrap(), Suit::Spades);
    assert_eq!(Suit::try_from('x').unwrap_err(), CardError::InvalidSuit('x'));
}

#[test]
fn card_display_uses_rank_initials_and_suit_symbols() {
    assert_eq!(card(Rank::Two, Suit::Clubs).to_string(), "2♣");
    assert_eq!(card(Rank::Ten, Suit::Hearts).to_string(), "10♥");
    assert_eq!(card(Rank::Jack, Suit::Diamonds).to_string(), "J♦");
    assert_eq!(card(Rank::Ace, Suit::Spades).to_string(), "A♠");
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default()
        .with_decks(4)
        .with_stand_value(16)
        .with_max_cards(6)
        .with_ace_valuation(AceValuation::AlwaysLow);

    assert_eq!(options.decks, 4);
    assert_eq!(options.stand_value, 16);
    assert_eq!(options.max_cards, 6);
    assert_eq!(options.ace_valuation, AceValuation::AlwaysLow);
}
