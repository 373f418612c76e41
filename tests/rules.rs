//! Classification, enumeration and move generation tests.

use tienlen::combinations::combinations;
use tienlen::{
    Card, CardId, DECK_SIZE, Deck, Hand, HandCategory, Move, Rank, Suit, Tally, classify,
    legal_moves,
};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(
        CardId((suit.index() * Rank::ALL.len() + rank.index()) as u8),
        rank,
        suit,
    )
}

fn of_category(moves: &[Move], category: HandCategory) -> Vec<&Move> {
    moves.iter().filter(|m| m.category == category).collect()
}

#[test]
fn rank_and_suit_orders() {
    assert!(Rank::Three < Rank::Four);
    assert!(Rank::King < Rank::Ace);
    assert!(Rank::Ace < Rank::Two);
    assert!(Suit::Spades < Suit::Clubs);
    assert!(Suit::Diamonds < Suit::Hearts);
    assert_eq!(Rank::ALL.first(), Some(&Rank::Three));
    assert_eq!(Rank::ALL.last(), Some(&Rank::Two));
}

#[test]
fn card_key_and_identity() {
    let three = card(Rank::Three, Suit::Clubs);
    assert_eq!(three.key(), "three_of_clubs");
    assert_eq!(card(Rank::Ten, Suit::Hearts).key(), "ten_of_hearts");
    assert!(three.is_opening_card());
    assert!(!card(Rank::Three, Suit::Spades).is_opening_card());

    let mut selected = three;
    selected.selected = true;
    assert_eq!(selected, three);

    let twin = Card::new(CardId(60), Rank::Three, Suit::Clubs);
    assert_ne!(twin, three);
}

#[test]
fn sort_by_rank_breaks_ties_by_suit() {
    let mut hand = Hand::from_cards(vec![
        card(Rank::Two, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Three, Suit::Diamonds),
    ]);
    hand.sort_by_rank();

    let order: Vec<(Rank, Suit)> = hand.cards().iter().map(|c| (c.rank, c.suit)).collect();
    assert_eq!(
        order,
        vec![
            (Rank::Three, Suit::Diamonds),
            (Rank::Seven, Suit::Spades),
            (Rank::Seven, Suit::Hearts),
            (Rank::Two, Suit::Spades),
        ]
    );
}

#[test]
fn full_deck_has_every_card_once() {
    let mut deck = Deck::full();
    assert_eq!(deck.remaining(), DECK_SIZE);

    let mut seen = Vec::new();
    while let Some(card) = deck.draw() {
        assert!(!seen.iter().any(|c: &Card| c.rank == card.rank && c.suit == card.suit));
        seen.push(card);
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), None);
}

#[test]
fn classify_small_sets() {
    let seven_s = card(Rank::Seven, Suit::Spades);
    let seven_c = card(Rank::Seven, Suit::Clubs);
    let seven_d = card(Rank::Seven, Suit::Diamonds);
    let eight_c = card(Rank::Eight, Suit::Clubs);

    assert_eq!(classify(&[]), HandCategory::Invalid);
    assert_eq!(classify(&[seven_s]), HandCategory::Single);
    assert_eq!(classify(&[seven_s, seven_c]), HandCategory::Pair);
    assert_eq!(classify(&[seven_s, eight_c]), HandCategory::Invalid);
    assert_eq!(
        classify(&[seven_s, seven_c, seven_d]),
        HandCategory::ThreeOfAKind
    );
    assert_eq!(
        classify(&[seven_s, seven_c, eight_c]),
        HandCategory::Invalid
    );
    assert_eq!(
        classify(&[seven_s, seven_c, seven_d, card(Rank::Seven, Suit::Hearts)]),
        HandCategory::Invalid
    );
}

#[test]
fn classify_straights() {
    let spades = |ranks: [Rank; 5]| ranks.map(|rank| card(rank, Suit::Spades));

    assert_eq!(
        classify(&spades([Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven])),
        HandCategory::Straight
    );
    assert_eq!(
        classify(&spades([Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Eight])),
        HandCategory::Invalid
    );

    // Input order does not matter.
    let mixed = [
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
    ];
    assert_eq!(classify(&mixed), HandCategory::Straight);

    assert_eq!(
        classify(&spades([Rank::Jack, Rank::Queen, Rank::King, Rank::Ace, Rank::Two])),
        HandCategory::Straight
    );
    assert_eq!(
        classify(&spades([Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five])),
        HandCategory::Straight
    );
    assert_eq!(
        classify(&spades([Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six])),
        HandCategory::Straight
    );
    assert_eq!(
        classify(&spades([Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three])),
        HandCategory::Invalid
    );
    assert_eq!(
        classify(&spades([Rank::King, Rank::Ace, Rank::Two, Rank::Three, Rank::Four])),
        HandCategory::Invalid
    );
}

#[test]
fn classify_four_of_a_kind_with_kicker() {
    let quad = Suit::ALL.map(|suit| card(Rank::Nine, suit));

    let mut low_kicker = quad.to_vec();
    low_kicker.push(card(Rank::Four, Suit::Hearts));
    assert_eq!(classify(&low_kicker), HandCategory::FourOfAKind);

    let mut high_kicker = quad.to_vec();
    high_kicker.insert(0, card(Rank::Two, Suit::Spades));
    assert_eq!(classify(&high_kicker), HandCategory::FourOfAKind);

    let full_house = [
        card(Rank::Nine, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Five, Suit::Spades),
        card(Rank::Five, Suit::Clubs),
    ];
    assert_eq!(classify(&full_house), HandCategory::Invalid);
}

#[test]
fn classify_is_total() {
    let cards: Vec<Card> = [
        (Rank::Three, Suit::Spades),
        (Rank::Three, Suit::Clubs),
        (Rank::Four, Suit::Clubs),
        (Rank::Five, Suit::Hearts),
        (Rank::Six, Suit::Diamonds),
        (Rank::Seven, Suit::Spades),
        (Rank::Two, Suit::Hearts),
    ]
    .into_iter()
    .map(|(rank, suit)| card(rank, suit))
    .collect();

    for k in 1..=cards.len() {
        for subset in combinations(&cards, k) {
            let category = classify(&subset);
            assert_ne!(category, HandCategory::ThreePairStraight);
            assert_ne!(category, HandCategory::FourPairStraight);
        }
    }
    assert_eq!(classify(&cards), HandCategory::Invalid);
}

#[test]
fn combinations_of_three_choose_two() {
    let subsets = combinations(&['a', 'b', 'c'], 2);
    assert_eq!(
        subsets,
        vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]
    );
}

#[test]
fn combinations_edge_sizes() {
    let items = [1, 2, 3, 4, 5];
    assert!(combinations(&items, 0).is_empty());
    assert!(combinations(&items, 6).is_empty());
    assert_eq!(combinations(&items, 5), vec![items.to_vec()]);
    assert_eq!(combinations(&items, 3).len(), 10);
    assert!(combinations::<u8>(&[], 1).is_empty());

    // Equal values at different positions are still distinct subsets.
    assert_eq!(combinations(&[7, 7, 7], 2).len(), 3);
}

#[test]
fn tally_counts_ranks_and_suits() {
    let cards = [
        card(Rank::Seven, Suit::Spades),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Nine, Suit::Clubs),
    ];
    let tally = Tally::of(&cards);
    assert_eq!(tally.rank(Rank::Seven), 2);
    assert_eq!(tally.rank(Rank::Nine), 1);
    assert_eq!(tally.rank(Rank::Two), 0);
    assert_eq!(tally.suit(Suit::Clubs), 2);
    assert_eq!(tally.suit(Suit::Hearts), 0);
    assert_eq!(tally.max_rank_count(), 2);
}

#[test]
fn tally_counts_past_one_byte() {
    let cards: Vec<Card> = (0..300u16)
        .map(|i| Card::new(CardId((i % 256) as u8), Rank::Ace, Suit::Hearts))
        .collect();
    let tally = Tally::of(&cards);
    assert_eq!(tally.rank(Rank::Ace), 300);
    assert_eq!(tally.suit(Suit::Hearts), 300);
    assert_eq!(tally.max_rank_count(), 300);
}

#[test]
fn legal_moves_include_every_single() {
    let mut deck = Deck::full();
    let hand: Vec<Card> = (0..13).filter_map(|_| deck.draw()).collect();

    let moves = legal_moves(&hand);
    let singles = of_category(&moves, HandCategory::Single);
    assert_eq!(singles.len(), hand.len());
    for (single, card) in singles.iter().zip(&hand) {
        assert_eq!(single.cards, vec![*card]);
    }
}

#[test]
fn legal_moves_pairs_and_triples() {
    let hand = [
        card(Rank::Seven, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Queen, Suit::Hearts),
    ];
    let moves = legal_moves(&hand);

    assert_eq!(of_category(&moves, HandCategory::Single).len(), 5);
    assert_eq!(of_category(&moves, HandCategory::Pair).len(), 3);
    let triples = of_category(&moves, HandCategory::ThreeOfAKind);
    assert_eq!(triples.len(), 1);
    assert!(triples[0].cards.iter().all(|c| c.rank == Rank::Seven));
    assert!(of_category(&moves, HandCategory::FourOfAKind).is_empty());
    assert!(of_category(&moves, HandCategory::Straight).is_empty());

    for m in &moves {
        assert_eq!(classify(&m.cards), m.category);
    }
}

#[test]
fn legal_moves_without_duplicates_are_singles_only() {
    let hand = [
        card(Rank::Three, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::King, Suit::Clubs),
    ];
    let moves = legal_moves(&hand);
    assert_eq!(moves.len(), 3);
    assert!(moves.iter().all(|m| m.category == HandCategory::Single));
    assert!(legal_moves(&[]).is_empty());
}

#[test]
fn legal_moves_four_of_a_kind_uses_each_kicker() {
    let mut hand: Vec<Card> = Suit::ALL.iter().map(|&s| card(Rank::Five, s)).collect();
    hand.push(card(Rank::Nine, Suit::Hearts));
    hand.push(card(Rank::King, Suit::Spades));

    let moves = legal_moves(&hand);
    let quads = of_category(&moves, HandCategory::FourOfAKind);
    assert_eq!(quads.len(), 2);
    for quad in &quads {
        assert_eq!(quad.cards.len(), 5);
        assert_eq!(quad.cards.iter().filter(|c| c.rank == Rank::Five).count(), 4);
    }
    assert_eq!(of_category(&moves, HandCategory::Pair).len(), 6);
    assert_eq!(of_category(&moves, HandCategory::ThreeOfAKind).len(), 4);
}

#[test]
fn legal_moves_straight_picks_lowest_suit() {
    let hand = [
        card(Rank::Three, Suit::Hearts),
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Clubs),
        card(Rank::Six, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
    ];
    let moves = legal_moves(&hand);
    let straights = of_category(&moves, HandCategory::Straight);
    assert_eq!(straights.len(), 1);

    let picked: Vec<(Rank, Suit)> = straights[0]
        .cards
        .iter()
        .map(|c| (c.rank, c.suit))
        .collect();
    assert_eq!(
        picked,
        vec![
            (Rank::Three, Suit::Spades),
            (Rank::Four, Suit::Diamonds),
            (Rank::Five, Suit::Clubs),
            (Rank::Six, Suit::Spades),
            (Rank::Seven, Suit::Clubs),
        ]
    );

    // Straights come after every other category.
    assert_eq!(moves.last().map(|m| m.category), Some(HandCategory::Straight));
}

#[test]
fn legal_moves_find_overlapping_and_wrapping_straights() {
    let hand: Vec<Card> = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
    ]
    .into_iter()
    .map(|rank| card(rank, Suit::Diamonds))
    .collect();

    let moves = legal_moves(&hand);
    // 3-4-5-6 needs a seven, so only A-2-3-4-5 and 2-3-4-5-6 qualify.
    assert_eq!(of_category(&moves, HandCategory::Straight).len(), 2);
}
