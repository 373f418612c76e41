//! Legal move generation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::category::{HandCategory, classify, straight_runs};
use crate::combinations::combinations;

/// A playable combination drawn from a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// The category the cards form.
    pub category: HandCategory,
    /// The cards to play.
    pub cards: Vec<Card>,
}

impl Move {
    /// Returns whether the move contains the three of clubs.
    #[must_use]
    pub fn has_opening_card(&self) -> bool {
        self.cards.iter().any(Card::is_opening_card)
    }
}

/// Rank and suit counts over a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    ranks: [usize; 13],
    suits: [usize; 4],
}

impl Tally {
    /// Counts the ranks and suits in `cards`.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut tally = Self::default();
        for card in cards {
            tally.ranks[card.rank.index()] += 1;
            tally.suits[card.suit.index()] += 1;
        }
        tally
    }

    /// Returns how many cards of `rank` were counted.
    #[must_use]
    pub const fn rank(&self, rank: Rank) -> usize {
        self.ranks[rank.index()]
    }

    /// Returns how many cards of `suit` were counted.
    #[must_use]
    pub const fn suit(&self, suit: Suit) -> usize {
        self.suits[suit.index()]
    }

    /// Returns the largest count held for any single rank.
    #[must_use]
    pub fn max_rank_count(&self) -> usize {
        self.ranks.iter().copied().max().unwrap_or(0)
    }
}

fn keep(candidates: Vec<Vec<Card>>, wanted: HandCategory, moves: &mut Vec<Move>) {
    moves.extend(
        candidates
            .into_iter()
            .filter(|cards| classify(cards) == wanted)
            .map(|cards| Move {
                category: wanted,
                cards,
            }),
    );
}

fn four_of_a_kind_moves(cards: &[Card], tally: &Tally, moves: &mut Vec<Move>) {
    for rank in Rank::ALL {
        if tally.rank(rank) < 4 {
            continue;
        }
        let quad: Vec<Card> = cards.iter().filter(|c| c.rank == rank).copied().collect();
        let kickers = cards.iter().filter(|c| c.rank != rank);

        let candidates = kickers
            .map(|kicker| {
                let mut five = quad.clone();
                five.push(*kicker);
                five
            })
            .collect();
        keep(candidates, HandCategory::FourOfAKind, moves);
    }
}

fn straight_moves(cards: &[Card], tally: &Tally, moves: &mut Vec<Move>) {
    for run in straight_runs() {
        if run.iter().any(|&rank| tally.rank(rank) == 0) {
            continue;
        }

        let picked: Option<Vec<Card>> = run
            .iter()
            .map(|&rank| {
                cards
                    .iter()
                    .filter(|c| c.rank == rank)
                    .min_by_key(|c| c.suit)
                    .copied()
            })
            .collect();

        if let Some(picked) = picked {
            keep(alloc::vec![picked], HandCategory::Straight, moves);
        }
    }
}

/// Returns every legal play available in `cards`.
///
/// Moves come out grouped as singles, pairs, three-of-a-kinds,
/// four-of-a-kinds and straights, in that order. Straights use the
/// lowest-suit card of each rank.
#[must_use]
pub fn legal_moves(cards: &[Card]) -> Vec<Move> {
    let tally = Tally::of(cards);
    let highest = tally.max_rank_count();

    let mut moves: Vec<Move> = cards
        .iter()
        .map(|card| Move {
            category: HandCategory::Single,
            cards: alloc::vec![*card],
        })
        .collect();

    if highest >= 2 {
        let pool: Vec<Card> = cards
            .iter()
            .filter(|c| tally.rank(c.rank) >= 2)
            .copied()
            .collect();

        keep(combinations(&pool, 2), HandCategory::Pair, &mut moves);
        if highest >= 3 {
            keep(combinations(&pool, 3), HandCategory::ThreeOfAKind, &mut moves);
        }
    }

    if highest >= 4 {
        four_of_a_kind_moves(cards, &tally, &mut moves);
    }

    straight_moves(cards, &tally, &mut moves);

    tracing::trace!(
        cards = cards.len(),
        moves = moves.len(),
        "generated legal moves"
    );
    moves
}
