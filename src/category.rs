//! Hand classification.

use crate::card::{Card, Rank, sort_by_rank};

/// The category a set of cards forms under the house rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    /// Not a legal play.
    Invalid,
    /// One card.
    Single,
    /// Two cards of the same rank.
    Pair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards of consecutive rank.
    Straight,
    /// Three consecutive pairs. Never produced by [`classify`].
    ThreePairStraight,
    /// Four cards of one rank plus a kicker.
    FourOfAKind,
    /// Four consecutive pairs. Never produced by [`classify`].
    FourPairStraight,
}

impl HandCategory {
    /// Returns whether the category is a legal play.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

const STRAIGHT_LEN: usize = 5;

/// Index of the first rank of every legal straight.
///
/// Plain runs start at Three through Jack (J-Q-K-A-2 ends on the Two). The
/// Ace and Two starts wrap past the Two back to the Three.
const STRAIGHT_STARTS: [usize; 11] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 11, 12];

/// Returns the ranks of every legal straight, lowest start first.
pub fn straight_runs() -> impl Iterator<Item = [Rank; STRAIGHT_LEN]> {
    STRAIGHT_STARTS.iter().map(|&start| {
        let mut run = [Rank::Three; STRAIGHT_LEN];
        for (offset, slot) in run.iter_mut().enumerate() {
            *slot = Rank::ALL[(start + offset) % Rank::ALL.len()];
        }
        run
    })
}

fn is_straight(sorted: &[Card; STRAIGHT_LEN]) -> bool {
    let mut ranks = [Rank::Three; STRAIGHT_LEN];
    for (slot, card) in ranks.iter_mut().zip(sorted) {
        *slot = card.rank;
    }

    straight_runs().any(|mut run| {
        run.sort_unstable();
        run == ranks
    })
}

fn is_four_of_a_kind(sorted: &[Card; STRAIGHT_LEN]) -> bool {
    let quad = sorted[2].rank;
    sorted[1].rank == quad
        && sorted[3].rank == quad
        && (sorted[0].rank == quad || sorted[4].rank == quad)
}

/// Classifies a set of cards.
///
/// Total over every input: anything that is not a recognised combination is
/// [`HandCategory::Invalid`].
#[must_use]
pub fn classify(cards: &[Card]) -> HandCategory {
    match cards {
        [_] => HandCategory::Single,
        [a, b] if a.rank == b.rank => HandCategory::Pair,
        [a, b, c] if a.rank == b.rank && b.rank == c.rank => HandCategory::ThreeOfAKind,
        [a, b, c, d, e] => {
            let mut sorted = [*a, *b, *c, *d, *e];
            sort_by_rank(&mut sorted);

            if is_four_of_a_kind(&sorted) {
                HandCategory::FourOfAKind
            } else if is_straight(&sorted) {
                HandCategory::Straight
            } else {
                HandCategory::Invalid
            }
        }
        _ => HandCategory::Invalid,
    }
}
