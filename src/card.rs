//! Card types and ordering.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Card rank, ordered from lowest (`Three`) to highest (`Two`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Three, the lowest rank.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// Two, the highest rank.
    Two,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
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
        Self::Two,
    ];

    /// Returns the position of the rank in [`Rank::ALL`] (0 for `Three`, 12 for `Two`).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase English name used in card keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Six => "six",
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
            Self::Ace => "ace",
            Self::Two => "two",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit. Only breaks ties between cards of equal rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades, the lowest suit.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts, the highest suit.
    Hearts,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Diamonds, Self::Hearts];

    /// Returns the position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase English name used in card keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable identity of a physical card.
///
/// Assigned when the deck is built and never derived from rank or suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub u8);

/// A playing card.
///
/// Two cards are equal when their ids are equal; the `selected` flag is
/// transient state of the hand holding the card and takes no part in
/// equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// Identity of the card.
    pub id: CardId,
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
    /// Whether the holder has selected this card.
    pub selected: bool,
}

impl Card {
    /// Creates a new, unselected card.
    #[must_use]
    pub const fn new(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self {
            id,
            rank,
            suit,
            selected: false,
        }
    }

    /// Returns whether this is the three of clubs, which must open the game.
    #[must_use]
    pub fn is_opening_card(&self) -> bool {
        self.rank == Rank::Three && self.suit == Suit::Clubs
    }

    /// Returns the presentation key, e.g. `"three_of_clubs"`.
    ///
    /// The front end maps this key to card artwork, so its format is stable.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}_of_{}", self.rank, self.suit)
    }

    /// Compares two cards by rank, then suit.
    #[must_use]
    pub fn cmp_by_rank(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Sorts cards in place by ascending rank, breaking ties by suit.
pub fn sort_by_rank(cards: &mut [Card]) {
    cards.sort_by(Card::cmp_by_rank);
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
