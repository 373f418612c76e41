//! A player's hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardId, sort_by_rank};

/// The cards a player currently holds.
///
/// Order carries no meaning except after an explicit [`Hand::sort_by_rank`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card with the given id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Returns whether the hand holds the card with the given id.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Returns whether the hand holds the three of clubs.
    #[must_use]
    pub fn has_opening_card(&self) -> bool {
        self.cards.iter().any(Card::is_opening_card)
    }

    /// Toggles the selected flag of a card.
    ///
    /// Returns the new flag, or `None` if the card is not in the hand.
    pub fn toggle_selected(&mut self, id: CardId) -> Option<bool> {
        let card = self.cards.iter_mut().find(|card| card.id == id)?;
        card.selected = !card.selected;
        Some(card.selected)
    }

    /// Returns copies of the selected cards, in hand order.
    #[must_use]
    pub fn selected(&self) -> Vec<Card> {
        self.cards.iter().filter(|card| card.selected).copied().collect()
    }

    /// Removes the cards with the given ids and returns them.
    ///
    /// Either every id is found and removed, or the hand is left untouched
    /// and `None` is returned. Returned cards are unselected.
    pub fn take(&mut self, ids: &[CardId]) -> Option<Vec<Card>> {
        let all_present = ids.iter().all(|&id| self.contains(id));
        let distinct = ids
            .iter()
            .enumerate()
            .all(|(i, id)| !ids[i + 1..].contains(id));
        if !all_present || !distinct {
            return None;
        }

        let mut taken = Vec::with_capacity(ids.len());
        self.cards.retain(|card| {
            if ids.contains(&card.id) {
                let mut card = *card;
                card.selected = false;
                taken.push(card);
                false
            } else {
                true
            }
        });
        Some(taken)
    }

    /// Sorts the hand by ascending rank, ties broken by suit.
    pub fn sort_by_rank(&mut self) {
        sort_by_rank(&mut self.cards);
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
