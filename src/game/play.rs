use alloc::vec::Vec;

use crate::card::{Card, CardId};
use crate::category::{HandCategory, classify};
use crate::error::PlayError;
use crate::player::PlayerId;
use crate::sync::Locked;

use super::{DiscardRecord, Table};

impl Table {
    /// Toggles the selected flag of a card in a player's hand.
    ///
    /// Does nothing if the player does not exist or does not hold the card.
    pub fn select(&self, player_id: PlayerId, card_id: CardId) {
        self.players.with(|players| {
            let toggled = players
                .iter_mut()
                .find(|p| p.id == player_id)
                .and_then(|p| p.hand.toggle_selected(card_id));
            tracing::trace!(player = player_id, card = card_id.0, ?toggled, "select");
        });
    }

    /// Classifies a player's current selection.
    ///
    /// Returns `None` if no player has that id.
    pub fn selected_category(&self, player_id: PlayerId) -> Option<HandCategory> {
        let player = self.player(player_id)?;
        Some(classify(&player.hand.selected()))
    }

    /// Plays cards from a player's hand onto the table.
    ///
    /// The cards must form a legal combination, and the first play of the
    /// game must include the three of clubs. On success the cards leave the
    /// hand and are appended to the discard history.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found, `cards` is empty, a
    /// card is missing from the hand or listed twice, the cards do not form a
    /// legal hand, or an opening play lacks the three of clubs. The hand is
    /// unchanged on error.
    pub fn play(&self, player_id: PlayerId, cards: &[CardId]) -> Result<DiscardRecord, PlayError> {
        if cards.is_empty() {
            return Err(PlayError::NothingSelected);
        }

        let mut players = self.players.lock();
        let player = players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(PlayError::PlayerNotFound)?;

        let chosen: Vec<Card> = cards
            .iter()
            .map(|&id| player.hand.get(id).copied())
            .collect::<Option<_>>()
            .ok_or(PlayError::CardNotFound)?;

        let category = classify(&chosen);
        if !category.is_valid() {
            return Err(PlayError::InvalidHand);
        }

        let mut discards = self.discards.lock();
        if discards.is_empty() && !chosen.iter().any(Card::is_opening_card) {
            return Err(PlayError::MissingOpeningCard);
        }

        let taken = player.hand.take(cards).ok_or(PlayError::CardNotFound)?;
        drop(players);

        let record = DiscardRecord {
            cards: taken,
            category,
            owner: player_id,
        };
        discards.push(record.clone());
        drop(discards);

        tracing::debug!(player = player_id, ?category, "played cards");

        Ok(record)
    }

    /// Plays the player's currently selected cards.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::NothingSelected`] if no card is selected, and
    /// otherwise the same errors as [`Table::play`].
    pub fn play_selected(&self, player_id: PlayerId) -> Result<DiscardRecord, PlayError> {
        let player = self.player(player_id).ok_or(PlayError::PlayerNotFound)?;
        let ids: Vec<CardId> = player.hand.selected().iter().map(|c| c.id).collect();
        self.play(player_id, &ids)
    }
}
