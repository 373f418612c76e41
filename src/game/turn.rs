use alloc::vec::Vec;

use crate::card::Card;
use crate::error::TableError;
use crate::moves::{Move, legal_moves};
use crate::player::{Player, PlayerId};
use crate::sync::Locked;

use super::Table;

impl Table {
    /// Returns the player holding the three of clubs.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::StartingCardMissing`] if no hand holds the three
    /// of clubs. After a full deal this cannot happen, so callers should
    /// treat it as fatal.
    pub fn find_starting_player(&self) -> Result<Player, TableError> {
        let starter = self.players.with(|players| {
            players
                .iter()
                .find(|p| p.hand.has_opening_card())
                .cloned()
        });

        starter.ok_or_else(|| {
            tracing::warn!("no player holds the three of clubs");
            TableError::StartingCardMissing
        })
    }

    /// Makes `player_id` the only active player.
    ///
    /// For a computer-controlled player this also selects its play and
    /// returns it; `None` means it passes. The play is not made: pass its
    /// cards to [`Table::play`] to commit it. The human player always gets
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::PlayerNotFound`] if no player has that id. No
    /// flag is changed in that case.
    pub fn activate_player(&self, player_id: PlayerId) -> Result<Option<Move>, TableError> {
        let cpu_cards = self.players.with(|players| -> Result<Option<Vec<Card>>, TableError> {
            let index = players
                .iter()
                .position(|p| p.id == player_id)
                .ok_or(TableError::PlayerNotFound)?;

            for player in players.iter_mut() {
                player.is_active = false;
            }
            let player = &mut players[index];
            player.is_active = true;

            Ok((!player.is_human).then(|| player.hand.cards().to_vec()))
        })?;

        tracing::debug!(player = player_id, cpu = cpu_cards.is_some(), "activated player");

        Ok(cpu_cards.and_then(|cards| self.choose_move(player_id, &cards)))
    }

    /// Picks a play for the given cards using the table's strategy.
    ///
    /// While nothing has been played, only moves holding the three of clubs
    /// are offered to the strategy.
    fn choose_move(&self, player_id: PlayerId, cards: &[Card]) -> Option<Move> {
        let mut moves = legal_moves(cards);

        self.discards.with(|history| {
            if history.is_empty() {
                moves.retain(Move::has_opening_card);
            }

            let chosen = self.strategy.choose(&moves, history);
            tracing::debug!(
                player = player_id,
                candidates = moves.len(),
                category = ?chosen.as_ref().map(|m| m.category),
                "cpu chose move"
            );
            chosen
        })
    }

    /// Returns every legal move for a player's current hand.
    ///
    /// Returns `None` if no player has that id.
    pub fn legal_moves_for(&self, player_id: PlayerId) -> Option<Vec<Move>> {
        let cards = self.player(player_id)?.hand.cards().to_vec();
        Some(legal_moves(&cards))
    }
}
