//! Table state and game flow.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::category::{HandCategory, classify};
use crate::deck::Deck;
use crate::options::{SEATS, TableOptions};
use crate::player::{Player, PlayerId};
use crate::strategy::{OpeningLead, Strategy};
use crate::sync::{Locked, Mutex};

mod play;
pub mod state;
mod turn;

pub use state::DiscardRecord;

/// A Tien Len table: four seated players, the deck and the discard history.
///
/// The table owns every card. A card is always in exactly one of the deck,
/// a player's hand or a discard record, and the three together always hold
/// all 52 cards.
pub struct Table {
    /// Cards not yet dealt.
    pub deck: Mutex<Deck>,
    /// Players in seat order (`players[i].id == i`).
    pub players: Mutex<Vec<Player>>,
    /// Combinations played so far, oldest first.
    pub discards: Mutex<Vec<DiscardRecord>>,
    /// Table options.
    pub options: TableOptions,
    /// Policy used by computer-controlled players.
    strategy: Box<dyn Strategy + Send + Sync>,
}

impl Table {
    /// Creates a table, shuffles a full deck with the given seed and deals it
    /// out, one card per seat in turn, until the deck is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use tienlen::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.cards_remaining(), 0);
    /// assert!(table.players().iter().all(|p| p.hand.len() == 13));
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::full();
        deck.shuffle(&mut rng);

        let start = if options.deal_from_random_seat {
            rng.random_range(0..SEATS)
        } else {
            0
        };

        let mut players = Self::seat_players(&options);
        Self::deal(&mut deck, &mut players, start);

        tracing::debug!(seed, start, "dealt new table");

        Self {
            deck: Mutex::new(deck),
            players: Mutex::new(players),
            discards: Mutex::new(Vec::new()),
            options,
            strategy: Box::new(OpeningLead),
        }
    }

    /// Replaces the policy used by computer-controlled players.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Strategy + Send + Sync + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    fn seat_players(options: &TableOptions) -> Vec<Player> {
        let human_seat = options.human_seat_clamped();
        let mut cpu_names = options.cpu_names.iter();

        (0..SEATS)
            .map(|seat| {
                let id = seat as PlayerId;
                if seat == human_seat {
                    Player::new(id, options.human_name.clone(), true)
                } else {
                    let name = cpu_names.next().cloned().unwrap_or_default();
                    Player::new(id, name, false)
                }
            })
            .collect()
    }

    fn deal(deck: &mut Deck, players: &mut [Player], start: usize) {
        let mut seat = start;
        while let Some(card) = deck.draw() {
            players[seat].hand.add_card(card);
            seat = (seat + 1) % players.len();
        }
    }

    /// Returns a snapshot of every player.
    pub fn players(&self) -> Vec<Player> {
        self.players.with(|players| players.clone())
    }

    /// Returns a snapshot of one player.
    pub fn player(&self, player_id: PlayerId) -> Option<Player> {
        self.players
            .with(|players| players.iter().find(|p| p.id == player_id).cloned())
    }

    /// Returns the human-controlled player.
    pub fn human_player(&self) -> Option<Player> {
        self.players
            .with(|players| players.iter().find(|p| p.is_human).cloned())
    }

    /// Returns the player whose turn it is, if any.
    pub fn active_player(&self) -> Option<Player> {
        self.players
            .with(|players| players.iter().find(|p| p.is_active).cloned())
    }

    /// Classifies a set of cards.
    pub fn evaluate_hand(&self, cards: &[Card]) -> HandCategory {
        classify(cards)
    }

    /// Returns a snapshot of the discard history, oldest first.
    pub fn discards(&self) -> Vec<DiscardRecord> {
        self.discards.with(|discards| discards.clone())
    }

    /// Returns the most recent play.
    pub fn last_play(&self) -> Option<DiscardRecord> {
        self.discards.with(|discards| discards.last().cloned())
    }

    /// Returns the number of undealt cards.
    pub fn cards_remaining(&self) -> usize {
        self.deck.with(|deck| deck.remaining())
    }

    /// Returns the number of cards across the deck, every hand and the
    /// discard history.
    pub fn total_cards(&self) -> usize {
        let in_hands: usize = self
            .players
            .with(|players| players.iter().map(|p| p.hand.len()).sum());
        let discarded: usize = self
            .discards
            .with(|discards| discards.iter().map(|d| d.cards.len()).sum());
        self.cards_remaining() + in_hands + discarded
    }
}
