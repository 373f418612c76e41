//! Table history types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::category::HandCategory;
use crate::player::PlayerId;

/// A combination played onto the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardRecord {
    /// The cards played, no longer in any hand.
    pub cards: Vec<Card>,
    /// The category the cards formed when played.
    pub category: HandCategory,
    /// The player who played them.
    pub owner: PlayerId,
}
