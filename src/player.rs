//! Players seated at the table.

extern crate alloc;

use alloc::string::String;

use crate::hand::Hand;

/// Identifier of a seat at the table.
pub type PlayerId = u8;

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player's id, equal to the seat index.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Cards currently held.
    pub hand: Hand,
    /// Whether this seat is controlled by the local human.
    pub is_human: bool,
    /// Whether it is this player's turn.
    pub is_active: bool,
}

impl Player {
    /// Creates an inactive player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_human: bool) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            is_human,
            is_active: false,
        }
    }
}
