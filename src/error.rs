//! Error types for table operations.

use thiserror::Error;

/// Errors from seating and turn management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Nobody holds the three of clubs.
    ///
    /// A fully dealt deck always places it in some hand, so this signals a
    /// broken card-conservation invariant rather than a recoverable state.
    #[error("no player holds the three of clubs")]
    StartingCardMissing,
}

/// Errors from playing cards onto the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// A card is not in the player's hand, or is listed twice.
    #[error("card not found in hand")]
    CardNotFound,
    /// No cards were given.
    #[error("no cards selected")]
    NothingSelected,
    /// The cards do not form a legal combination.
    #[error("cards do not form a legal hand")]
    InvalidHand,
    /// The first play of the game must include the three of clubs.
    #[error("the opening play must include the three of clubs")]
    MissingOpeningCard,
}
