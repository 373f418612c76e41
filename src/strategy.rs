//! CPU move selection.

use crate::game::state::DiscardRecord;
use crate::moves::Move;

/// Chooses a play for a computer-controlled player.
///
/// Implementations receive every legal move for the player's hand, in
/// generation order, and the discard history so far. Returning `None`
/// means the player passes.
pub trait Strategy {
    /// Picks one of `moves`, or passes.
    fn choose(&self, moves: &[Move], history: &[DiscardRecord]) -> Option<Move>;
}

/// Leads the three of clubs and passes on everything else.
///
/// On an empty history this picks the first move holding the three of
/// clubs. Responding to an earlier play needs a comparison against the last
/// play, which the house rules do not define yet, so it always passes then.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpeningLead;

impl Strategy for OpeningLead {
    fn choose(&self, moves: &[Move], history: &[DiscardRecord]) -> Option<Move> {
        if !history.is_empty() {
            return None;
        }
        moves.iter().find(|m| m.has_opening_card()).cloned()
    }
}
