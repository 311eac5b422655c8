//! Outcome of a single `apply_move` call.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PitId, Side, SideMap, Slot, Turn};
use crate::error::IllegalMove;

/// Landing slots of one sowing, in order.
/// Inline capacity covers a full lap plus change without heap allocation.
pub type SownSlots = SmallVec<[Slot; 16]>;

/// Whether the move went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStatus {
    /// The board was mutated.
    Applied,
    /// The selection was refused; nothing changed.
    Rejected(IllegalMove),
}

/// A capture triggered by the last sown stone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Own pit the last stone landed in.
    pub pit: PitId,
    /// Pit across from it.
    pub opposite: PitId,
    /// Stones taken from the opposite pit.
    pub captured: u8,
}

impl Capture {
    /// Stones added to the mover's store: the captured ones plus the lander.
    #[must_use]
    pub fn banked(&self) -> u8 {
        self.captured + 1
    }
}

/// Stones swept into each store when the game ends.
pub type Harvest = SideMap<u8>;

/// Everything a caller needs to know about one `apply_move` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Applied or rejected.
    pub status: MoveStatus,

    /// The side that asked to move.
    pub side: Side,

    /// The selected pit.
    pub pit: PitId,

    /// Where each lifted stone landed, in sowing order.
    pub sown: SownSlots,

    /// Capture made by the last stone.
    pub capture: Option<Capture>,

    /// End-of-game sweep, if this move finished the game.
    pub harvest: Option<Harvest>,

    /// The last stone landed in the mover's own store.
    pub extra_turn: bool,

    /// Scores after the call.
    pub scores: SideMap<u8>,

    /// Whether the game is over after the call.
    pub game_over: bool,

    /// Turn after the call.
    pub turn: Turn,
}

impl MoveResult {
    /// True if the call changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self.status, MoveStatus::Rejected(_))
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<IllegalMove> {
        match self.status {
            MoveStatus::Applied => None,
            MoveStatus::Rejected(reason) => Some(reason),
        }
    }

    /// Stones captured from the opposite pit (0 if no capture).
    #[must_use]
    pub fn captured(&self) -> u8 {
        self.capture.map_or(0, |c| c.captured)
    }

    /// The slot the last stone landed in.
    #[must_use]
    pub fn last_slot(&self) -> Option<Slot> {
        self.sown.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Row;

    fn rejected(reason: IllegalMove) -> MoveResult {
        MoveResult {
            status: MoveStatus::Rejected(reason),
            side: Side::Left,
            pit: PitId::new(Row::Top, 0),
            sown: SownSlots::new(),
            capture: None,
            harvest: None,
            extra_turn: false,
            scores: SideMap::with_value(0),
            game_over: false,
            turn: Turn::Side(Side::Right),
        }
    }

    #[test]
    fn test_rejected_result() {
        let result = rejected(IllegalMove::GameOver);

        assert!(result.is_noop());
        assert_eq!(result.rejection(), Some(IllegalMove::GameOver));
        assert_eq!(result.captured(), 0);
        assert_eq!(result.last_slot(), None);
    }

    #[test]
    fn test_capture_banked() {
        let capture = Capture {
            pit: PitId::new(Row::Top, 3),
            opposite: PitId::new(Row::Bottom, 3),
            captured: 5,
        };
        assert_eq!(capture.banked(), 6);
    }
}
