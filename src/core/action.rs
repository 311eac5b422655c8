//! Move representation: a side selecting one of its pits.

use serde::{Deserialize, Serialize};

use super::pit::PitId;
use super::side::Side;

/// A pit selection by a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the selection.
    pub side: Side,

    /// The selected pit.
    pub pit: PitId,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(side: Side, pit: PitId) -> Self {
        Self { side, pit }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} plays {}", self.side, self.pit)
    }
}

/// An applied move with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Checking turn order after the fact (extra turns)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move that was applied.
    pub mv: Move,

    /// 1-based index of this move within the game.
    pub number: u32,

    /// Stones lifted from the selected pit.
    pub stones: u8,

    /// The last stone landed in the mover's own store.
    pub extra_turn: bool,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: Move, number: u32, stones: u8, extra_turn: bool) -> Self {
        Self {
            mv,
            number,
            stones,
            extra_turn,
        }
    }
}
