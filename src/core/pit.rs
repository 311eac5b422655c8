//! Pit and slot identification.
//!
//! A `PitId` names one of the 12 pits: a row plus a column in `0..6`.
//! A `Slot` is any place a sown stone can land: a pit or a side's store.

use serde::{Deserialize, Serialize};

use super::side::{Row, Side};
use crate::error::InvalidPosition;

/// Number of pits in each row.
pub const PITS_PER_ROW: usize = 6;

/// Total number of pits on the board.
pub const PIT_COUNT: usize = PITS_PER_ROW * 2;

/// Identifier for one pit on the board.
///
/// Columns run 0..6 from the left store towards the right store in both rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPitId")]
pub struct PitId {
    row: Row,
    col: u8,
}

/// Unchecked wire form of a `PitId`.
#[derive(Deserialize)]
struct RawPitId {
    row: Row,
    col: u8,
}

impl TryFrom<RawPitId> for PitId {
    type Error = InvalidPosition;

    fn try_from(raw: RawPitId) -> Result<Self, Self::Error> {
        PitId::try_new(raw.row, usize::from(raw.col)).ok_or(InvalidPosition::PitColumn(raw.col))
    }
}

impl PitId {
    /// Create a pit ID.
    ///
    /// Panics if `col` is not in `0..6`. Use [`PitId::try_new`] for input
    /// that has not been validated.
    #[must_use]
    pub fn new(row: Row, col: usize) -> Self {
        assert!(col < PITS_PER_ROW, "Pit column must be in 0..6, got {col}");
        Self { row, col: col as u8 }
    }

    /// Create a pit ID, returning `None` if the column is out of range.
    #[must_use]
    pub fn try_new(row: Row, col: usize) -> Option<Self> {
        (col < PITS_PER_ROW).then(|| Self { row, col: col as u8 })
    }

    /// The row this pit sits in.
    #[must_use]
    pub const fn row(self) -> Row {
        self.row
    }

    /// The column of this pit (0..6).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// The side that owns this pit.
    #[must_use]
    pub const fn owner(self) -> Side {
        self.row.owner()
    }

    /// The pit directly across the board (same column, other row).
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self {
            row: self.row.opposite(),
            col: self.col,
        }
    }

    /// All pits in a row, column 0 first.
    pub fn in_row(row: Row) -> impl Iterator<Item = PitId> {
        (0..PITS_PER_ROW).map(move |col| PitId::new(row, col))
    }

    /// All 12 pits, top row first.
    pub fn all() -> impl Iterator<Item = PitId> {
        Row::ALL.into_iter().flat_map(PitId::in_row)
    }
}

impl std::fmt::Display for PitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = match self.row {
            Row::Top => "top",
            Row::Bottom => "bottom",
        };
        write!(f, "{row}[{}]", self.col)
    }
}

/// A place a stone can be sown into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Pit(PitId),
    Store(Side),
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Pit(pit) => write!(f, "{pit}"),
            Slot::Store(side) => write!(f, "{side} store"),
        }
    }
}
