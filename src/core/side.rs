//! Sides, rows and per-side data storage.
//!
//! ## Side
//!
//! The two players: `Left` and `Right`. Each side owns one row of pits and
//! the store at its end of the board.
//!
//! ## Row
//!
//! `Top` (row 0) belongs to `Left`, `Bottom` (row 1) belongs to `Right`.
//!
//! ## SideMap
//!
//! Fixed per-side storage backed by `[T; 2]`, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Get the raw side index (`Left` = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// The row of pits this side owns.
    #[must_use]
    pub const fn row(self) -> Row {
        match self {
            Side::Left => Row::Top,
            Side::Right => Row::Bottom,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(format!("unknown side '{other}' (expected 'left' or 'right')")),
        }
    }
}

/// One of the two rows of six pits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Row {
    Top,
    Bottom,
}

impl Row {
    /// Both rows, top first.
    pub const ALL: [Row; 2] = [Row::Top, Row::Bottom];

    /// Get the raw row index (`Top` = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Row::Top => 0,
            Row::Bottom => 1,
        }
    }

    /// Look up a row by raw index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Row> {
        match index {
            0 => Some(Row::Top),
            1 => Some(Row::Bottom),
            _ => None,
        }
    }

    /// The row across the board.
    #[must_use]
    pub const fn opposite(self) -> Row {
        match self {
            Row::Top => Row::Bottom,
            Row::Bottom => Row::Top,
        }
    }

    /// The side that owns this row.
    #[must_use]
    pub const fn owner(self) -> Side {
        match self {
            Row::Top => Side::Left,
            Row::Bottom => Side::Right,
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use pebble_mancala::core::{Side, SideMap};
///
/// let mut scores: SideMap<u8> = SideMap::with_value(0);
/// scores[Side::Right] += 3;
///
/// assert_eq!(scores[Side::Left], 0);
/// assert_eq!(scores[Side::Right], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Left), factory(Side::Right)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Side, &T) pairs, left first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
