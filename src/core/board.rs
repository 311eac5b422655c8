//! Board model: pit counts and per-side scores.
//!
//! The board is a pure data holder. Reads are public; the mutators used
//! while sowing are crate-private so only the turn engine changes a board
//! after construction.
//!
//! ## Layout
//!
//! ```text
//!              top[0] top[1] ... top[5]           (Left's row)
//! Left store                                 Right store
//!              bot[0] bot[1] ... bot[5]           (Right's row)
//! ```
//!
//! ## Invariant
//!
//! `sum(pits) + score(Left) + score(Right) == TOTAL_STONES` at all times.

use serde::{Deserialize, Serialize};

use super::pit::{PitId, Slot, PITS_PER_ROW, PIT_COUNT};
use super::side::{Row, Side, SideMap};
use crate::error::InvalidPosition;

/// Stones placed in every pit at game start.
pub const STONES_PER_PIT: u8 = 4;

/// Stones in play for the whole game.
pub const TOTAL_STONES: u32 = (STONES_PER_PIT as u32) * (PIT_COUNT as u32);

/// Pit counts and store scores.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    pits: [[u8; PITS_PER_ROW]; 2],
    scores: SideMap<u8>,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    pits: [[u8; PITS_PER_ROW]; 2],
    scores: SideMap<u8>,
}

impl TryFrom<RawBoard> for Board {
    type Error = InvalidPosition;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let board = Self {
            pits: raw.pits,
            scores: raw.scores,
        };
        match board.total_stones() {
            TOTAL_STONES => Ok(board),
            total => Err(InvalidPosition::StoneTotal(total)),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board in the starting position: 4 stones per pit, scores 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pits: [[STONES_PER_PIT; PITS_PER_ROW]; 2],
            scores: SideMap::with_value(0),
        }
    }

    /// Build an arbitrary position.
    ///
    /// Panics if the position does not hold exactly `TOTAL_STONES` stones.
    #[must_use]
    pub fn from_parts(
        top: [u8; PITS_PER_ROW],
        bottom: [u8; PITS_PER_ROW],
        left_score: u8,
        right_score: u8,
    ) -> Self {
        let mut scores = SideMap::with_value(0);
        scores[Side::Left] = left_score;
        scores[Side::Right] = right_score;

        let board = Self {
            pits: [top, bottom],
            scores,
        };
        assert_eq!(
            board.total_stones(),
            TOTAL_STONES,
            "Board must hold exactly {TOTAL_STONES} stones"
        );
        board
    }

    /// Stones currently in a pit.
    #[must_use]
    pub fn pit_count(&self, pit: PitId) -> u8 {
        self.pits[pit.row().index()][pit.col()]
    }

    /// Stones in a side's store.
    #[must_use]
    pub fn score(&self, side: Side) -> u8 {
        self.scores[side]
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> SideMap<u8> {
        self.scores
    }

    /// Counts of a whole row, column 0 first.
    #[must_use]
    pub fn row(&self, row: Row) -> &[u8; PITS_PER_ROW] {
        &self.pits[row.index()]
    }

    /// True iff every pit in the row is empty.
    #[must_use]
    pub fn is_row_empty(&self, row: Row) -> bool {
        self.row(row).iter().all(|&n| n == 0)
    }

    /// Stones left in a row.
    #[must_use]
    pub fn row_total(&self, row: Row) -> u32 {
        self.row(row).iter().map(|&n| u32::from(n)).sum()
    }

    /// Stones on the board plus both stores.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        Row::ALL.into_iter().map(|row| self.row_total(row)).sum::<u32>()
            + u32::from(self.scores[Side::Left])
            + u32::from(self.scores[Side::Right])
    }

    /// Return to the starting position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // === Mutation (turn engine only) ===

    /// Empty a pit, returning how many stones it held.
    pub(crate) fn take(&mut self, pit: PitId) -> u8 {
        std::mem::take(&mut self.pits[pit.row().index()][pit.col()])
    }

    /// Drop one stone into a slot.
    pub(crate) fn deposit(&mut self, slot: Slot) {
        match slot {
            Slot::Pit(pit) => self.pits[pit.row().index()][pit.col()] += 1,
            Slot::Store(side) => self.scores[side] += 1,
        }
    }

    /// Add stones to a side's store.
    pub(crate) fn add_score(&mut self, side: Side, stones: u8) {
        self.scores[side] += stones;
    }

    /// Empty a whole row, returning how many stones it held.
    pub(crate) fn clear_row(&mut self, row: Row) -> u8 {
        let taken = self.row(row).iter().sum();
        self.pits[row.index()] = [0; PITS_PER_ROW];
        taken
    }

    fn fmt_row(&self, f: &mut std::fmt::Formatter<'_>, row: Row) -> std::fmt::Result {
        write!(f, "      ")?;
        for count in self.row(row) {
            write!(f, "[{count:>2}]")?;
        }
        writeln!(f)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_row(f, Row::Top)?;
        writeln!(
            f,
            "({:>2})                          ({:>2})",
            self.scores[Side::Left],
            self.scores[Side::Right]
        )?;
        self.fmt_row(f, Row::Bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_new() {
        let board = Board::new();

        for pit in PitId::all() {
            assert_eq!(board.pit_count(pit), STONES_PER_PIT);
        }
        assert_eq!(board.score(Side::Left), 0);
        assert_eq!(board.score(Side::Right), 0);
        assert_eq!(board.total_stones(), TOTAL_STONES);
    }

    #[test]
    fn test_board_from_parts() {
        let board = Board::from_parts([0, 1, 2, 3, 4, 5], [6, 0, 0, 0, 0, 0], 20, 7);

        assert_eq!(board.pit_count(PitId::new(Row::Top, 5)), 5);
        assert_eq!(board.pit_count(PitId::new(Row::Bottom, 0)), 6);
        assert_eq!(board.score(Side::Left), 20);
        assert_eq!(board.row_total(Row::Top), 15);
    }

    #[test]
    #[should_panic(expected = "Board must hold exactly")]
    fn test_board_from_parts_wrong_total() {
        let _ = Board::from_parts([4; 6], [4; 6], 1, 0);
    }

    #[test]
    fn test_is_row_empty() {
        let board = Board::from_parts([0; 6], [1, 0, 0, 0, 0, 0], 30, 17);

        assert!(board.is_row_empty(Row::Top));
        assert!(!board.is_row_empty(Row::Bottom));
    }

    #[test]
    fn test_take_and_deposit() {
        let mut board = Board::new();
        let pit = PitId::new(Row::Top, 1);

        assert_eq!(board.take(pit), 4);
        assert_eq!(board.pit_count(pit), 0);

        board.deposit(Slot::Pit(pit));
        board.deposit(Slot::Store(Side::Right));
        board.deposit(Slot::Store(Side::Right));
        board.deposit(Slot::Store(Side::Right));

        assert_eq!(board.pit_count(pit), 1);
        assert_eq!(board.score(Side::Right), 3);
        assert_eq!(board.total_stones(), TOTAL_STONES);
    }

    #[test]
    fn test_clear_row() {
        let mut board = Board::new();

        assert_eq!(board.clear_row(Row::Bottom), 24);
        assert!(board.is_row_empty(Row::Bottom));
        assert!(!board.is_row_empty(Row::Top));
    }

    #[test]
    fn test_reset() {
        let mut board = Board::from_parts([0; 6], [0; 6], 24, 24);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_deserialize_checks_stone_total() {
        let board = Board::from_parts([0, 1, 2, 3, 4, 5], [6, 0, 0, 0, 0, 0], 20, 7);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["pits"][1][2] = serde_json::json!(40);
        let err = serde_json::from_value::<Board>(value).unwrap_err();
        assert!(err.to_string().contains("got 88"));
    }

    #[test]
    fn test_display() {
        let text = Board::new().to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches("[ 4]").count(), 6);
        assert!(lines[1].starts_with("( 0)"));
    }
}
