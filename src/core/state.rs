//! Game state: board, turn and move history.
//!
//! `GameState` is the single owned piece of mutable game data. Renderers
//! read it; only the turn engine writes to it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::board::Board;
use super::side::Side;

/// Whose turn it is.
///
/// `Tie` is only reachable as the final value of a drawn game. Once a game
/// ends, `Side` holds the winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Side(Side),
    Tie,
}

impl Turn {
    /// The side this turn refers to, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Turn::Side(side) => Some(side),
            Turn::Tie => None,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Side(side) => write!(f, "{side}"),
            Turn::Tie => write!(f, "tie"),
        }
    }
}

/// Full game state.
///
/// Uses an `im` persistent vector for the history so snapshots taken by
/// the AI or by tests clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Pits and scores.
    pub board: Board,

    /// Side to move, or the final result once `game_over` is set.
    pub turn: Turn,

    /// Set once a row has been emptied and the board harvested.
    pub game_over: bool,

    /// Applied moves, oldest first.
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a game in the starting position with `first` to move.
    #[must_use]
    pub fn new(first: Side) -> Self {
        Self::from_board(Board::new(), first)
    }

    /// Create a game from an arbitrary position with `to_move` to move.
    #[must_use]
    pub fn from_board(board: Board, to_move: Side) -> Self {
        Self {
            board,
            turn: Turn::Side(to_move),
            game_over: false,
            history: Vector::new(),
        }
    }

    /// Return to the starting position with `first` to move.
    pub fn reset(&mut self, first: Side) {
        *self = Self::new(first);
    }

    /// The side to move, `None` once the game is over.
    #[must_use]
    pub fn side_to_move(&self) -> Option<Side> {
        if self.game_over {
            None
        } else {
            self.turn.side()
        }
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.history.len() as u32
    }

    /// Record an applied move in history.
    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}
