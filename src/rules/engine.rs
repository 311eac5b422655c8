//! Turn engine: sowing, capture, end-of-game harvest and turn order.
//!
//! `apply_move` runs to completion synchronously. It either refuses the
//! selection without touching the state, or:
//!
//! 1. lifts every stone from the selected pit,
//! 2. sows them one per slot around the ring, skipping the opponent's store,
//! 3. captures if the last stone landed alone in one of the mover's pits,
//! 4. ends the game if either row is now empty,
//! 5. otherwise passes the turn, unless the last stone landed in the
//!    mover's own store.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::result::{Capture, Harvest, MoveResult, MoveStatus, SownSlots};
use super::ring::RingCursor;
use crate::core::{
    Board, GameState, Move, MoveRecord, PitId, Row, Side, Slot, Turn, PITS_PER_ROW, TOTAL_STONES,
};
use crate::error::IllegalMove;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate_move`: Must not mutate; reports the first failed precondition
/// - `apply_move`: Must be deterministic and leave the state untouched when
///   the move is rejected
/// - `finish_if_exhausted`: Ends the game if a row is empty
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Check the preconditions of a pit selection.
    fn validate_move(&self, state: &GameState, pit: PitId, side: Side) -> Result<(), IllegalMove>;

    /// Apply a pit selection to the game state.
    fn apply_move(&self, state: &mut GameState, pit: PitId, side: Side) -> MoveResult;

    /// Harvest the board and end the game if either row is empty.
    ///
    /// Returns the stones swept into each store, or `None` if the game
    /// continues (or had already ended).
    fn finish_if_exhausted(&self, state: &mut GameState) -> Option<Harvest>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Pits `side` may select right now, column 0 first.
    fn legal_moves(&self, state: &GameState, side: Side) -> SmallVec<[PitId; PITS_PER_ROW]> {
        PitId::in_row(side.row())
            .filter(|&pit| self.validate_move(state, pit, side).is_ok())
            .collect()
    }

    /// Check a single selection.
    fn is_legal(&self, state: &GameState, pit: PitId, side: Side) -> bool {
        self.validate_move(state, pit, side).is_ok()
    }
}

/// The Mancala rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnEngine;

impl TurnEngine {
    /// Create a new engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn rejected(state: &GameState, pit: PitId, side: Side, reason: IllegalMove) -> MoveResult {
        MoveResult {
            status: MoveStatus::Rejected(reason),
            side,
            pit,
            sown: SownSlots::new(),
            capture: None,
            harvest: None,
            extra_turn: false,
            scores: state.board.scores(),
            game_over: state.game_over,
            turn: state.turn,
        }
    }

    /// Capture if the last stone landed alone in one of the mover's pits.
    fn capture_at(board: &mut Board, landed: PitId, side: Side) -> Option<Capture> {
        if landed.owner() != side || board.pit_count(landed) != 1 {
            return None;
        }

        let opposite = landed.opposite();
        let captured = board.take(opposite);
        board.take(landed);
        board.add_score(side, captured + 1);

        Some(Capture {
            pit: landed,
            opposite,
            captured,
        })
    }

    /// Final turn value: the side with more stones, or a tie.
    fn leader(board: &Board) -> Turn {
        let left = board.score(Side::Left);
        let right = board.score(Side::Right);
        match left.cmp(&right) {
            std::cmp::Ordering::Greater => Turn::Side(Side::Left),
            std::cmp::Ordering::Less => Turn::Side(Side::Right),
            std::cmp::Ordering::Equal => Turn::Tie,
        }
    }
}

impl RulesEngine for TurnEngine {
    fn validate_move(&self, state: &GameState, pit: PitId, side: Side) -> Result<(), IllegalMove> {
        if state.game_over {
            return Err(IllegalMove::GameOver);
        }
        if state.turn != Turn::Side(side) {
            return Err(IllegalMove::NotYourTurn {
                side,
                turn: state.turn,
            });
        }
        if pit.row() != side.row() {
            return Err(IllegalMove::WrongRow {
                pit,
                side,
                expected: side.row(),
            });
        }
        if state.board.pit_count(pit) == 0 {
            return Err(IllegalMove::EmptyPit(pit));
        }
        Ok(())
    }

    fn apply_move(&self, state: &mut GameState, pit: PitId, side: Side) -> MoveResult {
        if let Err(reason) = self.validate_move(state, pit, side) {
            trace!(%pit, %side, %reason, "move rejected");
            return Self::rejected(state, pit, side, reason);
        }

        let stones = state.board.take(pit);
        let sown: SownSlots = RingCursor::new(pit, side).take(usize::from(stones)).collect();
        for &slot in &sown {
            trace!(%slot, "sow");
            state.board.deposit(slot);
        }

        let last = sown.last().copied();
        let capture = match last {
            Some(Slot::Pit(landed)) => Self::capture_at(&mut state.board, landed, side),
            _ => None,
        };
        if let Some(capture) = &capture {
            debug!(
                %side,
                pit = %capture.pit,
                opposite = %capture.opposite,
                captured = capture.captured,
                "capture"
            );
        }

        let extra_turn = last == Some(Slot::Store(side));
        let harvest = self.finish_if_exhausted(state);
        if !state.game_over {
            state.turn = Turn::Side(if extra_turn { side } else { side.opponent() });
        }

        let number = state.move_count() + 1;
        state.record_move(MoveRecord::new(Move::new(side, pit), number, stones, extra_turn));

        debug_assert_eq!(
            state.board.total_stones(),
            TOTAL_STONES,
            "stone count drifted after {side} played {pit}"
        );
        debug!(%side, %pit, stones, extra_turn, turn = %state.turn, "move applied");

        MoveResult {
            status: MoveStatus::Applied,
            side,
            pit,
            sown,
            capture,
            harvest,
            extra_turn,
            scores: state.board.scores(),
            game_over: state.game_over,
            turn: state.turn,
        }
    }

    fn finish_if_exhausted(&self, state: &mut GameState) -> Option<Harvest> {
        if state.game_over || !Row::ALL.into_iter().any(|row| state.board.is_row_empty(row)) {
            return None;
        }

        // Each row's leftovers go to the row's owner.
        let mut harvest = Harvest::with_value(0);
        for row in Row::ALL {
            let owner = row.owner();
            let stones = state.board.clear_row(row);
            state.board.add_score(owner, stones);
            harvest[owner] = stones;
        }

        state.game_over = true;
        state.turn = Self::leader(&state.board);

        debug!(
            left = state.board.score(Side::Left),
            right = state.board.score(Side::Right),
            result = %state.turn,
            "game over"
        );
        Some(harvest)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if !state.game_over {
            return None;
        }
        match state.turn {
            Turn::Side(side) => Some(GameResult::Winner(side)),
            Turn::Tie => Some(GameResult::Draw),
        }
    }
}
