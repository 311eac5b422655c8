//! Random-move opponent with a decision delay.
//!
//! The agent is a two-state machine driven by `poll`:
//!
//! - `Idle`: when it becomes the agent's turn, schedule a decision for
//!   `now + delay` and move to `Deciding`.
//! - `Deciding`: once the deadline passes, pick a uniformly random
//!   non-empty pit on the agent's row and go back to `Idle`.
//!
//! Time is whatever monotonic `Duration` the caller passes in, so the agent
//! never sleeps and never touches the game state itself.

use std::time::Duration;

use tracing::debug;

use crate::core::{GameRng, GameState, Move, Side};
use crate::rules::RulesEngine;

/// Agent state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiPhase {
    /// Waiting for its turn.
    Idle,
    /// A decision is pending until `due`.
    Deciding { due: Duration },
}

/// Plays one side by picking random legal pits.
#[derive(Clone, Debug)]
pub struct AiAgent {
    side: Side,
    delay: Duration,
    phase: AiPhase,
    rng: GameRng,
}

impl AiAgent {
    /// Create an idle agent for `side`.
    #[must_use]
    pub fn new(side: Side, delay: Duration, rng: GameRng) -> Self {
        Self {
            side,
            delay,
            phase: AiPhase::Idle,
            rng,
        }
    }

    /// The side this agent plays.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> AiPhase {
        self.phase
    }

    /// Drop any pending decision.
    pub fn reset(&mut self) {
        self.phase = AiPhase::Idle;
    }

    /// Advance the state machine to `now`.
    ///
    /// Returns the move to play once a pending decision comes due.
    pub fn poll<E: RulesEngine>(
        &mut self,
        engine: &E,
        state: &GameState,
        now: Duration,
    ) -> Option<Move> {
        match self.phase {
            AiPhase::Idle => {
                if state.side_to_move() == Some(self.side) {
                    let due = now + self.delay;
                    debug!(side = %self.side, ?due, "ai deciding");
                    self.phase = AiPhase::Deciding { due };
                }
                None
            }
            AiPhase::Deciding { due } if now < due => None,
            AiPhase::Deciding { .. } => {
                self.phase = AiPhase::Idle;
                self.choose(engine, state)
            }
        }
    }

    /// Pick a uniformly random legal pit, if any.
    pub fn choose<E: RulesEngine>(&mut self, engine: &E, state: &GameState) -> Option<Move> {
        let pits = engine.legal_moves(state, self.side);
        if pits.is_empty() {
            return None;
        }
        let pit = pits[self.rng.gen_range_usize(0..pits.len())];
        debug!(side = %self.side, %pit, "ai chose");
        Some(Move::new(self.side, pit))
    }
}
