//! # pebble-mancala
//!
//! A two-player Mancala game: 2 rows of 6 pits, 4 stones per pit, one store
//! per side.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Synchronous**: `apply_move` runs to completion and never
//!    waits. Timers (the AI's thinking delay) live outside the rules.
//!
//! 2. **One Owned State**: a single `GameState` is passed by reference to
//!    whoever needs it. No globals.
//!
//! 3. **Refuse, Don't Panic**: illegal selections come back as rejected
//!    `MoveResult`s and leave the state untouched.
//!
//! ## Modules
//!
//! - `core`: Sides, pits, board, state, moves, RNG, configuration
//! - `rules`: Sowing ring, `RulesEngine` trait, `TurnEngine`
//! - `stones`: Per-stone identity for animation
//! - `ai`: Random-move opponent with a decision delay
//! - `session`: Input gating, new games, AI toggle, hit-testing
//!
//! ## Example
//!
//! ```
//! use pebble_mancala::{GameState, PitId, Row, RulesEngine, Side, Turn, TurnEngine};
//!
//! let engine = TurnEngine::new();
//! let mut state = GameState::new(Side::Right);
//!
//! let result = engine.apply_move(&mut state, PitId::new(Row::Bottom, 2), Side::Right);
//!
//! assert!(result.extra_turn);
//! assert_eq!(state.turn, Turn::Side(Side::Right));
//! assert_eq!(state.board.score(Side::Right), 1);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod stones;
pub mod ai;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, GameConfig, GameRng, GameState, Move, MoveRecord, PitId, Row, Side, SideMap, Slot,
    Turn, TOTAL_STONES,
};

pub use crate::error::{ConfigError, IllegalMove, InvalidPosition};

pub use crate::rules::{
    Capture, GameResult, Harvest, MoveResult, MoveStatus, RingCursor, RulesEngine, TurnEngine,
};

pub use crate::stones::{Stone, StoneId, StoneOwner, StoneTracker};

pub use crate::ai::{AiAgent, AiPhase};

pub use crate::session::{BoardLayout, Session};
