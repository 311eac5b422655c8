//! Core types: sides, pits, board, state, moves, RNG, configuration.
//!
//! Everything here is plain data. The rules that change it live in
//! `crate::rules`.

pub mod side;
pub mod pit;
pub mod board;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use side::{Row, Side, SideMap};
pub use pit::{PitId, Slot, PITS_PER_ROW, PIT_COUNT};
pub use board::{Board, STONES_PER_PIT, TOTAL_STONES};
pub use rng::GameRng;
pub use config::{AiConfig, GameConfig, MAX_AI_DELAY_MS};
pub use action::{Move, MoveRecord};
pub use state::{GameState, Turn};
