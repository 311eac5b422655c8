//! Rules of the game.
//!
//! - `ring`: the 14-slot sowing order and the cursor that walks it
//! - `engine`: `RulesEngine` trait and the `TurnEngine` implementation
//! - `result`: what a single `apply_move` call reports back

pub mod ring;
pub mod engine;
pub mod result;

pub use ring::{ring_index, slot_at, RingCursor, RING_LEN};
pub use engine::{GameResult, RulesEngine, TurnEngine};
pub use result::{Capture, Harvest, MoveResult, MoveStatus, SownSlots};
