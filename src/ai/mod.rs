//! Computer opponent.
//!
//! Deliberately simple: no lookahead, no heuristic. It waits a fixed delay
//! and then plays a uniformly random non-empty pit on its own row.

mod agent;

pub use agent::{AiAgent, AiPhase};
