//! Individually tracked stones.

mod tracker;

pub use tracker::{Stone, StoneId, StoneOwner, StoneTracker};
