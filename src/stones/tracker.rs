//! Per-stone identity for renderers that animate stones individually.
//!
//! The rules work on counts only. `StoneTracker` replays each applied
//! `MoveResult` onto 48 named stones so a stone keeps its identity (and
//! whatever colour or position a renderer attached to it) across moves.
//!
//! ## Usage
//!
//! ```
//! use pebble_mancala::core::{GameState, PitId, Row, Side};
//! use pebble_mancala::rules::{RulesEngine, TurnEngine};
//! use pebble_mancala::stones::StoneTracker;
//!
//! let engine = TurnEngine::new();
//! let mut state = GameState::new(Side::Right);
//! let mut stones = StoneTracker::new();
//!
//! let result = engine.apply_move(&mut state, PitId::new(Row::Bottom, 2), Side::Right);
//! stones.apply(&result);
//!
//! assert!(stones.matches(&state.board));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, PitId, Side, Slot, PIT_COUNT, STONES_PER_PIT};
use crate::rules::MoveResult;

/// Identifier for one stone, stable for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoneId(pub u8);

/// Where a stone currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoneOwner {
    /// Sitting in a pit, owned by nobody yet.
    Unowned(PitId),
    /// Banked in a side's store.
    Scored(Side),
}

impl StoneOwner {
    /// The slot this location corresponds to.
    #[must_use]
    pub fn slot(self) -> Slot {
        match self {
            StoneOwner::Unowned(pit) => Slot::Pit(pit),
            StoneOwner::Scored(side) => Slot::Store(side),
        }
    }

    fn from_slot(slot: Slot) -> Self {
        match slot {
            Slot::Pit(pit) => StoneOwner::Unowned(pit),
            Slot::Store(side) => StoneOwner::Scored(side),
        }
    }
}

/// A single stone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stone {
    /// Stable identity, assigned when the tracker is built.
    pub id: StoneId,

    /// Current pit or store.
    pub owner: StoneOwner,
}

/// All 48 stones with their current locations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneTracker {
    stones: Vec<Stone>,
}

impl Default for StoneTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StoneTracker {
    /// Four stones per pit, numbered pit by pit (top row first).
    #[must_use]
    pub fn new() -> Self {
        let stones = PitId::all()
            .flat_map(|pit| std::iter::repeat(pit).take(usize::from(STONES_PER_PIT)))
            .enumerate()
            .map(|(i, pit)| Stone {
                id: StoneId(i as u8),
                owner: StoneOwner::Unowned(pit),
            })
            .collect();

        Self { stones }
    }

    /// Seed stones from an arbitrary board, numbered pit by pit then store
    /// by store.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let pits = PitId::all().map(|pit| (StoneOwner::Unowned(pit), board.pit_count(pit)));
        let stores = Side::ALL
            .into_iter()
            .map(|side| (StoneOwner::Scored(side), board.score(side)));

        let stones = pits
            .chain(stores)
            .flat_map(|(owner, count)| std::iter::repeat(owner).take(usize::from(count)))
            .enumerate()
            .map(|(i, owner)| Stone {
                id: StoneId(i as u8),
                owner,
            })
            .collect();

        Self { stones }
    }

    /// Put every stone back in its starting pit.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// All stones, ordered by id.
    #[must_use]
    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    /// Look up a stone.
    #[must_use]
    pub fn get(&self, id: StoneId) -> Option<&Stone> {
        self.stones.get(usize::from(id.0))
    }

    /// Stones currently in a pit, ordered by id.
    pub fn stones_in(&self, pit: PitId) -> impl Iterator<Item = StoneId> + '_ {
        self.stones
            .iter()
            .filter(move |s| s.owner == StoneOwner::Unowned(pit))
            .map(|s| s.id)
    }

    /// Stones per occupied slot.
    #[must_use]
    pub fn counts(&self) -> FxHashMap<Slot, u8> {
        let mut counts = FxHashMap::default();
        for stone in &self.stones {
            *counts.entry(stone.owner.slot()).or_insert(0) += 1;
        }
        counts
    }

    /// True if the tracked stones agree with a board's counts and scores.
    #[must_use]
    pub fn matches(&self, board: &Board) -> bool {
        let counts = self.counts();
        let count_of = |slot: Slot| counts.get(&slot).copied().unwrap_or(0);

        PitId::all().all(|pit| count_of(Slot::Pit(pit)) == board.pit_count(pit))
            && Side::ALL
                .into_iter()
                .all(|side| count_of(Slot::Store(side)) == board.score(side))
    }

    /// Replay an applied move onto the stones.
    ///
    /// Stones lifted from the selected pit are handed out to the sown slots
    /// in id order. Rejected moves are ignored.
    pub fn apply(&mut self, result: &MoveResult) {
        if result.is_noop() {
            return;
        }

        let lifted: SmallVec<[StoneId; 16]> = self.stones_in(result.pit).collect();
        debug_assert_eq!(lifted.len(), result.sown.len(), "tracker out of sync with board");
        for (id, &slot) in lifted.iter().zip(&result.sown) {
            self.stones[usize::from(id.0)].owner = StoneOwner::from_slot(slot);
        }

        if let Some(capture) = result.capture {
            self.bank(&[capture.pit, capture.opposite], result.side);
        }

        if result.harvest.is_some() {
            for stone in &mut self.stones {
                if let StoneOwner::Unowned(pit) = stone.owner {
                    stone.owner = StoneOwner::Scored(pit.owner());
                }
            }
        }
    }

    fn bank(&mut self, pits: &[PitId], side: Side) {
        for stone in &mut self.stones {
            if let StoneOwner::Unowned(pit) = stone.owner {
                if pits.contains(&pit) {
                    stone.owner = StoneOwner::Scored(side);
                }
            }
        }
    }
}
