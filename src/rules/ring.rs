//! The sowing ring: 12 pits and 2 stores walked counter-clockwise.
//!
//! ```text
//! index:  0      1          5      6            7          12       13
//! slot:   top[5] top[4] ... top[0] left store   bot[0] ... bot[5]   right store
//! ```
//!
//! A `RingCursor` starts on the selected pit and yields the slot each
//! successive stone lands in. The opponent's store is stepped over.

use crate::core::{PitId, Row, Side, Slot, PITS_PER_ROW};

/// Positions on the ring: 12 pits plus 2 stores.
pub const RING_LEN: usize = PITS_PER_ROW * 2 + 2;

const LEFT_STORE: usize = PITS_PER_ROW;
const RIGHT_STORE: usize = RING_LEN - 1;

/// Ring position of a slot.
#[must_use]
pub fn ring_index(slot: Slot) -> usize {
    match slot {
        Slot::Pit(pit) => match pit.row() {
            Row::Top => PITS_PER_ROW - 1 - pit.col(),
            Row::Bottom => LEFT_STORE + 1 + pit.col(),
        },
        Slot::Store(Side::Left) => LEFT_STORE,
        Slot::Store(Side::Right) => RIGHT_STORE,
    }
}

/// Slot at a ring position. `index` is taken modulo `RING_LEN`.
#[must_use]
pub fn slot_at(index: usize) -> Slot {
    match index % RING_LEN {
        LEFT_STORE => Slot::Store(Side::Left),
        RIGHT_STORE => Slot::Store(Side::Right),
        i if i < LEFT_STORE => Slot::Pit(PitId::new(Row::Top, PITS_PER_ROW - 1 - i)),
        i => Slot::Pit(PitId::new(Row::Bottom, i - LEFT_STORE - 1)),
    }
}

/// Cursor that walks the ring on behalf of one sowing side.
///
/// Yields an endless sequence of landing slots; callers `take(n)`.
#[derive(Clone, Copy, Debug)]
pub struct RingCursor {
    index: usize,
    sower: Side,
}

impl RingCursor {
    /// Place the cursor on the pit being emptied.
    #[must_use]
    pub fn new(origin: PitId, sower: Side) -> Self {
        Self {
            index: ring_index(Slot::Pit(origin)),
            sower,
        }
    }

    /// The slot the cursor currently rests on.
    #[must_use]
    pub fn slot(&self) -> Slot {
        slot_at(self.index)
    }
}

impl Iterator for RingCursor {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let skipped = ring_index(Slot::Store(self.sower.opponent()));

        self.index = (self.index + 1) % RING_LEN;
        if self.index == skipped {
            self.index = (self.index + 1) % RING_LEN;
        }
        Some(slot_at(self.index))
    }
}
