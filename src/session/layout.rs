//! Board geometry and pointer hit-testing.
//!
//! Pits are circles laid out on a grid; column 0 sits one pit-width right of
//! the left store. The default measurements match a 2400x600 canvas.

use serde::{Deserialize, Serialize};

use crate::core::{PitId, Row, Side};

/// Board geometry in canvas units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Radius of a pit and of a store's rounded ends.
    pub pit_radius: f64,
    /// Horizontal gap between neighbouring pits.
    pub x_margin: f64,
    /// Vertical gap between the two rows.
    pub y_margin: f64,
    /// Distance from the canvas top to the top row's bounding box.
    pub y_offset: f64,
}

impl Default for BoardLayout {
    fn default() -> Self {
        let pit_radius = 140.0;
        let y_margin = 50.0;
        Self {
            pit_radius,
            x_margin: 22.5,
            y_margin,
            y_offset: 600.0 - pit_radius * 2.0 - y_margin,
        }
    }
}

impl BoardLayout {
    fn x_step(&self) -> f64 {
        self.pit_radius * 2.0 + self.x_margin
    }

    fn y_step(&self) -> f64 {
        self.pit_radius * 2.0 + self.y_margin
    }

    /// Centre of a pit.
    #[must_use]
    pub fn pit_center(&self, pit: PitId) -> (f64, f64) {
        let x = (pit.col() as f64 + 1.0) * self.x_step() + self.pit_radius;
        let y = pit.row().index() as f64 * self.y_step() + self.y_offset + self.pit_radius;
        (x, y)
    }

    /// Horizontal centre of a side's store.
    #[must_use]
    pub fn store_x(&self, side: Side) -> f64 {
        side.index() as f64 * 7.0 * self.x_step() + self.pit_radius
    }

    /// The pit under a canvas point, if any.
    ///
    /// Picks the nearest grid cell and then checks the point really is
    /// inside that pit's circle.
    #[must_use]
    pub fn pit_at(&self, x: f64, y: f64) -> Option<PitId> {
        let col = ((x - self.pit_radius) / self.x_step() - 1.0).round();
        let row = ((y - self.y_offset - self.pit_radius) / self.y_step()).round();
        if !(0.0..6.0).contains(&col) || !(0.0..2.0).contains(&row) {
            return None;
        }

        let pit = PitId::try_new(Row::from_index(row as usize)?, col as usize)?;
        let (cx, cy) = self.pit_center(pit);
        let distance = (x - cx).hypot(y - cy);
        (distance < self.pit_radius).then_some(pit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let layout = BoardLayout::default();

        assert_eq!(layout.y_offset, 270.0);
        assert_eq!(layout.pit_center(PitId::new(Row::Top, 0)), (442.5, 410.0));
        assert_eq!(layout.pit_center(PitId::new(Row::Bottom, 5)), (1955.0, 740.0));
        assert_eq!(layout.store_x(Side::Left), 140.0);
        assert_eq!(layout.store_x(Side::Right), 2257.5);
    }

    #[test]
    fn test_pit_at_centres() {
        let layout = BoardLayout::default();

        for pit in PitId::all() {
            let (x, y) = layout.pit_center(pit);
            assert_eq!(layout.pit_at(x, y), Some(pit));
        }
    }

    #[test]
    fn test_pit_at_edge() {
        let layout = BoardLayout::default();
        let pit = PitId::new(Row::Bottom, 2);
        let (x, y) = layout.pit_center(pit);

        assert_eq!(layout.pit_at(x + 139.0, y), Some(pit));
        // Corner of the grid cell, outside the circle.
        assert_eq!(layout.pit_at(x + 120.0, y + 120.0), None);
    }

    #[test]
    fn test_pit_at_misses() {
        let layout = BoardLayout::default();

        // Left store.
        assert_eq!(layout.pit_at(layout.store_x(Side::Left), 410.0), None);
        // Above the board.
        assert_eq!(layout.pit_at(442.5, 0.0), None);
        assert_eq!(layout.pit_at(-500.0, -500.0), None);
    }
}
