//! Pixel geometry for front-ends: slot boundaries and drag snapping.
//!
//! The engine itself works in cells and slots. Front-ends that render the
//! board or translate drag gestures into moves use [`SlotTable`] to convert
//! between slots and pixel offsets along a line.

use crate::{
    cell::{Cell, GRID_SIZE},
    line::Orientation,
    piece::{Positions, Vehicle},
};

/// Number of slot boundaries on a line: six cells have seven edges.
pub const BOUNDARY_COUNT: usize = GRID_SIZE as usize + 1;

/// Returns the index of the boundary closest to `offset`.
///
/// Ties go to the higher index, so a drag exactly half a cell long rounds
/// forward the way `f32::round` does for positive values. Returns 0 if
/// `boundaries` is empty.
///
/// # Examples
///
/// ```
/// use blockslide_core::snap::snap_to_nearest_slot;
///
/// let boundaries = [0.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0];
/// assert_eq!(snap_to_nearest_slot(74.0, &boundaries), 1);
/// assert_eq!(snap_to_nearest_slot(75.0, &boundaries), 2);
/// assert_eq!(snap_to_nearest_slot(76.0, &boundaries), 2);
/// assert_eq!(snap_to_nearest_slot(-40.0, &boundaries), 0);
/// assert_eq!(snap_to_nearest_slot(1000.0, &boundaries), 6);
/// ```
#[must_use]
pub fn snap_to_nearest_slot(offset: f32, boundaries: &[f32]) -> usize {
    boundaries
        .iter()
        .map(|b| (b - offset).abs())
        .enumerate()
        .rev()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map_or(0, |(i, _)| i)
}

/// Pixel offsets of the slot boundaries for a board of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTable {
    case_size: f32,
    boundaries: [f32; BOUNDARY_COUNT],
}

impl SlotTable {
    /// Builds the table for a square board `grid_size` pixels wide.
    #[must_use]
    pub fn new(grid_size: f32) -> Self {
        let case_size = grid_size / f32::from(GRID_SIZE);
        let mut boundaries = [0.0; BOUNDARY_COUNT];
        for (i, boundary) in (0..=GRID_SIZE).zip(&mut boundaries) {
            *boundary = case_size * f32::from(i);
        }
        Self {
            case_size,
            boundaries,
        }
    }

    /// Returns the width of one cell in pixels.
    #[must_use]
    pub fn case_size(&self) -> f32 {
        self.case_size
    }

    /// Returns the seven boundary offsets.
    #[must_use]
    pub fn boundaries(&self) -> &[f32; BOUNDARY_COUNT] {
        &self.boundaries
    }

    /// Returns the pixel offset of slot `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is greater than 6.
    #[must_use]
    pub fn offset_of(&self, slot: u8) -> f32 {
        self.boundaries[usize::from(slot)]
    }

    /// Returns the top-left pixel position `(x, y)` of `cell`.
    #[must_use]
    pub fn cell_origin(&self, cell: Cell) -> (f32, f32) {
        (self.offset_of(cell.col()), self.offset_of(cell.row()))
    }

    /// Returns the pixel size `(width, height)` of `vehicle`.
    #[must_use]
    pub fn vehicle_extent(&self, vehicle: &Vehicle) -> (f32, f32) {
        #[expect(clippy::cast_precision_loss)]
        let length = self.case_size * vehicle.len() as f32;
        match vehicle.orientation() {
            Orientation::Horizontal => (length, self.case_size),
            Orientation::Vertical => (self.case_size, length),
        }
    }

    /// Returns where a drag of `translation` pixels along the vehicle's axis
    /// would put it.
    ///
    /// The dragged position is clamped to the vehicle's range and snapped to
    /// the nearest slot. Returns `None` if the vehicle would stay on its
    /// current lead slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockslide_core::{Board, Cell, Label, snap::SlotTable};
    ///
    /// let board: Board = "oooooo\
    ///                     oooooo\
    ///                     AAooxo\
    ///                     oooooo\
    ///                     oooooo\
    ///                     oooooo"
    ///     .parse()
    ///     .unwrap();
    /// let main = board.vehicle(Label::new('A').unwrap()).unwrap();
    /// let table = SlotTable::new(300.0);
    ///
    /// // Dragging far to the right stops against the wall.
    /// let dest = table.drag_destination(main, 1000.0).unwrap();
    /// assert_eq!(dest.as_slice(), [Cell::new(14), Cell::new(15)]);
    ///
    /// // A small nudge snaps back to where the vehicle already is.
    /// assert_eq!(table.drag_destination(main, 20.0), None);
    /// ```
    #[must_use]
    pub fn drag_destination(&self, vehicle: &Vehicle, translation: f32) -> Option<Positions> {
        let range = vehicle.range();
        let start = self.offset_of(vehicle.lead_slot());
        let dragged = (start + translation)
            .clamp(self.offset_of(range.min()), self.offset_of(range.max()));

        let nearest = snap_to_nearest_slot(dragged, &self.boundaries[..usize::from(GRID_SIZE)]);
        let slot = range.clamp(u8::try_from(nearest).unwrap_or(GRID_SIZE - 1));
        if slot == vehicle.lead_slot() {
            return None;
        }
        vehicle.positions_at(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Label};

    #[test]
    fn test_table_boundaries() {
        let table = SlotTable::new(600.0);
        assert!((table.case_size() - 100.0).abs() < f32::EPSILON);
        assert_eq!(
            table.boundaries(),
            &[0.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0]
        );
        assert_eq!(table.cell_origin(Cell::new(14)), (200.0, 200.0));
        assert_eq!(table.cell_origin(Cell::new(5)), (500.0, 0.0));
    }

    #[test]
    fn test_snap_ties_go_high() {
        let boundaries = [0.0, 10.0, 20.0];
        assert_eq!(snap_to_nearest_slot(5.0, &boundaries), 1);
        assert_eq!(snap_to_nearest_slot(15.0, &boundaries), 2);
        assert_eq!(snap_to_nearest_slot(4.9, &boundaries), 0);
        assert_eq!(snap_to_nearest_slot(3.0, &[]), 0);
    }

    #[test]
    fn test_vertical_drag() {
        let board: Board = "oooooo\
                            oBoooo\
                            oBoooo\
                            oooooo\
                            AAoooo\
                            oooooo"
            .parse()
            .unwrap();
        let b = board.vehicle(Label::new('B').unwrap()).unwrap();
        let table = SlotTable::new(600.0);

        assert_eq!(table.vehicle_extent(b), (100.0, 200.0));

        let up = table.drag_destination(b, -100.0).unwrap();
        assert_eq!(up.as_slice(), [Cell::new(1), Cell::new(7)]);

        // A blocks column 1 at row 4: B can go down one slot only.
        let down = table.drag_destination(b, 240.0).unwrap();
        assert_eq!(down.as_slice(), [Cell::new(13), Cell::new(19)]);

        assert_eq!(table.drag_destination(b, 40.0), None);
    }

    #[test]
    fn test_half_cell_drag_rounds_forward() {
        let board: Board = "oooooo\
                            oooooo\
                            ooAAoo\
                            oooooo\
                            oooooo\
                            oooooo"
            .parse()
            .unwrap();
        let a = board.vehicle(Label::new('A').unwrap()).unwrap();
        let table = SlotTable::new(600.0);

        let right = table.drag_destination(a, 50.0).unwrap();
        assert_eq!(right.as_slice(), [Cell::new(15), Cell::new(16)]);
        let left = table.drag_destination(a, -150.0).unwrap();
        assert_eq!(left.as_slice(), [Cell::new(13), Cell::new(14)]);
        assert_eq!(table.drag_destination(a, -50.0), None);
    }
}
