//! Slide ranges.
//!
//! A vehicle's range is the inclusive interval of *lead slots* it may occupy,
//! where the lead slot is the slot of its first (top-most or left-most) cell.
//! A two-cell horizontal vehicle alone on its row therefore has the range
//! `0..=4`: its lead cell can reach slot 4, leaving its tail on slot 5.

use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
};

use crate::{
    cell::GRID_SIZE,
    cell_set::CellSet,
    piece::Vehicle,
};

/// An inclusive interval of lead slots (0-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRange {
    min: u8,
    max: u8,
}

impl SlotRange {
    /// Creates a range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or `max` is not in the range 0-5.
    #[must_use]
    pub const fn new(min: u8, max: u8) -> Self {
        assert!(min <= max && max < GRID_SIZE);
        Self { min, max }
    }

    /// A range holding a single slot.
    #[must_use]
    pub const fn fixed(slot: u8) -> Self {
        Self::new(slot, slot)
    }

    /// Returns the smallest reachable lead slot.
    #[must_use]
    #[inline]
    pub const fn min(self) -> u8 {
        self.min
    }

    /// Returns the largest reachable lead slot.
    #[must_use]
    #[inline]
    pub const fn max(self) -> u8 {
        self.max
    }

    /// Returns `true` if `slot` lies in the range.
    #[must_use]
    #[inline]
    pub const fn contains(self, slot: u8) -> bool {
        self.min <= slot && slot <= self.max
    }

    /// Returns `true` if the vehicle cannot move at all.
    #[must_use]
    #[inline]
    pub const fn is_fixed(self) -> bool {
        self.min == self.max
    }

    /// Clamps `slot` into the range.
    #[must_use]
    #[inline]
    pub fn clamp(self, slot: u8) -> u8 {
        slot.clamp(self.min, self.max)
    }

    /// Returns the slots of the range in increasing order.
    #[must_use]
    pub fn slots(self) -> RangeInclusive<u8> {
        self.min..=self.max
    }
}

impl Display for SlotRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Computes the lead-slot range of `vehicle` against the occupied cells.
///
/// The vehicle's own cells are ignored, so `occupied` may be the occupancy of
/// the whole board. Starting from its current ends, the vehicle is extended
/// backwards and forwards one cell at a time while the next cell on its line
/// is free.
///
/// # Examples
///
/// ```
/// use blockslide_core::{Board, Label, SlotRange, slide_range};
///
/// let board: Board = "oooooo\
///                     AAoooo\
///                     oooooo\
///                     oooooo\
///                     oooooo\
///                     oooooo"
///     .parse()
///     .unwrap();
/// let main = board.vehicle(Label::new('A').unwrap()).unwrap();
/// assert_eq!(slide_range(main, board.occupied()), SlotRange::new(0, 4));
/// ```
#[must_use]
pub fn slide_range(vehicle: &Vehicle, occupied: CellSet) -> SlotRange {
    let line = vehicle.line();
    let own: CellSet = vehicle.positions().iter().copied().collect();
    let blocked = occupied.difference(own);

    let first = vehicle.lead_slot();
    let last = vehicle.last_slot();

    let mut min = first;
    while min > 0 && !blocked.contains(line.cell_at(min - 1)) {
        min -= 1;
    }
    let mut max = last;
    while max + 1 < GRID_SIZE && !blocked.contains(line.cell_at(max + 1)) {
        max += 1;
    }

    SlotRange::new(min, max - (last - first))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Label};

    fn board(layout: &str) -> Board {
        layout.parse().expect("valid layout")
    }

    fn range_of(board: &Board, label: char) -> SlotRange {
        let vehicle = board
            .vehicle(Label::new(label).unwrap())
            .expect("vehicle exists");
        slide_range(vehicle, board.occupied())
    }

    #[test]
    fn test_free_row() {
        let board = board(
            "oooooo\
             AAoooo\
             oooooo\
             oooooo\
             oooooo\
             oooooo",
        );
        assert_eq!(range_of(&board, 'A'), SlotRange::new(0, 4));
    }

    #[test]
    fn test_boxed_in_vehicle_is_fixed() {
        let board = board(
            "oooooo\
             oooooo\
             xAAxoo\
             oooooo\
             oooooo\
             oooooo",
        );
        let range = range_of(&board, 'A');
        assert_eq!(range, SlotRange::fixed(1));
        assert!(range.is_fixed());
    }

    #[test]
    fn test_vertical_blocked_by_other_vehicle() {
        let board = board(
            "oBoooo\
             oBoooo\
             oAAooo\
             oooooo\
             oCCCoo\
             oooooo",
        );
        // B occupies column 1 slots 0-1, A sits below at slot 2.
        assert_eq!(range_of(&board, 'B'), SlotRange::fixed(0));
        assert_eq!(range_of(&board, 'A'), SlotRange::new(0, 4));
        assert_eq!(range_of(&board, 'C'), SlotRange::new(0, 3));
    }

    #[test]
    fn test_range_with_gap_on_both_sides() {
        let board = board(
            "ooooox\
             oooooo\
             xooAAo\
             oooooo\
             oooooo\
             oooooo",
        );
        assert_eq!(range_of(&board, 'A'), SlotRange::new(1, 4));
    }

    #[test]
    fn test_clamp_and_contains() {
        let range = SlotRange::new(1, 3);
        assert_eq!(range.clamp(0), 1);
        assert_eq!(range.clamp(5), 3);
        assert_eq!(range.clamp(2), 2);
        assert!(range.contains(3));
        assert!(!range.contains(4));
        assert_eq!(range.slots().collect::<Vec<_>>(), [1, 2, 3]);
    }
}
