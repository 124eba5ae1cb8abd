//! Pieces placed on the board.

use std::slice;

use tinyvec::ArrayVec;

use crate::{
    cell::{Cell, GRID_SIZE},
    label::Label,
    line::{Line, Orientation},
    range::SlotRange,
};

/// The cells of a vehicle, in increasing index order.
pub type Positions = ArrayVec<[Cell; GRID_SIZE as usize]>;

/// One entry of a parsed layout.
///
/// Every cell of the board is covered by exactly one piece. Walls and empty
/// cells are single-cell entries; vehicles cover two or more contiguous cells.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Piece {
    /// A fixed single-cell obstacle.
    Wall {
        /// The cell holding the wall.
        cell: Cell,
    },
    /// A free cell.
    Empty {
        /// The free cell.
        cell: Cell,
    },
    /// A sliding block.
    Vehicle(Vehicle),
}

impl Piece {
    /// Returns the cells covered by this piece.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        match self {
            Piece::Wall { cell } | Piece::Empty { cell } => slice::from_ref(cell),
            Piece::Vehicle(vehicle) => vehicle.positions(),
        }
    }

    /// Returns the vehicle if this piece is one.
    #[must_use]
    pub fn as_vehicle(&self) -> Option<&Vehicle> {
        match self {
            Piece::Vehicle(vehicle) => Some(vehicle),
            Piece::Wall { .. } | Piece::Empty { .. } => None,
        }
    }

    pub(crate) fn as_vehicle_mut(&mut self) -> Option<&mut Vehicle> {
        match self {
            Piece::Vehicle(vehicle) => Some(vehicle),
            Piece::Wall { .. } | Piece::Empty { .. } => None,
        }
    }

    /// Returns `true` if this piece takes up space on the board.
    #[must_use]
    pub fn is_occupant(&self) -> bool {
        !self.is_empty()
    }
}

/// A sliding block with a fixed orientation and length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    label: Label,
    orientation: Orientation,
    positions: Positions,
    range: SlotRange,
    is_main: bool,
}

impl Vehicle {
    /// Creates a vehicle whose range has not been computed yet.
    pub(crate) fn new(label: Label, orientation: Orientation, first: Cell, is_main: bool) -> Self {
        let mut positions = Positions::new();
        positions.push(first);
        Self {
            label,
            orientation,
            positions,
            range: SlotRange::fixed(0),
            is_main,
        }
    }

    /// Returns the label.
    #[must_use]
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns the orientation.
    #[must_use]
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the covered cells in increasing index order.
    #[must_use]
    #[inline]
    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }

    /// Returns the number of cells the vehicle covers.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; a vehicle covers at least two cells once parsed.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the lead-slot range computed after the last move.
    #[must_use]
    #[inline]
    pub fn range(&self) -> SlotRange {
        self.range
    }

    /// Returns `true` for the piece that must reach the goal.
    #[must_use]
    #[inline]
    pub fn is_main(&self) -> bool {
        self.is_main
    }

    /// Returns the row or column the vehicle slides along.
    #[must_use]
    pub fn line(&self) -> Line {
        Line::containing(self.positions[0], self.orientation)
    }

    /// Returns the slot of the first cell.
    #[must_use]
    pub fn lead_slot(&self) -> u8 {
        self.slot(0)
    }

    /// Returns the slot of the last cell.
    #[must_use]
    pub fn last_slot(&self) -> u8 {
        self.slot(self.positions.len() - 1)
    }

    fn slot(&self, i: usize) -> u8 {
        let cell = self.positions[i];
        match self.orientation {
            Orientation::Horizontal => cell.col(),
            Orientation::Vertical => cell.row(),
        }
    }

    /// Returns the cells the vehicle would cover with its first cell on `lead_slot`.
    ///
    /// Returns `None` if the vehicle would not fit on its line.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockslide_core::{Board, Cell, Label};
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
    /// assert_eq!(
    ///     main.positions_at(4).unwrap().as_slice(),
    ///     [Cell::new(10), Cell::new(11)]
    /// );
    /// assert_eq!(main.positions_at(5), None);
    /// ```
    #[must_use]
    pub fn positions_at(&self, lead_slot: u8) -> Option<Positions> {
        let len = u8::try_from(self.len()).ok()?;
        if lead_slot.checked_add(len)? > GRID_SIZE {
            return None;
        }
        let line = self.line();
        Some((lead_slot..lead_slot + len).map(|slot| line.cell_at(slot)).collect())
    }

    /// Returns `true` if `positions` is a placement this vehicle could take:
    /// same length, same line, contiguous.
    #[must_use]
    pub fn fits(&self, positions: &[Cell]) -> bool {
        let Some(&first) = positions.first() else {
            return false;
        };
        let Some(lead_slot) = self.line().slot_of(first) else {
            return false;
        };
        self.positions_at(lead_slot)
            .is_some_and(|expected| expected.as_slice() == positions)
    }

    /// Appends `cell`, returning `false` if the vehicle already spans a full line.
    pub(crate) fn push_position(&mut self, cell: Cell) -> bool {
        self.positions.try_push(cell).is_none()
    }

    pub(crate) fn set_positions(&mut self, positions: &[Cell]) {
        self.positions.clear();
        self.positions.extend_from_slice(positions);
    }

    pub(crate) fn set_range(&mut self, range: SlotRange) {
        self.range = range;
    }
}
