//! Rows, columns and the orientation of sliding pieces.

use crate::cell::{Cell, GRID_SIZE};

/// The axis along which a vehicle slides.
///
/// Fixed at parse time and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Orientation {
    /// Slides left and right along a row.
    Horizontal,
    /// Slides up and down along a column.
    Vertical,
}

impl Orientation {
    /// Returns the index distance between two adjacent cells along this axis.
    #[must_use]
    #[inline]
    pub const fn step(self) -> u8 {
        match self {
            Orientation::Horizontal => 1,
            Orientation::Vertical => GRID_SIZE,
        }
    }
}

/// A single row or column of the board.
///
/// The cells of a line are numbered by *slot*, 0-5, from left to right or
/// from top to bottom.
///
/// # Examples
///
/// ```
/// use blockslide_core::{Cell, Line, Orientation};
///
/// let line = Line::containing(Cell::new(20), Orientation::Vertical);
/// assert_eq!(line, Line::Column { col: 2 });
/// assert_eq!(line.first_cell(), Cell::new(2));
/// assert_eq!(line.last_cell(), Cell::new(32));
/// assert_eq!(line.slot_of(Cell::new(20)), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row identified by its index (0-5).
    Row {
        /// Row index (0-5).
        row: u8,
    },
    /// A column identified by its index (0-5).
    Column {
        /// Column index (0-5).
        col: u8,
    },
}

impl Line {
    /// Returns the line through `cell` along `orientation`.
    #[must_use]
    #[inline]
    pub const fn containing(cell: Cell, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Line::Row { row: cell.row() },
            Orientation::Vertical => Line::Column { col: cell.col() },
        }
    }

    /// Returns the orientation a piece must have to slide along this line.
    #[must_use]
    #[inline]
    pub const fn orientation(self) -> Orientation {
        match self {
            Line::Row { .. } => Orientation::Horizontal,
            Line::Column { .. } => Orientation::Vertical,
        }
    }

    /// Returns the cell at slot 0.
    #[must_use]
    #[inline]
    pub const fn first_cell(self) -> Cell {
        self.cell_at(0)
    }

    /// Returns the cell at slot 5.
    #[must_use]
    #[inline]
    pub const fn last_cell(self) -> Cell {
        self.cell_at(GRID_SIZE - 1)
    }

    /// Returns the cell at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not in the range 0-5.
    #[must_use]
    #[inline]
    pub const fn cell_at(self, slot: u8) -> Cell {
        match self {
            Line::Row { row } => Cell::from_row_col(row, slot),
            Line::Column { col } => Cell::from_row_col(slot, col),
        }
    }

    /// Returns the slot of `cell` on this line, or `None` if the cell is elsewhere.
    #[must_use]
    #[inline]
    pub const fn slot_of(self, cell: Cell) -> Option<u8> {
        match self {
            Line::Row { row } if cell.row() == row => Some(cell.col()),
            Line::Column { col } if cell.col() == col => Some(cell.row()),
            _ => None,
        }
    }

    /// Returns every cell of the line in slot order.
    #[must_use]
    pub fn cells(self) -> [Cell; GRID_SIZE as usize] {
        let mut cells = [Cell::default(); GRID_SIZE as usize];
        for (slot, cell) in (0..GRID_SIZE).zip(&mut cells) {
            *cell = self.cell_at(slot);
        }
        cells
    }
}
