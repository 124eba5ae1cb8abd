//! Grid cell coordinates.

use std::fmt::{self, Display};

/// Number of rows and columns on the board.
pub const GRID_SIZE: u8 = 6;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// A cell on the 6×6 board, identified by its row-major index (0-35).
///
/// # Examples
///
/// ```
/// use blockslide_core::Cell;
///
/// let cell = Cell::new(14);
/// assert_eq!(cell.row_col(), (2, 2));
/// assert_eq!(Cell::from_row_col(2, 2), cell);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    index: u8,
}

impl Cell {
    /// All cells in row-major order.
    pub const ALL: [Self; CELL_COUNT] = {
        let mut all = [Self { index: 0 }; CELL_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < CELL_COUNT {
            all[i] = Self { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Creates a cell from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-35.
    #[must_use]
    #[inline]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < CELL_COUNT);
        Self { index }
    }

    /// Creates a cell from its row-major index, returning `None` when it is off the board.
    #[must_use]
    #[inline]
    pub fn try_new(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|&i| usize::from(i) < CELL_COUNT)
            .map(|index| Self { index })
    }

    /// Creates a cell from its row and column (both 0-5).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-5.
    #[must_use]
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self {
            index: row * GRID_SIZE + col,
        }
    }

    /// Returns the row-major index (0-35).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the row (0-5).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.index / GRID_SIZE
    }

    /// Returns the column (0-5).
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.index % GRID_SIZE
    }

    /// Returns `(row, col)`.
    #[must_use]
    #[inline]
    pub const fn row_col(self) -> (u8, u8) {
        (self.row(), self.col())
    }

    /// Returns the cell `offset` indices away, or `None` if it falls off the board.
    ///
    /// This is plain index arithmetic; it does not check that the result stays
    /// on the same row.
    #[must_use]
    #[inline]
    pub fn offset(self, offset: isize) -> Option<Self> {
        usize::from(self.index)
            .checked_add_signed(offset)
            .and_then(Self::try_new)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.index, f)
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> usize {
        usize::from(cell.index)
    }
}
