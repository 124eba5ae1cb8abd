//! A compact set of board cells.

use std::{fmt, iter::FusedIterator};

use crate::cell::Cell;

/// A set of cells backed by a 36-bit mask.
///
/// Used to track which cells of the board are occupied.
///
/// # Examples
///
/// ```
/// use blockslide_core::{Cell, CellSet};
///
/// let mut set = CellSet::EMPTY;
/// set.insert(Cell::new(3));
/// set.insert(Cell::new(9));
/// assert!(set.contains(Cell::new(9)));
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.iter().collect::<Vec<_>>(), [Cell::new(3), Cell::new(9)]);
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u64,
}

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    #[inline]
    const fn bit(cell: Cell) -> u64 {
        1 << cell.index()
    }

    /// Adds `cell`, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, cell: Cell) -> bool {
        let added = !self.contains(cell);
        self.bits |= Self::bit(cell);
        added
    }

    /// Returns `true` if `cell` is in the set.
    #[must_use]
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        self.bits & Self::bit(cell) != 0
    }

    /// Returns the number of cells in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no cells.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the cells of `self` that are not in `other`.
    #[must_use]
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the cells in increasing index order.
    #[must_use]
    #[inline]
    pub fn iter(self) -> CellSetIter {
        CellSetIter { bits: self.bits }
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Cell::index)).finish()
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Cell> for CellSet {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellSet`].
#[derive(Debug, Clone)]
pub struct CellSetIter {
    bits: u64,
}

impl Iterator for CellSetIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Cell::new(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CellSetIter {}
impl FusedIterator for CellSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert() {
        let mut set = CellSet::EMPTY;
        assert!(set.is_empty());
        assert!(set.insert(Cell::new(35)));
        assert!(!set.insert(Cell::new(35)));
        assert!(set.contains(Cell::new(35)));
        assert!(!set.contains(Cell::new(34)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_collect_every_cell() {
        let set: CellSet = Cell::ALL.into_iter().collect();
        assert_eq!(set.len(), crate::CELL_COUNT);
        assert_eq!(set.iter().collect::<Vec<_>>(), Cell::ALL);
        assert_eq!(set.iter().len(), crate::CELL_COUNT);
    }

    #[test]
    fn test_difference() {
        let a: CellSet = [1, 2, 3].map(Cell::new).into_iter().collect();
        let b: CellSet = [3, 4].map(Cell::new).into_iter().collect();
        assert_eq!(
            a.difference(b).iter().collect::<Vec<_>>(),
            [Cell::new(1), Cell::new(2)]
        );
        assert!(a.difference(a).is_empty());
    }
}
