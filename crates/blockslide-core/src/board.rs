//! The board: parsed pieces plus the slide ranges derived from them.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{
    cell::{CELL_COUNT, Cell, GRID_SIZE},
    cell_set::CellSet,
    label::Label,
    layout::{self, LayoutError, LayoutSymbols},
    piece::{Piece, Vehicle},
    range::{SlotRange, slide_range},
};

/// Errors reported when moving a vehicle on a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// No vehicle carries the label.
    #[display("no vehicle labelled {label}")]
    UnknownVehicle {
        /// The requested label.
        label: Label,
    },
    /// The destination is not a placement the vehicle can take.
    #[display("destination of vehicle {label} does not match its length and line")]
    InvalidShape {
        /// The moved vehicle.
        label: Label,
    },
    /// The destination lies outside the vehicle's current range.
    #[display("vehicle {label} cannot reach slot {slot} (range {range})")]
    OutOfRange {
        /// The moved vehicle.
        label: Label,
        /// Requested lead slot.
        slot: u8,
        /// Range at the time of the request.
        range: SlotRange,
    },
}

/// A parsed level layout.
///
/// Holds every piece in the order it first appears in the layout string,
/// with up-to-date slide ranges for every vehicle.
///
/// # Examples
///
/// ```
/// use blockslide_core::{Board, Cell, Label};
///
/// let mut board: Board = "oooooo\
///                         oooooo\
///                         AAooBo\
///                         ooooBo\
///                         oooooo\
///                         oooooo"
///     .parse()
///     .unwrap();
///
/// let a = Label::new('A').unwrap();
/// assert_eq!(board.vehicle(a).unwrap().range().max(), 2);
///
/// board
///     .move_vehicle(a, &[Cell::new(14), Cell::new(15)])
///     .unwrap();
/// assert_eq!(
///     board.to_string(),
///     "ooooooooooooooAABoooooBooooooooooooo"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
    main: usize,
    symbols: LayoutSymbols,
}

impl Board {
    /// Parses a layout string.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the layout does not have 36 symbols, holds a
    /// symbol that is neither reserved nor a label, describes a vehicle that is
    /// not a straight contiguous run of at least two cells, or lacks the main
    /// vehicle.
    pub fn parse(layout: &str, symbols: &LayoutSymbols) -> Result<Self, LayoutError> {
        layout::parse(layout, symbols)
    }

    pub(crate) fn from_parts(pieces: Vec<Piece>, main: usize, symbols: LayoutSymbols) -> Self {
        let mut board = Self {
            pieces,
            main,
            symbols,
        };
        board.recompute_ranges();
        board
    }

    /// Returns every piece, walls and free cells included.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the vehicles in layout order.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.pieces.iter().filter_map(Piece::as_vehicle)
    }

    /// Returns the vehicle with the given label.
    #[must_use]
    pub fn vehicle(&self, label: Label) -> Option<&Vehicle> {
        self.vehicles().find(|v| v.label() == label)
    }

    /// Returns the main vehicle.
    #[must_use]
    pub fn main_vehicle(&self) -> &Vehicle {
        match &self.pieces[self.main] {
            Piece::Vehicle(vehicle) => vehicle,
            Piece::Wall { .. } | Piece::Empty { .. } => {
                unreachable!("main piece index always points at a vehicle")
            }
        }
    }

    /// Returns the symbols the board was parsed with.
    #[must_use]
    pub fn symbols(&self) -> &LayoutSymbols {
        &self.symbols
    }

    /// Returns the cells covered by walls and vehicles.
    #[must_use]
    pub fn occupied(&self) -> CellSet {
        self.pieces
            .iter()
            .filter(|p| p.is_occupant())
            .flat_map(Piece::cells)
            .copied()
            .collect()
    }

    /// Recomputes the range of every vehicle from the current occupancy.
    pub fn recompute_ranges(&mut self) {
        let occupied = self.occupied();
        for piece in &mut self.pieces {
            if let Some(vehicle) = piece.as_vehicle_mut() {
                let range = slide_range(vehicle, occupied);
                vehicle.set_range(range);
            }
        }
    }

    /// Moves a vehicle to `positions` and recomputes every range.
    ///
    /// Moving a vehicle onto its current cells is accepted and leaves the board
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownVehicle`] if no vehicle has `label`,
    /// [`MoveError::InvalidShape`] if `positions` is not a contiguous run of the
    /// vehicle's length on its line, and [`MoveError::OutOfRange`] if the run
    /// leaves the vehicle's current range.
    pub fn move_vehicle(&mut self, label: Label, positions: &[Cell]) -> Result<(), MoveError> {
        let vehicle = self
            .pieces
            .iter_mut()
            .filter_map(Piece::as_vehicle_mut)
            .find(|v| v.label() == label)
            .ok_or(MoveError::UnknownVehicle { label })?;

        if !vehicle.fits(positions) {
            return Err(MoveError::InvalidShape { label });
        }
        let slot = vehicle
            .line()
            .slot_of(positions[0])
            .ok_or(MoveError::InvalidShape { label })?;
        let range = vehicle.range();
        if !range.contains(slot) {
            return Err(MoveError::OutOfRange { label, slot, range });
        }

        vehicle.set_positions(positions);
        self.recompute_ranges();
        Ok(())
    }

    /// Returns the layout symbol of every cell.
    #[must_use]
    pub fn symbols_by_cell(&self) -> [char; CELL_COUNT] {
        let mut grid = [self.symbols.empty; CELL_COUNT];
        for piece in &self.pieces {
            let symbol = match piece {
                Piece::Wall { .. } => self.symbols.wall,
                Piece::Empty { .. } => self.symbols.empty,
                Piece::Vehicle(vehicle) => vehicle.label().as_char(),
            };
            for &cell in piece.cells() {
                grid[usize::from(cell)] = symbol;
            }
        }
        grid
    }

    /// Renders the board as six lines of six symbols.
    #[must_use]
    pub fn to_grid_string(&self) -> String {
        let mut out = String::with_capacity(CELL_COUNT + usize::from(GRID_SIZE));
        for row in self.symbols_by_cell().chunks(usize::from(GRID_SIZE)) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

/// Writes the board back as a 36-character layout string.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols_by_cell() {
            f.write_char(symbol)?;
        }
        Ok(())
    }
}

/// Parses a layout with the default [`LayoutSymbols`].
impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &LayoutSymbols::default())
    }
}
