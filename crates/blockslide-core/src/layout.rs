//! Layout string parsing.
//!
//! A layout is a 36-character string, one symbol per cell in row-major order.
//! Reserved symbols mark free cells and walls; every other symbol is the label
//! of a vehicle, repeated on each cell the vehicle covers.

use std::collections::HashMap;

use crate::{
    board::Board,
    cell::{CELL_COUNT, Cell, GRID_SIZE},
    label::Label,
    line::Orientation,
    piece::{Piece, Vehicle},
};

/// Reserved symbols of a layout string.
///
/// # Examples
///
/// ```
/// use blockslide_core::{Board, Label, LayoutSymbols};
///
/// let symbols = LayoutSymbols {
///     empty: '.',
///     wall: '#',
///     main: Label::new('R').unwrap(),
/// };
/// let board = Board::parse(
///     "......\
///      ......\
///      RR..#.\
///      ......\
///      ......\
///      ......",
///     &symbols,
/// )
/// .unwrap();
/// assert!(board.main_vehicle().is_main());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSymbols {
    /// Symbol of a free cell.
    pub empty: char,
    /// Symbol of a wall cell.
    pub wall: char,
    /// Label of the main vehicle.
    pub main: Label,
}

const DEFAULT_MAIN: Label = match Label::new('A') {
    Some(label) => label,
    None => unreachable!(),
};

impl Default for LayoutSymbols {
    fn default() -> Self {
        Self {
            empty: 'o',
            wall: 'x',
            main: DEFAULT_MAIN,
        }
    }
}

/// Errors reported while parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// The layout does not have one symbol per cell.
    #[display("layout must have {CELL_COUNT} cells, got {len}")]
    InvalidLength {
        /// Number of symbols found.
        len: usize,
    },
    /// A symbol is neither reserved nor a valid label.
    #[display("invalid symbol {symbol:?} at cell {cell}")]
    InvalidSymbol {
        /// Cell holding the symbol.
        cell: Cell,
        /// The offending symbol.
        symbol: char,
    },
    /// The reserved symbols are not distinct.
    #[display("reserved layout symbols must be distinct")]
    ConflictingSymbols,
    /// A vehicle's cells do not form one straight contiguous run.
    #[display("vehicle {label} is not a contiguous run on one row or column")]
    DisconnectedVehicle {
        /// Label of the vehicle.
        label: Label,
    },
    /// A vehicle covers a single cell.
    #[display("vehicle {label} must cover at least two cells")]
    VehicleTooShort {
        /// Label of the vehicle.
        label: Label,
    },
    /// A vehicle covers more cells than a line holds.
    #[display("vehicle {label} covers more than {GRID_SIZE} cells")]
    VehicleTooLong {
        /// Label of the vehicle.
        label: Label,
    },
    /// The layout has no main vehicle.
    #[display("layout has no main vehicle {label}")]
    MissingMainVehicle {
        /// Expected label of the main vehicle.
        label: Label,
    },
}

impl LayoutSymbols {
    fn validate(&self) -> Result<(), LayoutError> {
        let main = self.main.as_char();
        if self.empty == self.wall || self.empty == main || self.wall == main {
            return Err(LayoutError::ConflictingSymbols);
        }
        Ok(())
    }
}

pub(crate) fn parse(layout: &str, symbols: &LayoutSymbols) -> Result<Board, LayoutError> {
    symbols.validate()?;

    let len = layout.chars().count();
    if len != CELL_COUNT {
        return Err(LayoutError::InvalidLength { len });
    }

    let mut pieces = Vec::with_capacity(CELL_COUNT);
    let mut vehicle_index: HashMap<Label, usize> = HashMap::new();
    let mut chars = layout.chars().zip(Cell::ALL).peekable();

    while let Some((symbol, cell)) = chars.next() {
        if symbol == symbols.empty {
            pieces.push(Piece::Empty { cell });
            continue;
        }
        if symbol == symbols.wall {
            pieces.push(Piece::Wall { cell });
            continue;
        }

        let label = Label::new(symbol).ok_or(LayoutError::InvalidSymbol { cell, symbol })?;
        if let Some(&i) = vehicle_index.get(&label) {
            let pushed = pieces[i]
                .as_vehicle_mut()
                .is_some_and(|vehicle| vehicle.push_position(cell));
            if !pushed {
                return Err(LayoutError::VehicleTooLong { label });
            }
            continue;
        }

        let orientation = if chars.peek().is_some_and(|&(next, _)| next == symbol) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        vehicle_index.insert(label, pieces.len());
        pieces.push(Piece::Vehicle(Vehicle::new(
            label,
            orientation,
            cell,
            label == symbols.main,
        )));
    }

    for vehicle in pieces.iter().filter_map(Piece::as_vehicle) {
        let label = vehicle.label();
        if vehicle.len() < 2 {
            return Err(LayoutError::VehicleTooShort { label });
        }
        if !vehicle.fits(vehicle.positions()) {
            return Err(LayoutError::DisconnectedVehicle { label });
        }
    }

    let main = vehicle_index
        .get(&symbols.main)
        .copied()
        .ok_or(LayoutError::MissingMainVehicle {
            label: symbols.main,
        })?;

    Ok(Board::from_parts(pieces, main, *symbols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellSet;

    const SAMPLE: &str = "oIooLMoIBBLMAAJKooCCJKooxEEEoxGGHHoo";

    #[test]
    fn test_parse_sample_layout() {
        let board: Board = SAMPLE.parse().unwrap();

        let labels: Vec<char> = board
            .vehicles()
            .map(|v| v.label().as_char())
            .collect();
        assert_eq!(labels, ['I', 'L', 'M', 'B', 'A', 'J', 'K', 'C', 'E', 'G', 'H']);

        let a = board.vehicle(Label::new('A').unwrap()).unwrap();
        assert!(a.is_main());
        assert!(a.orientation().is_horizontal());
        assert_eq!(a.positions(), [Cell::new(12), Cell::new(13)]);

        let j = board.vehicle(Label::new('J').unwrap()).unwrap();
        assert!(j.orientation().is_vertical());
        assert_eq!(j.positions(), [Cell::new(14), Cell::new(20)]);

        let e = board.vehicle(Label::new('E').unwrap()).unwrap();
        assert_eq!(e.len(), 3);

        let walls: Vec<u8> = board
            .pieces()
            .iter()
            .filter(|p| p.is_wall())
            .flat_map(|p| p.cells().iter().map(|c| c.index()))
            .collect();
        assert_eq!(walls, [24, 29]);
    }

    #[test]
    fn test_parse_covers_every_cell_once() {
        let board: Board = SAMPLE.parse().unwrap();
        let mut seen = CellSet::EMPTY;
        let mut count = 0;
        for piece in board.pieces() {
            for &cell in piece.cells() {
                assert!(seen.insert(cell), "cell {cell} covered twice");
                count += 1;
            }
        }
        assert_eq!(count, CELL_COUNT);
        assert_eq!(seen.len(), CELL_COUNT);
    }

    #[test]
    fn test_parse_order_is_first_occurrence() {
        let board: Board = SAMPLE.parse().unwrap();
        let first_cells: Vec<u8> = board
            .pieces()
            .iter()
            .map(|p| p.cells()[0].index())
            .collect();
        let mut sorted = first_cells.clone();
        sorted.sort_unstable();
        assert_eq!(first_cells, sorted);
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            "oooo".parse::<Board>(),
            Err(LayoutError::InvalidLength { len: 4 })
        );
        let long = format!("{SAMPLE}o");
        assert_eq!(
            long.parse::<Board>(),
            Err(LayoutError::InvalidLength { len: 37 })
        );
    }

    #[test]
    fn test_invalid_symbol() {
        let layout = SAMPLE.replacen('o', "?", 1);
        assert_eq!(
            layout.parse::<Board>(),
            Err(LayoutError::InvalidSymbol {
                cell: Cell::new(0),
                symbol: '?'
            })
        );
    }

    #[test]
    fn test_horizontal_run_wrapping_rows_is_rejected() {
        // B sits on cells 5 and 6: adjacent indices, different rows.
        let layout = "oooooB\
                      Boooooo\
                      AAoooo\
                      oooooo\
                      oooooo\
                      ooooo";
        assert_eq!(layout.chars().count(), CELL_COUNT);
        assert_eq!(
            layout.parse::<Board>(),
            Err(LayoutError::DisconnectedVehicle {
                label: Label::new('B').unwrap()
            })
        );
    }

    #[test]
    fn test_split_vehicle_is_rejected() {
        let layout = "BBoBoo\
                      oooooo\
                      AAoooo\
                      oooooo\
                      oooooo\
                      oooooo";
        assert_eq!(
            layout.parse::<Board>(),
            Err(LayoutError::DisconnectedVehicle {
                label: Label::new('B').unwrap()
            })
        );
    }

    #[test]
    fn test_single_cell_vehicle_is_rejected() {
        let layout = "Booooo\
                      oooooo\
                      AAoooo\
                      oooooo\
                      oooooo\
                      oooooo";
        assert_eq!(
            layout.parse::<Board>(),
            Err(LayoutError::VehicleTooShort {
                label: Label::new('B').unwrap()
            })
        );
    }

    #[test]
    fn test_overlong_vehicle_is_rejected() {
        let b = Label::new('B').unwrap();
        for layout in [
            "BBBBBBBoooooAAoooooooooooooooooooooo",
            "BoBoBoBoBoBoAAoBoooooooooooooooooooo",
        ] {
            assert_eq!(
                layout.parse::<Board>(),
                Err(LayoutError::VehicleTooLong { label: b })
            );
        }
    }

    #[test]
    fn test_full_line_vehicle_is_accepted() {
        let layout = "BBBBBB\
                      oooooo\
                      AAoooo\
                      oooooo\
                      oooooo\
                      oooooo";
        let board: Board = layout.parse().unwrap();
        let b = board.vehicle(Label::new('B').unwrap()).unwrap();
        assert_eq!(b.len(), 6);
        assert!(b.range().is_fixed());
    }

    #[test]
    fn test_missing_main_vehicle() {
        let layout = "BBoooo\
                      oooooo\
                      oooooo\
                      oooooo\
                      oooooo\
                      oooooo";
        assert_eq!(
            layout.parse::<Board>(),
            Err(LayoutError::MissingMainVehicle {
                label: Label::new('A').unwrap()
            })
        );
    }

    #[test]
    fn test_conflicting_symbols() {
        let symbols = LayoutSymbols {
            empty: 'x',
            ..LayoutSymbols::default()
        };
        assert_eq!(
            Board::parse(SAMPLE, &symbols),
            Err(LayoutError::ConflictingSymbols)
        );
    }
}
