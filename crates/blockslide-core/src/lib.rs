//! Core data structures for sliding-block puzzles.
//!
//! This crate models a 6×6 board on which vehicles slide along their row or
//! column until they hit a wall, another vehicle or the edge of the board.
//! It is used by the game crate to run level sessions and by front-ends to
//! render boards and translate drag gestures into moves.
//!
//! # Overview
//!
//! 1. **Geometry** - cells, lines and orientations
//!    - [`cell`]: [`Cell`], the row-major index of a board cell
//!    - [`line`]: [`Line`] (a row or column) and [`Orientation`]
//!    - [`cell_set`]: [`CellSet`], a bitset used for occupancy
//!
//! 2. **Pieces and parsing**
//!    - [`piece`]: [`Piece`] (wall, empty cell or [`Vehicle`])
//!    - [`layout`]: parsing of 36-character layout strings into a [`Board`]
//!
//! 3. **Movement**
//!    - [`range`]: [`SlotRange`] and [`slide_range`]
//!    - [`board`]: [`Board::move_vehicle`], which keeps every range current
//!    - [`snap`]: slot boundaries and drag snapping for front-ends
//!
//! # Examples
//!
//! ```
//! use blockslide_core::{Board, Label, SlotRange};
//!
//! let mut board: Board = "oIooLMoIBBLMAAJKooCCJKooxEEEoxGGHHoo".parse().unwrap();
//!
//! let l = Label::new('L').unwrap();
//! assert_eq!(board.vehicle(l).unwrap().range(), SlotRange::new(0, 4));
//!
//! let dest = board.vehicle(l).unwrap().positions_at(4).unwrap();
//! board.move_vehicle(l, &dest).unwrap();
//! assert_eq!(board.to_string(), "oIoooMoIBBoMAAJKooCCJKooxEEELxGGHHLo");
//! ```

pub mod board;
pub mod cell;
pub mod cell_set;
pub mod label;
pub mod layout;
pub mod line;
pub mod piece;
pub mod range;
pub mod snap;

pub use self::{
    board::{Board, MoveError},
    cell::{CELL_COUNT, Cell, GRID_SIZE},
    cell_set::CellSet,
    label::Label,
    layout::{LayoutError, LayoutSymbols},
    line::{Line, Orientation},
    piece::{Piece, Positions, Vehicle},
    range::{SlotRange, slide_range},
};
