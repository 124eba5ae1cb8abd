//! Errors reported by level sessions.

use blockslide_core::{Cell, LayoutError, MoveError};

/// Errors that can occur while starting or playing a level.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The level layout could not be parsed.
    #[display("invalid layout: {_0}")]
    Layout(#[from] LayoutError),
    /// A requested move was rejected by the board.
    #[display("invalid move: {_0}")]
    Move(#[from] MoveError),
    /// The goal is not a cell of the board.
    #[display("goal {goal} is outside the board")]
    InvalidGoal {
        /// The goal given by the level.
        goal: u8,
    },
    /// The goal does not lie on the main vehicle's line.
    #[display("goal {goal} is not on the main vehicle's line")]
    GoalOffMainLine {
        /// The goal given by the level.
        goal: Cell,
    },
    /// The level is already won; reset it to keep playing.
    #[display("level is already won")]
    AlreadyWon,
}
