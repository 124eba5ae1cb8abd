//! Level sessions for sliding-block puzzles.
//!
//! A [`Game`] starts from a [`Level`], owns the current board and applies
//! moves to it, keeping a bounded undo [`History`] and a move counter. When the
//! main vehicle's last cell lands on the goal the session is won and a
//! [`Score`] becomes available.
//!
//! # Examples
//!
//! ```
//! use blockslide_core::Label;
//! use blockslide_game::{Game, GameOptions, Level, MoveOutcome};
//!
//! let level = Level::new(0, "oIooLMoIBBLMAAJKooCCJKooxEEEoxGGHHoo", 18);
//! let mut game = Game::new(level, &GameOptions::default()).unwrap();
//!
//! let l = Label::new('L').unwrap();
//! assert_eq!(game.slide(l, 4).unwrap(), MoveOutcome::Moved { move_count: 1 });
//! assert_eq!(game.undo().unwrap(), Some(MoveOutcome::Moved { move_count: 2 }));
//! assert_eq!(game.board().to_string(), game.level().layout);
//! ```

mod error;
mod game;
mod history;
mod level;
mod score;
pub mod testing;

pub use self::{
    error::GameError,
    game::{Game, GameOptions, GameStatus, HistoryPolicy, MoveOutcome},
    history::{History, HistoryEntry},
    level::{DEFAULT_GOAL, Level},
    score::Score,
};
