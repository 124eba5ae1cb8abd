//! Test utilities for level sessions.
//!
//! This module provides [`GameTester`], a harness that plays scripted moves on
//! a [`Game`] and checks the resulting state.
//!
//! # Example
//!
//! ```
//! # use blockslide_game::{MoveOutcome, testing::GameTester};
//! GameTester::from_layout("
//!     oooooo
//!     ooooBo
//!     AAooBo
//!     oooooo
//!     oooooo
//!     oooooo
//! ")
//! .assert_range('A', 0, 2)
//! .slide('B', 3)
//! .assert_range('A', 0, 4)
//! .slide('A', 4)
//! .assert_last_outcome(MoveOutcome::Won { move_count: 2 })
//! .assert_won();
//! ```

use blockslide_core::{Label, SlotRange};

use crate::{Game, GameOptions, Level, MoveOutcome};

/// A test harness for scripted level sessions.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct GameTester {
    game: Game,
    last_outcome: Option<MoveOutcome>,
}

impl GameTester {
    /// Creates a tester for `level` with default options.
    ///
    /// # Panics
    ///
    /// Panics if the level cannot be started.
    #[track_caller]
    pub fn new(level: Level) -> Self {
        let game = Game::new(level, &GameOptions::default()).unwrap();
        Self {
            game,
            last_outcome: None,
        }
    }

    /// Creates a tester from a layout string whose whitespace is ignored.
    ///
    /// # Panics
    ///
    /// Panics if the layout cannot be parsed.
    #[track_caller]
    pub fn from_layout(layout: &str) -> Self {
        let layout: String = layout.chars().filter(|c| !c.is_whitespace()).collect();
        Self::new(Level::new(0, layout, 0))
    }

    /// Returns the session under test.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Slides a vehicle so its first cell sits on `lead_slot`.
    ///
    /// # Panics
    ///
    /// Panics if the move is rejected.
    #[track_caller]
    pub fn slide(mut self, label: char, lead_slot: u8) -> Self {
        let outcome = self.game.slide(label_of(label), lead_slot);
        let outcome = outcome.unwrap_or_else(|e| panic!("slide {label} to {lead_slot}: {e}"));
        self.last_outcome = Some(outcome);
        self
    }

    /// Undoes the most recent move.
    ///
    /// # Panics
    ///
    /// Panics if there is nothing to undo.
    #[track_caller]
    pub fn undo(mut self) -> Self {
        let outcome = self.game.undo().unwrap();
        assert!(outcome.is_some(), "nothing to undo");
        self.last_outcome = outcome;
        self
    }

    /// Resets the session.
    pub fn reset(mut self) -> Self {
        self.game.reset();
        self.last_outcome = None;
        self
    }

    /// Asserts that the board renders as `layout`, ignoring whitespace.
    ///
    /// # Panics
    ///
    /// Panics if the board differs.
    #[track_caller]
    pub fn assert_layout(self, layout: &str) -> Self {
        let expected: String = layout.chars().filter(|c| !c.is_whitespace()).collect();
        let actual = self.game.board().to_string();
        assert_eq!(
            actual,
            expected,
            "unexpected board:\n{}",
            self.game.board().to_grid_string()
        );
        self
    }

    /// Asserts the slide range of a vehicle.
    ///
    /// # Panics
    ///
    /// Panics if the vehicle is missing or its range differs.
    #[track_caller]
    pub fn assert_range(self, label: char, min: u8, max: u8) -> Self {
        let vehicle = self
            .game
            .board()
            .vehicle(label_of(label))
            .unwrap_or_else(|| panic!("no vehicle {label}"));
        assert_eq!(
            vehicle.range(),
            SlotRange::new(min, max),
            "unexpected range for vehicle {label}"
        );
        self
    }

    /// Asserts that the session is won.
    ///
    /// # Panics
    ///
    /// Panics if the session is still in play.
    #[track_caller]
    pub fn assert_won(self) -> Self {
        assert!(self.game.is_won(), "expected a won session");
        self
    }

    /// Asserts that the session is still in play.
    ///
    /// # Panics
    ///
    /// Panics if the session is won.
    #[track_caller]
    pub fn assert_not_won(self) -> Self {
        assert!(!self.game.is_won(), "expected a session still in play");
        self
    }

    /// Asserts the move counter.
    ///
    /// # Panics
    ///
    /// Panics if the counter differs.
    #[track_caller]
    pub fn assert_move_count(self, expected: u32) -> Self {
        assert_eq!(self.game.move_count(), expected, "unexpected move count");
        self
    }

    /// Asserts the number of moves that can be undone.
    ///
    /// # Panics
    ///
    /// Panics if the history length differs.
    #[track_caller]
    pub fn assert_history_len(self, expected: usize) -> Self {
        assert_eq!(self.game.history().len(), expected, "unexpected history length");
        self
    }

    /// Asserts the outcome of the last slide or undo.
    ///
    /// # Panics
    ///
    /// Panics if no move was played or its outcome differs.
    #[track_caller]
    pub fn assert_last_outcome(self, expected: MoveOutcome) -> Self {
        assert_eq!(self.last_outcome, Some(expected), "unexpected outcome");
        self
    }
}

#[track_caller]
fn label_of(c: char) -> Label {
    Label::new(c).unwrap_or_else(|| panic!("invalid label {c:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: &str = "
        oooooo
        ooooBo
        AAooBo
        oooooo
        oooooo
        oooooo
    ";

    #[test]
    fn test_from_layout_ignores_whitespace() {
        GameTester::from_layout(OPEN)
            .assert_layout("ooooooooooBoAAooBooooooooooooooooooo")
            .assert_move_count(0)
            .assert_history_len(0)
            .assert_not_won();
    }

    #[test]
    fn test_scripted_session() {
        GameTester::from_layout(OPEN)
            .slide('B', 4)
            .assert_last_outcome(MoveOutcome::Moved { move_count: 1 })
            .assert_range('A', 0, 4)
            .slide('A', 2)
            .assert_history_len(2)
            .undo()
            .assert_last_outcome(MoveOutcome::Moved { move_count: 3 })
            .assert_history_len(1)
            .undo()
            .assert_layout(OPEN)
            .assert_move_count(4)
            .reset()
            .assert_move_count(0);
    }

    #[test]
    fn test_slide_onto_current_cells_is_unchanged() {
        GameTester::from_layout(OPEN)
            .slide('A', 0)
            .assert_last_outcome(MoveOutcome::Unchanged)
            .assert_move_count(0)
            .assert_history_len(0);
    }

    #[test]
    #[should_panic(expected = "nothing to undo")]
    fn test_undo_without_history_panics() {
        let _ = GameTester::from_layout(OPEN).undo();
    }

    #[test]
    #[should_panic(expected = "unexpected range for vehicle A")]
    fn test_assert_range_reports_mismatch() {
        let _ = GameTester::from_layout(OPEN).assert_range('A', 0, 4);
    }
}
