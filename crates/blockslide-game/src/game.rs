use std::num::NonZero;

use blockslide_core::{Board, Cell, Label, LayoutSymbols, MoveError, Positions};

use crate::{GameError, History, HistoryEntry, Level, Score};

/// Options for a level session.
#[derive(Debug, Clone)]
pub struct GameOptions {
    /// Reserved symbols used to parse the layout.
    pub symbols: LayoutSymbols,
    /// Maximum number of moves kept for undo.
    pub history_capacity: NonZero<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            symbols: LayoutSymbols::default(),
            history_capacity: History::default_capacity(),
        }
    }
}

/// Whether an applied move is recorded for undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum HistoryPolicy {
    /// Push the vehicle's previous cells to the history.
    Record,
    /// Leave the history untouched, as when replaying an undo.
    Skip,
}

/// What happened when a move was requested.
///
/// `Moved` and `Won` correspond to the move-applied and win notifications a
/// front-end reacts to; `Won` implies the move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The vehicle was already on the requested cells.
    Unchanged,
    /// The vehicle moved.
    Moved {
        /// Moves played so far, this one included.
        move_count: u32,
    },
    /// The main vehicle moved onto the goal.
    Won {
        /// Moves played so far, this one included.
        move_count: u32,
    },
}

/// Progress of a level session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// Moves are accepted.
    Playing,
    /// The main vehicle reached the goal; only a reset resumes play.
    Won,
}

/// A level session.
///
/// Owns the board derived from a [`Level`], the undo history and the move
/// counter. Every successful move updates the slide range of every vehicle.
///
/// # Example
///
/// ```
/// use blockslide_game::{Game, GameOptions, Level, MoveOutcome};
/// use blockslide_core::Label;
///
/// let level = Level::new(
///     0,
///     "oooooo\
///      ooooBo\
///      AAooBo\
///      oooooo\
///      oooooo\
///      oooooo",
///     2,
/// );
/// let mut game = Game::new(level, &GameOptions::default()).unwrap();
///
/// let a = Label::new('A').unwrap();
/// let b = Label::new('B').unwrap();
/// assert_eq!(game.slide(b, 3).unwrap(), MoveOutcome::Moved { move_count: 1 });
/// assert_eq!(game.slide(a, 4).unwrap(), MoveOutcome::Won { move_count: 2 });
/// assert!(game.is_won());
/// assert!((game.score().unwrap().ratio() - 1.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    level: Level,
    goal: Cell,
    initial: Board,
    board: Board,
    history: History,
    move_count: u32,
    status: GameStatus,
}

impl Game {
    /// Starts a session on `level`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Layout`] if the layout does not parse,
    /// [`GameError::InvalidGoal`] if the goal is off the board and
    /// [`GameError::GoalOffMainLine`] if the main vehicle can never reach it.
    pub fn new(level: Level, options: &GameOptions) -> Result<Self, GameError> {
        let board = Board::parse(&level.layout, &options.symbols)?;
        let goal = Cell::try_new(usize::from(level.goal))
            .ok_or(GameError::InvalidGoal { goal: level.goal })?;
        if board.main_vehicle().line().slot_of(goal).is_none() {
            return Err(GameError::GoalOffMainLine { goal });
        }

        log::debug!("starting level {} ({})", level.index, level.layout);
        Ok(Self {
            level,
            goal,
            initial: board.clone(),
            board,
            history: History::with_capacity(options.history_capacity),
            move_count: 0,
            status: GameStatus::Playing,
        })
    }

    /// Returns the level being played.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the goal cell.
    #[must_use]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Returns the number of moves applied since the last reset.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the undo history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the session status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` once the main vehicle has reached the goal.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status.is_won()
    }

    /// Returns `true` if there is a move to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns `true` if the board may differ from its initial layout.
    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.move_count > 0
    }

    /// Returns the score of a won session.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.is_won()
            .then(|| Score::new(self.level.minimum_moves, self.move_count))
    }

    /// Moves the vehicle `label` onto `positions`.
    ///
    /// `positions` must be a contiguous run of the vehicle's length on its own
    /// line, within its current range. Requesting the cells the vehicle already
    /// covers is a no-op: nothing is recorded and the move counter is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyWon`] once the level is won, and
    /// [`GameError::Move`] if the vehicle does not exist or cannot take
    /// `positions`.
    pub fn apply_move(
        &mut self,
        label: Label,
        positions: &[Cell],
        policy: HistoryPolicy,
    ) -> Result<MoveOutcome, GameError> {
        if self.is_won() {
            return Err(GameError::AlreadyWon);
        }
        let vehicle = self
            .board
            .vehicle(label)
            .ok_or(MoveError::UnknownVehicle { label })?;
        if vehicle.positions() == positions {
            return Ok(MoveOutcome::Unchanged);
        }
        let previous: Positions = vehicle.positions().iter().copied().collect();

        self.board.move_vehicle(label, positions)?;
        if policy.is_record() {
            self.history.push(HistoryEntry { label, previous });
        }
        self.move_count += 1;
        log::debug!(
            "move {}: {label} to {}",
            self.move_count,
            positions[0]
        );

        if self.reached_goal(label) {
            self.status = GameStatus::Won;
            log::info!(
                "level {} won in {} moves (minimum {})",
                self.level.index,
                self.move_count,
                self.level.minimum_moves
            );
            return Ok(MoveOutcome::Won {
                move_count: self.move_count,
            });
        }
        Ok(MoveOutcome::Moved {
            move_count: self.move_count,
        })
    }

    /// Slides the vehicle `label` so its first cell sits on `lead_slot`,
    /// recording the move for undo.
    ///
    /// # Errors
    ///
    /// See [`Game::apply_move`].
    pub fn slide(&mut self, label: Label, lead_slot: u8) -> Result<MoveOutcome, GameError> {
        let vehicle = self
            .board
            .vehicle(label)
            .ok_or(MoveError::UnknownVehicle { label })?;
        let positions = vehicle
            .positions_at(lead_slot)
            .ok_or(MoveError::InvalidShape { label })?;
        self.apply_move(label, &positions, HistoryPolicy::Record)
    }

    /// Reverts the most recent recorded move.
    ///
    /// The revert is itself applied as a move: it counts towards the move
    /// counter but is not recorded. Returns `None` when there is nothing to
    /// undo or the level is already won.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Move`] if the recorded cells cannot be restored,
    /// which only happens if the board was changed outside this session.
    pub fn undo(&mut self) -> Result<Option<MoveOutcome>, GameError> {
        if self.is_won() {
            return Ok(None);
        }
        let Some(entry) = self.history.pop() else {
            return Ok(None);
        };
        log::debug!("undo: {} back to {}", entry.label, entry.previous[0]);
        self.apply_move(entry.label, &entry.previous, HistoryPolicy::Skip)
            .map(Some)
    }

    /// Restores the initial layout, clears the history and the move counter.
    pub fn reset(&mut self) {
        log::debug!("reset level {}", self.level.index);
        self.board = self.initial.clone();
        self.history.clear();
        self.move_count = 0;
        self.status = GameStatus::Playing;
    }

    fn reached_goal(&self, label: Label) -> bool {
        self.board
            .vehicle(label)
            .is_some_and(|v| v.is_main() && v.positions().last() == Some(&self.goal))
    }
}
