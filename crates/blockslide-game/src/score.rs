//! Level scores.

/// The result of a won level.
///
/// The score is the ratio of the level's minimum move count to the moves
/// actually played, so a perfect solve scores `1.0`.
///
/// # Examples
///
/// ```
/// use blockslide_game::Score;
///
/// let best = Score::new(6, 6);
/// let sloppy = Score::new(6, 12);
/// assert!((sloppy.ratio() - 0.5).abs() < f64::EPSILON);
/// assert!(best.is_improvement_over(&sloppy));
/// assert!(!sloppy.is_improvement_over(&best));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Fewest moves known to solve the level.
    pub minimum_moves: u32,
    /// Moves played, undo replays included.
    pub move_count: u32,
}

impl Score {
    /// Creates a score.
    #[must_use]
    pub fn new(minimum_moves: u32, move_count: u32) -> Self {
        Self {
            minimum_moves,
            move_count,
        }
    }

    /// Returns `minimum_moves / move_count`.
    ///
    /// A score with no moves is treated as a single move.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.minimum_moves) / f64::from(self.move_count.max(1))
    }

    /// Returns `true` if this score should replace `previous` as the best one.
    #[must_use]
    pub fn is_improvement_over(&self, previous: &Score) -> bool {
        self.ratio() > previous.ratio()
    }
}
