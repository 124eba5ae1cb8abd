//! Level definitions.

/// Goal cell used when a level does not name one: the right edge of row 2.
pub const DEFAULT_GOAL: u8 = 17;

/// A playable level.
///
/// Levels are plain data supplied by the caller; the field names follow the
/// JSON level packs (`minimumMove` in particular).
///
/// # Examples
///
/// ```
/// use blockslide_game::{DEFAULT_GOAL, Level};
///
/// let level = Level::new(3, "oIooLMoIBBLMAAJKooCCJKooxEEEoxGGHHoo", 18);
/// assert_eq!(level.goal, DEFAULT_GOAL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Position of the level in its pack.
    pub index: u32,
    /// The 36-character layout string.
    pub layout: String,
    /// Fewest moves known to solve the level.
    #[serde(rename = "minimumMove")]
    pub minimum_moves: u32,
    /// Cell the last cell of the main vehicle must reach.
    #[serde(default = "default_goal")]
    pub goal: u8,
}

fn default_goal() -> u8 {
    DEFAULT_GOAL
}

impl Level {
    /// Creates a level whose goal is [`DEFAULT_GOAL`].
    #[must_use]
    pub fn new(index: u32, layout: impl Into<String>, minimum_moves: u32) -> Self {
        Self {
            index,
            layout: layout.into(),
            minimum_moves,
            goal: DEFAULT_GOAL,
        }
    }

    /// Replaces the goal cell.
    #[must_use]
    pub fn with_goal(mut self, goal: u8) -> Self {
        self.goal = goal;
        self
    }
}
