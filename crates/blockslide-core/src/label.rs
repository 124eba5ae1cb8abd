//! Piece labels.

use std::fmt::{self, Display};

/// The single-character name of a vehicle, as written in a layout string.
///
/// Labels are ASCII letters or digits.
///
/// # Examples
///
/// ```
/// use blockslide_core::Label;
///
/// let label = Label::new('A').unwrap();
/// assert_eq!(label.as_char(), 'A');
/// assert_eq!(Label::new('.'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(char);

impl Label {
    /// Creates a label, returning `None` if `symbol` is not an ASCII letter or digit.
    #[must_use]
    pub const fn new(symbol: char) -> Option<Self> {
        if symbol.is_ascii_alphanumeric() {
            Some(Self(symbol))
        } else {
            None
        }
    }

    /// Returns the label character.
    #[must_use]
    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Label> for char {
    fn from(label: Label) -> char {
        label.0
    }
}

impl TryFrom<char> for Label {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::new(symbol).ok_or(symbol)
    }
}
