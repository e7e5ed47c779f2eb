use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players' marks.
///
/// The absence of a mark (an empty cell, a game without a winner) is
/// represented as `Option<Mark>::None` rather than a third variant, so code
/// dealing with an actual player can never receive a non-player value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the opposing mark.
    ///
    /// The relation is involutive: `m.opposite().opposite() == m`.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involutive() {
        assert_eq!(Mark::X.opposite(), Mark::O);
        assert_eq!(Mark::O.opposite(), Mark::X);
        assert_eq!(Mark::X.opposite().opposite(), Mark::X);
        assert_eq!(Mark::O.opposite().opposite(), Mark::O);
    }

    #[test]
    fn test_char_roundtrip() {
        assert_eq!(Mark::from_char(Mark::X.as_char()), Some(Mark::X));
        assert_eq!(Mark::from_char(Mark::O.as_char()), Some(Mark::O));
        assert_eq!(Mark::from_char('.'), None);
    }
}
