use std::fmt::{self, Write as _};

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// Board side length.
pub const SIZE: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// The 8 three-cell lines that decide the game, in the order they are
/// checked: rows top to bottom, then columns left to right, then the main
/// diagonal, then the anti-diagonal.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The center cell.
pub const CENTER: (usize, usize) = (1, 1);

/// The four corner cells in row-major order.
pub const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

/// A candidate cell for the side to move.
///
/// Moves are enumerated fresh for each position by [`Board::legal_moves`];
/// they carry no score of their own (search results pair a `Move` with the
/// score it earned).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }
}

/// 3×3 grid of cells, each empty or holding a [`Mark`].
///
/// `Board` is a plain `Copy` value: duplicating one is a full deep copy, so
/// search code can branch on owned copies without branches ever observing
/// each other's mutations. The winner is always computed from the cell
/// contents, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [None; CELL_COUNT],
    };

    fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < SIZE && col < SIZE, "cell ({row}, {col}) out of range");
        row * SIZE + col
    }

    /// Returns the content of a cell.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells[Self::index(row, col)]
    }

    /// Places a mark on a cell, overwriting any previous content.
    pub fn set_cell(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[Self::index(row, col)] = Some(mark);
    }

    #[must_use]
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_none()
    }

    /// Enumerates the empty cells in row-major order.
    ///
    /// Row-major enumeration is what makes search tie-breaking
    /// deterministic, so the order here is a contract, not an accident.
    #[must_use]
    pub fn legal_moves(&self) -> ArrayVec<Move, CELL_COUNT> {
        let mut moves = ArrayVec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.is_empty_cell(row, col) {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the winning mark, if any.
    ///
    /// The 8 lines are checked in [`WINNING_LINES`] order and the first
    /// complete line wins. A legally-reached position has at most one
    /// winner, so the order only matters for determinism.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        for &[a, b, c] in &WINNING_LINES {
            let first = self.cell(a.0, a.1);
            if first.is_some() && first == self.cell(b.0, b.1) && first == self.cell(c.0, c.1) {
                return first;
            }
        }
        None
    }

    /// A board is terminal when it has a winner or no empty cell remains.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Creates a `Board` from ASCII art for tests and fixtures.
    /// 'X' and 'O' are marks, '.' is an empty cell. Expects 3 rows of
    /// 3 cells each, specified from top to bottom.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut board = Self::EMPTY;
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        assert_eq!(lines.len(), SIZE, "expected {SIZE} rows, got {}", lines.len());

        for (row, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line
                .chars()
                .filter(|c| *c == 'X' || *c == 'O' || *c == '.')
                .collect();
            assert_eq!(
                chars.len(),
                SIZE,
                "each row must have exactly {SIZE} cells, got {} at row {row}",
                chars.len(),
            );
            for (col, &ch) in chars.iter().enumerate() {
                if let Some(mark) = Mark::from_char(ch) {
                    board.set_cell(row, col, mark);
                }
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                f.write_char(self.cell(row, col).map_or('.', Mark::as_char))?;
            }
            if row + 1 < SIZE {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: 9 row-major cells as one string, e.g. "X.O.X....".
        let mut s = String::with_capacity(CELL_COUNT);
        for cell in &self.cells {
            s.push(cell.map_or('.', Mark::as_char));
        }
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.chars().count() != CELL_COUNT {
            return Err(serde::de::Error::custom(format!(
                "expected {CELL_COUNT} cells, got {}",
                s.chars().count()
            )));
        }

        let mut cells = [None; CELL_COUNT];
        for (i, ch) in s.chars().enumerate() {
            cells[i] = match ch {
                '.' => None,
                _ => Some(Mark::from_char(ch).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid cell at index {i}: {ch}"))
                })?),
            };
        }

        Ok(Board { cells })
    }
}
