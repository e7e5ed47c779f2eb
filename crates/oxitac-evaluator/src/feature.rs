//! Fixed 6-feature board summary for the neural evaluator.
//!
//! Features are always computed relative to one fixed reference mark
//! ([`REFERENCE_MARK`], X), matching the convention the training dataset
//! was built with, never relative to the caller's human/AI labels. The
//! neural evaluator flips the sign of its output instead when scoring for
//! the other side.
//!
//! Extraction is a pure function of the board and yields raw integer
//! counts; [`normalize_features`] applies the fixed per-feature divisors
//! shared by inference and training.

use oxitac_engine::{Board, CENTER, CORNERS, Mark, SIZE, WINNING_LINES};

/// Number of extracted features.
pub const FEATURE_COUNT: usize = 6;

/// The mark all features are measured for.
pub const REFERENCE_MARK: Mark = Mark::X;

/// Per-feature divisors applied before the forward pass.
///
/// Counts (features 1-4 and 6) are divided by 5; the center flag
/// (feature 5) is already in `{0, 1}` and passes through.
const NORMALIZATION_DIVISORS: [f64; FEATURE_COUNT] = [5.0, 5.0, 5.0, 5.0, 1.0, 5.0];

/// Raw feature values extracted from one board.
///
/// In order: reference-mark cell count, opposing cell count, reference
/// near-win lines, opposing near-win lines, reference-holds-center flag,
/// reference corner count. A near-win line has exactly two cells of one
/// mark and one empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVector([i32; FEATURE_COUNT]);

impl FeatureVector {
    /// Extracts the features of `board` relative to [`REFERENCE_MARK`].
    #[must_use]
    pub fn extract(board: &Board) -> Self {
        let reference = REFERENCE_MARK;
        let other = reference.opposite();

        let mut reference_count = 0;
        let mut other_count = 0;
        for row in 0..SIZE {
            for col in 0..SIZE {
                match board.cell(row, col) {
                    Some(mark) if mark == reference => reference_count += 1,
                    Some(_) => other_count += 1,
                    None => {}
                }
            }
        }

        let mut reference_near_wins = 0;
        let mut other_near_wins = 0;
        for line in &WINNING_LINES {
            let mut reference_cells = 0;
            let mut other_cells = 0;
            for &(row, col) in line {
                match board.cell(row, col) {
                    Some(mark) if mark == reference => reference_cells += 1,
                    Some(mark) if mark == other => other_cells += 1,
                    _ => {}
                }
            }
            if reference_cells == 2 && other_cells == 0 {
                reference_near_wins += 1;
            }
            if other_cells == 2 && reference_cells == 0 {
                other_near_wins += 1;
            }
        }

        let center = i32::from(board.cell(CENTER.0, CENTER.1) == Some(reference));

        let mut corners = 0;
        for &(row, col) in &CORNERS {
            if board.cell(row, col) == Some(reference) {
                corners += 1;
            }
        }

        Self([
            reference_count,
            other_count,
            reference_near_wins,
            other_near_wins,
            center,
            corners,
        ])
    }

    /// Returns the raw integer feature values.
    #[must_use]
    pub const fn raw(&self) -> &[i32; FEATURE_COUNT] {
        &self.0
    }

    /// Returns the normalized feature values fed to the network.
    #[must_use]
    pub fn normalized(&self) -> [f64; FEATURE_COUNT] {
        normalize_features(&self.0)
    }
}

/// Applies the fixed per-feature divisors.
///
/// Shared by the neural evaluator's forward pass and the trainer's sample
/// preprocessing, so both always agree on the input scale.
#[must_use]
pub fn normalize_features(features: &[i32; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
    let mut normalized = [0.0; FEATURE_COUNT];
    for (out, (&raw, divisor)) in normalized
        .iter_mut()
        .zip(features.iter().zip(NORMALIZATION_DIVISORS))
    {
        *out = f64::from(raw) / divisor;
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_all_zero() {
        let features = FeatureVector::extract(&Board::EMPTY);
        assert_eq!(features.raw(), &[0, 0, 0, 0, 0, 0]);
        assert_eq!(features.normalized(), [0.0; FEATURE_COUNT]);
    }

    #[test]
    fn test_reference_mark_alone_at_center() {
        let mut board = Board::EMPTY;
        board.set_cell(1, 1, Mark::X);
        let features = FeatureVector::extract(&board);
        assert_eq!(features.raw(), &[1, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn test_counts_and_corners() {
        let board = Board::from_ascii(
            r"
            X.O
            .O.
            X.X
            ",
        );
        let features = FeatureVector::extract(&board);
        // X: 3 cells, corners (0,0), (2,0), (2,2); bottom row X.X is a
        // near-win; column 0 X.X is another. O: 2 cells, anti-diagonal
        // O-O with (2,0) taken by X is dead, column 1 .O. is not a pair.
        assert_eq!(features.raw(), &[3, 2, 2, 0, 0, 3]);
    }

    #[test]
    fn test_near_win_requires_empty_third_cell() {
        let board = Board::from_ascii(
            r"
            XXO
            ...
            ...
            ",
        );
        let features = FeatureVector::extract(&board);
        assert_eq!(features.raw(), &[2, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_opposing_near_wins_counted_symmetrically() {
        let board = Board::from_ascii(
            r"
            OO.
            .X.
            ...
            ",
        );
        let features = FeatureVector::extract(&board);
        assert_eq!(features.raw(), &[1, 2, 0, 1, 1, 0]);
    }

    #[test]
    fn test_normalization_divisors() {
        let normalized = normalize_features(&[5, 5, 5, 5, 1, 5]);
        assert_eq!(normalized, [1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);

        let normalized = normalize_features(&[1, 2, 3, 4, 0, 2]);
        assert_eq!(normalized, [0.2, 0.4, 0.6, 0.8, 0.0, 0.4]);
    }
}
