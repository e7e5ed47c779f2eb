use oxitac_engine::Board;
use oxitac_evaluator::{FEATURE_COUNT, FeatureVector};

/// One labeled observation for the trainer.
///
/// Carries the 6 raw integer features and a ±1 label. Samples arrive from
/// the external dataset loader already validated; the trainer consumes
/// them read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    features: [i32; FEATURE_COUNT],
    label: i32,
}

impl Sample {
    #[must_use]
    pub const fn new(features: [i32; FEATURE_COUNT], label: i32) -> Self {
        Self { features, label }
    }

    /// Builds a sample directly from a board position.
    ///
    /// Features are extracted for the fixed reference mark, the same way
    /// the neural evaluator sees the board at inference time.
    #[must_use]
    pub fn from_board(board: &Board, label: i32) -> Self {
        Self::new(*FeatureVector::extract(board).raw(), label)
    }

    #[must_use]
    pub const fn features(&self) -> &[i32; FEATURE_COUNT] {
        &self.features
    }

    #[must_use]
    pub const fn label(&self) -> i32 {
        self.label
    }
}

#[cfg(test)]
mod tests {
    use oxitac_engine::Mark;

    use super::*;

    #[test]
    fn test_from_board_matches_feature_extraction() {
        let mut board = Board::EMPTY;
        board.set_cell(1, 1, Mark::X);
        board.set_cell(0, 0, Mark::O);

        let sample = Sample::from_board(&board, 1);
        assert_eq!(sample.features(), FeatureVector::extract(&board).raw());
        assert_eq!(sample.label(), 1);
    }
}
