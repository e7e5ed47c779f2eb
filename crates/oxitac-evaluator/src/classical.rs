//! Handcrafted positional heuristic.
//!
//! Scores a position by terminal outcome first, then by material placed on
//! the strategically valuable cells and the threat structure of the 8
//! winning lines. All weights are empirically chosen constants; they are
//! preserved exactly for compatibility with the trained model's scale and
//! are not to be retuned in isolation.

use oxitac_engine::{Board, CENTER, CORNERS, Mark, WINNING_LINES};

use crate::Evaluator;

/// Score for a decided game, from the winner's perspective.
const WIN_SCORE: i32 = 1000;
/// Weight of holding the center cell.
const CENTER_WEIGHT: i32 = 3;
/// Weight of holding one corner cell.
const CORNER_WEIGHT: i32 = 1;

/// Static heuristic evaluator.
///
/// A pure function of the board: no state, no side effects, identical
/// inputs always produce the identical score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicalEvaluator;

impl Evaluator for ClassicalEvaluator {
    fn score(&self, board: &Board, perspective: Mark) -> i32 {
        match board.winner() {
            Some(winner) if winner == perspective => return WIN_SCORE,
            Some(_) => return -WIN_SCORE,
            None if board.is_full() => return 0,
            None => {}
        }

        let mut score = 0;

        match board.cell(CENTER.0, CENTER.1) {
            Some(mark) if mark == perspective => score += CENTER_WEIGHT,
            Some(_) => score -= CENTER_WEIGHT,
            None => {}
        }

        for &(row, col) in &CORNERS {
            match board.cell(row, col) {
                Some(mark) if mark == perspective => score += CORNER_WEIGHT,
                Some(_) => score -= CORNER_WEIGHT,
                None => {}
            }
        }

        for line in &WINNING_LINES {
            score += line_score(board, perspective, line);
        }

        score
    }
}

/// Scores one line by how many cells each side holds.
///
/// A line contested by both sides is dead and contributes 0. Otherwise two
/// own cells are worth +6, one is +2; two opposing cells cost −5, one −2.
fn line_score(board: &Board, perspective: Mark, line: &[(usize, usize); 3]) -> i32 {
    let other = perspective.opposite();
    let mut own = 0;
    let mut opposing = 0;

    for &(row, col) in line {
        match board.cell(row, col) {
            Some(mark) if mark == perspective => own += 1,
            Some(mark) if mark == other => opposing += 1,
            _ => {}
        }
    }

    if own > 0 && opposing > 0 {
        return 0;
    }

    match (own, opposing) {
        (2, 0) => 6,
        (1, 0) => 2,
        (0, 2) => -5,
        (0, 1) => -2,
        _ => 0,
    }
}
