use oxitac_engine::{Board, Mark, Move};
use oxitac_evaluator::Evaluator;

/// A root move annotated with the score search gave it.
///
/// Scores are transient: they describe one search call's view of the
/// position and should not outlive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    mov: Move,
    score: i32,
}

impl ScoredMove {
    #[must_use]
    pub const fn mov(self) -> Move {
        self.mov
    }

    /// Score of the position after this move, from the maximizer's
    /// perspective (lower is better for the AI).
    #[must_use]
    pub const fn score(self) -> i32 {
        self.score
    }
}

/// Alpha-beta minimax driver.
///
/// Holds the evaluator handle explicitly; there is no process-wide
/// evaluator state, so two engines with different evaluators can coexist
/// and a caller swaps evaluators by constructing a new engine.
#[derive(Debug)]
pub struct SearchEngine<'a> {
    evaluator: &'a dyn Evaluator,
}

impl<'a> SearchEngine<'a> {
    #[must_use]
    pub const fn new(evaluator: &'a dyn Evaluator) -> Self {
        Self { evaluator }
    }

    /// Picks the best move for the AI (minimizing) side.
    ///
    /// Enumerates root moves in row-major order, places `min_mark` on each
    /// and searches the remaining `depth - 1` plies with `max_mark` both to
    /// move and as the fixed maximizing reference. The first move is
    /// tentatively accepted; a later move replaces it only with a strictly
    /// lower score, so tied moves resolve to the lowest row-major index.
    ///
    /// Returns `None` when the board is already terminal; callers should
    /// check [`Board::is_terminal`] first.
    #[must_use]
    pub fn best_move(
        &self,
        board: &Board,
        max_mark: Mark,
        min_mark: Mark,
        depth: u32,
    ) -> Option<Move> {
        let mut best: Option<ScoredMove> = None;
        for mov in board.legal_moves() {
            let score = self.root_score(board, mov, max_mark, min_mark, depth);
            if best.is_none_or(|incumbent| score < incumbent.score) {
                best = Some(ScoredMove { mov, score });
            }
        }
        best.map(ScoredMove::mov)
    }

    /// Scores every legal root move, in row-major order.
    ///
    /// One entry per legal move, for display and diagnostics. The list is
    /// empty iff the board is terminal.
    #[must_use]
    pub fn all_move_scores(
        &self,
        board: &Board,
        max_mark: Mark,
        min_mark: Mark,
        depth: u32,
    ) -> Vec<ScoredMove> {
        board
            .legal_moves()
            .iter()
            .map(|&mov| ScoredMove {
                mov,
                score: self.root_score(board, mov, max_mark, min_mark, depth),
            })
            .collect()
    }

    fn root_score(
        &self,
        board: &Board,
        mov: Move,
        max_mark: Mark,
        min_mark: Mark,
        depth: u32,
    ) -> i32 {
        let mut next = *board;
        next.set_cell(mov.row(), mov.col(), min_mark);
        // After the AI's placement the human is to move; saturation makes
        // a depth-0 request degrade to direct evaluation of each child.
        self.alpha_beta(
            &next,
            max_mark,
            max_mark,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
        )
    }

    /// Exact minimax value of `board`, bounded by `depth` plies.
    ///
    /// The node is a MAX node iff `side_to_move == max_mark`. Sibling
    /// enumeration stops once `beta <= alpha`; the cutoff never changes the
    /// returned value, only the work done to find it.
    fn alpha_beta(
        &self,
        board: &Board,
        side_to_move: Mark,
        max_mark: Mark,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth == 0 || board.is_terminal() {
            return self.evaluator.score(board, max_mark);
        }

        if side_to_move == max_mark {
            let mut best = i32::MIN;
            for mov in board.legal_moves() {
                let mut next = *board;
                next.set_cell(mov.row(), mov.col(), side_to_move);
                let value = self.alpha_beta(
                    &next,
                    side_to_move.opposite(),
                    max_mark,
                    depth - 1,
                    alpha,
                    beta,
                );
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mov in board.legal_moves() {
                let mut next = *board;
                next.set_cell(mov.row(), mov.col(), side_to_move);
                let value = self.alpha_beta(
                    &next,
                    side_to_move.opposite(),
                    max_mark,
                    depth - 1,
                    alpha,
                    beta,
                );
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
