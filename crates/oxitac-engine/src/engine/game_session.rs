use crate::{
    MoveError,
    core::{
        board::{Board, Move},
        mark::Mark,
    },
};

use super::match_stats::MatchStats;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    InProgress,
    Finished(GameOutcome),
}

/// A single game between the human and the AI, with fixed mark assignment.
///
/// The session owns the board, tracks whose turn it is (X always opens)
/// and resolves wins and draws. Match tallies survive [`Self::reset`].
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    human_mark: Mark,
    ai_mark: Mark,
    side_to_move: Mark,
    state: SessionState,
    stats: MatchStats,
}

impl GameSession {
    #[must_use]
    pub fn new(human_mark: Mark) -> Self {
        Self {
            board: Board::EMPTY,
            human_mark,
            ai_mark: human_mark.opposite(),
            side_to_move: Mark::X,
            state: SessionState::InProgress,
            stats: MatchStats::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    #[must_use]
    pub fn ai_mark(&self) -> Mark {
        self.ai_mark
    }

    #[must_use]
    pub fn side_to_move(&self) -> Mark {
        self.side_to_move
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Plays `mov` for `mark`, resolving the game if it ends.
    ///
    /// The caller supplies the mark it is playing for; the session rejects
    /// out-of-turn moves, occupied cells and moves after the game finished.
    pub fn play_move(&mut self, mark: Mark, mov: Move) -> Result<(), MoveError> {
        if self.state.is_finished() {
            return Err(MoveError::GameFinished);
        }
        if mark != self.side_to_move {
            return Err(MoveError::OutOfTurn { mark });
        }
        if !self.board.is_empty_cell(mov.row(), mov.col()) {
            return Err(MoveError::CellOccupied {
                row: mov.row(),
                col: mov.col(),
            });
        }

        self.board.set_cell(mov.row(), mov.col(), mark);

        if let Some(winner) = self.board.winner() {
            self.finish(GameOutcome::Win(winner));
        } else if self.board.is_full() {
            self.finish(GameOutcome::Draw);
        } else {
            self.side_to_move = self.side_to_move.opposite();
        }
        Ok(())
    }

    fn finish(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(mark) if mark == self.human_mark => self.stats.record_human_win(),
            GameOutcome::Win(_) => self.stats.record_ai_win(),
            GameOutcome::Draw => self.stats.record_draw(),
        }
        self.state = SessionState::Finished(outcome);
    }

    /// Starts the next game of the match: fresh board, X to move.
    ///
    /// Match tallies are preserved; mark assignment is unchanged.
    pub fn reset(&mut self) {
        self.board = Board::EMPTY;
        self.side_to_move = Mark::X;
        self.state = SessionState::InProgress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_always_opens() {
        let session = GameSession::new(Mark::O);
        assert_eq!(session.side_to_move(), Mark::X);
        assert_eq!(session.human_mark(), Mark::O);
        assert_eq!(session.ai_mark(), Mark::X);
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new(Mark::X);
        session.play_move(Mark::X, Move::new(0, 0)).unwrap();
        assert_eq!(session.side_to_move(), Mark::O);
        session.play_move(Mark::O, Move::new(1, 1)).unwrap();
        assert_eq!(session.side_to_move(), Mark::X);
    }

    #[test]
    fn test_rejects_out_of_turn_move() {
        let mut session = GameSession::new(Mark::X);
        let err = session.play_move(Mark::O, Move::new(0, 0)).unwrap_err();
        assert!(matches!(err, MoveError::OutOfTurn { mark: Mark::O }));
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut session = GameSession::new(Mark::X);
        session.play_move(Mark::X, Move::new(0, 0)).unwrap();
        let err = session.play_move(Mark::O, Move::new(0, 0)).unwrap_err();
        assert!(matches!(err, MoveError::CellOccupied { row: 0, col: 0 }));
    }

    #[test]
    fn test_win_finishes_game_and_tallies() {
        let mut session = GameSession::new(Mark::X);
        session.play_move(Mark::X, Move::new(0, 0)).unwrap();
        session.play_move(Mark::O, Move::new(1, 0)).unwrap();
        session.play_move(Mark::X, Move::new(0, 1)).unwrap();
        session.play_move(Mark::O, Move::new(1, 1)).unwrap();
        session.play_move(Mark::X, Move::new(0, 2)).unwrap();

        assert_eq!(
            *session.state(),
            SessionState::Finished(GameOutcome::Win(Mark::X))
        );
        assert_eq!(session.stats().human_wins(), 1);
        assert_eq!(session.stats().games_played(), 1);

        let err = session.play_move(Mark::O, Move::new(2, 2)).unwrap_err();
        assert!(matches!(err, MoveError::GameFinished));
    }

    #[test]
    fn test_draw_is_tallied() {
        let mut session = GameSession::new(Mark::O);
        // X O X / X O O / O X X filled in alternating turn order.
        let moves = [
            (Mark::X, 0, 0),
            (Mark::O, 0, 1),
            (Mark::X, 0, 2),
            (Mark::O, 1, 1),
            (Mark::X, 1, 0),
            (Mark::O, 1, 2),
            (Mark::X, 2, 1),
            (Mark::O, 2, 0),
            (Mark::X, 2, 2),
        ];
        for (mark, row, col) in moves {
            session.play_move(mark, Move::new(row, col)).unwrap();
        }
        assert_eq!(*session.state(), SessionState::Finished(GameOutcome::Draw));
        assert_eq!(session.stats().draws(), 1);
    }

    #[test]
    fn test_reset_keeps_tallies() {
        let mut session = GameSession::new(Mark::X);
        session.play_move(Mark::X, Move::new(0, 0)).unwrap();
        session.play_move(Mark::O, Move::new(1, 0)).unwrap();
        session.play_move(Mark::X, Move::new(0, 1)).unwrap();
        session.play_move(Mark::O, Move::new(1, 1)).unwrap();
        session.play_move(Mark::X, Move::new(0, 2)).unwrap();
        assert_eq!(session.stats().human_wins(), 1);

        session.reset();
        assert!(session.state().is_in_progress());
        assert_eq!(session.side_to_move(), Mark::X);
        assert_eq!(session.board().legal_moves().len(), 9);
        assert_eq!(session.stats().human_wins(), 1);
    }
}
