pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[display("it is not {mark}'s turn")]
    OutOfTurn { mark: Mark },
    #[display("game is already finished")]
    GameFinished,
}
