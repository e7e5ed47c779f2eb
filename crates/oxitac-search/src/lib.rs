//! Alpha-beta minimax move selection.
//!
//! This crate implements the decision side of the AI: given a board, a
//! fixed role assignment and a depth bound, it searches the game tree and
//! returns the best move for the AI side.
//!
//! # Role Assignment
//!
//! The roles are fixed by caller convention, independent of which side
//! holds which mark: the AI side is the **minimizer** and the human side is
//! the **maximizer**. Scores always measure the position from the
//! maximizer's perspective, so the AI picks the root move with the lowest
//! score. This is deliberately not symmetric minimax over whoever's turn it
//! is; the caller decides the roles once and the whole tree is scored
//! against that single reference.
//!
//! # Determinism
//!
//! Moves are generated in row-major order and a later root move replaces
//! the incumbent only when strictly better, so ties always resolve to the
//! lowest row-major index. Pruning is value-preserving: for a fixed depth
//! and evaluator, the pruned result equals the full-width minimax result.
//!
//! # Ownership
//!
//! Each recursive step copies the (tiny, `Copy`) board and mutates only
//! its own copy. No state is shared between branches, which keeps the
//! search re-entrant and would make per-branch parallelization safe even
//! though the engine itself stays single-threaded.

pub use self::{difficulty::*, engine::*};

mod difficulty;
mod engine;
