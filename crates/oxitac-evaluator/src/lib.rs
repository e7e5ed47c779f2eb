//! Position evaluators for the tic-tac-toe search engine.
//!
//! This crate implements the scoring side of the AI: given a board and a
//! perspective mark, an evaluator produces an integer score where positive
//! values favor the perspective. Two implementations exist:
//!
//! 1. **Classical** ([`classical`]) - A handcrafted positional heuristic
//!    over the center, corners and the 8 winning lines.
//! 2. **Neural** ([`neural`]) - A small feed-forward network over 6
//!    extracted board features ([`feature`]), trained offline by the
//!    `oxitac-training` crate.
//!
//! # Architecture
//!
//! ```text
//! Search Engine (oxitac-search)
//!     ↓ scores leaves with
//! Evaluator (Classical or Neural)
//!     ↓ Neural additionally uses
//! FeatureVector (fixed 6-feature board summary)
//! ```
//!
//! The search engine depends only on the [`Evaluator`] trait, never on a
//! concrete implementation. Which implementation runs is an explicit
//! configuration value ([`EvaluatorKind`]) resolved per call, not hidden
//! process state; an untrained neural model resolves to the classical
//! fallback (see [`EvaluatorKind::resolve`]).
//!
//! # Score Range
//!
//! Both evaluators share one scale: terminal wins are ±1000 for the
//! classical heuristic, and the neural output in (−1, 1) is multiplied by
//! 1000 so the two are interchangeable under the same search window. The
//! weights behind both scales are empirically chosen and are kept exactly
//! as they are for compatibility.

use std::fmt;

use oxitac_engine::{Board, Mark};
use serde::{Deserialize, Serialize};

pub use self::{
    classical::ClassicalEvaluator,
    feature::{FEATURE_COUNT, FeatureVector, REFERENCE_MARK, normalize_features},
    neural::{HIDDEN_UNITS, NeuralEvaluator, NeuralParams},
};

pub mod classical;
pub mod feature;
pub mod neural;

/// Scores board positions from a given perspective.
///
/// Implementations must be pure: identical inputs always yield the
/// identical score. Positive scores favor `perspective`.
pub trait Evaluator: fmt::Debug + Send + Sync {
    /// Evaluates `board` from `perspective`'s point of view.
    fn score(&self, board: &Board, perspective: Mark) -> i32;
}

/// Which evaluator a caller wants the search to use.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    #[default]
    Classical,
    Neural,
}

impl EvaluatorKind {
    /// Resolves the selection to a concrete evaluator handle.
    ///
    /// [`EvaluatorKind::Neural`] falls back to the classical evaluator
    /// while the neural model is untrained, so the search never queries a
    /// model whose parameters are meaningless.
    #[must_use]
    pub fn resolve<'a>(
        self,
        classical: &'a ClassicalEvaluator,
        neural: &'a NeuralEvaluator,
    ) -> &'a dyn Evaluator {
        match self {
            EvaluatorKind::Neural if neural.is_trained() => neural,
            _ => classical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "classical".parse::<EvaluatorKind>().unwrap(),
            EvaluatorKind::Classical
        );
        assert_eq!(
            "Neural".parse::<EvaluatorKind>().unwrap(),
            EvaluatorKind::Neural
        );
        assert!("perceptron".parse::<EvaluatorKind>().is_err());
    }

    #[test]
    fn test_untrained_neural_resolves_to_classical() {
        let classical = ClassicalEvaluator;
        let neural = NeuralEvaluator::new();
        assert!(!neural.is_trained());

        let board = Board::EMPTY;
        let resolved = EvaluatorKind::Neural.resolve(&classical, &neural);
        assert_eq!(
            resolved.score(&board, Mark::X),
            classical.score(&board, Mark::X)
        );
    }

    #[test]
    fn test_trained_neural_resolves_to_neural() {
        let classical = ClassicalEvaluator;
        let mut neural = NeuralEvaluator::new();
        neural.install(NeuralParams::zeroed());

        let resolved = EvaluatorKind::Neural.resolve(&classical, &neural);
        // Zeroed parameters give a 0 forward pass; the classical evaluator
        // scores the same (empty) board differently once a mark lands.
        let mut board = Board::EMPTY;
        board.set_cell(1, 1, Mark::X);
        assert_eq!(resolved.score(&board, Mark::X), 0);
        assert_ne!(classical.score(&board, Mark::X), 0);
    }
}
