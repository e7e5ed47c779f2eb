//! One-hidden-layer tanh network over the extracted board features.
//!
//! The network consumes the 6 normalized features of [`crate::feature`],
//! runs them through 10 tanh hidden units and a tanh output unit, and
//! yields a value in (−1, 1) measured for the fixed reference mark. The
//! evaluator scales that value by 1000 so it overlaps the classical
//! heuristic's range, flipping the sign when asked to score for the
//! non-reference side.
//!
//! Parameters are produced offline by the `oxitac-training` crate and
//! installed here once training completes; the evaluator itself never
//! mutates them. An untrained evaluator must not be queried: callers
//! check [`NeuralEvaluator::is_trained`] and fall back to the classical
//! heuristic (see [`crate::EvaluatorKind::resolve`]).

use oxitac_engine::{Board, Mark};
use serde::{Deserialize, Serialize};

use crate::{
    Evaluator,
    feature::{FEATURE_COUNT, FeatureVector, REFERENCE_MARK},
};

/// Number of hidden tanh units.
pub const HIDDEN_UNITS: usize = 10;

/// Scale mapping the (−1, 1) network output onto the classical range.
const OUTPUT_SCALE: f64 = 1000.0;

/// Trainable parameters of the network.
///
/// Mutated only by the trainer; read-only once installed into a
/// [`NeuralEvaluator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuralParams {
    /// Input-to-hidden weights, one row per hidden unit.
    pub hidden_weights: [[f64; FEATURE_COUNT]; HIDDEN_UNITS],
    /// Hidden unit biases.
    pub hidden_bias: [f64; HIDDEN_UNITS],
    /// Hidden-to-output weights.
    pub output_weights: [f64; HIDDEN_UNITS],
    /// Output unit bias.
    pub output_bias: f64,
}

impl NeuralParams {
    /// All-zero parameters, the state before any training.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            hidden_weights: [[0.0; FEATURE_COUNT]; HIDDEN_UNITS],
            hidden_bias: [0.0; HIDDEN_UNITS],
            output_weights: [0.0; HIDDEN_UNITS],
            output_bias: 0.0,
        }
    }

    /// Computes the hidden layer activations for a normalized input.
    #[must_use]
    pub fn hidden_activations(&self, input: &[f64; FEATURE_COUNT]) -> [f64; HIDDEN_UNITS] {
        let mut hidden = [0.0; HIDDEN_UNITS];
        for (activation, (weights, bias)) in hidden
            .iter_mut()
            .zip(self.hidden_weights.iter().zip(self.hidden_bias))
        {
            let mut z = bias;
            for (weight, x) in weights.iter().zip(input) {
                z += weight * x;
            }
            *activation = z.tanh();
        }
        hidden
    }

    /// Computes the output unit from hidden activations.
    #[must_use]
    pub fn output_from_hidden(&self, hidden: &[f64; HIDDEN_UNITS]) -> f64 {
        let mut z = self.output_bias;
        for (weight, activation) in self.output_weights.iter().zip(hidden) {
            z += weight * activation;
        }
        z.tanh()
    }

    /// Full forward pass, yielding a value in (−1, 1).
    #[must_use]
    pub fn forward(&self, input: &[f64; FEATURE_COUNT]) -> f64 {
        self.output_from_hidden(&self.hidden_activations(input))
    }
}

/// Evaluator backed by the trained network.
#[derive(Debug, Clone)]
pub struct NeuralEvaluator {
    params: NeuralParams,
    trained: bool,
}

impl Default for NeuralEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl NeuralEvaluator {
    /// Creates an untrained evaluator with zeroed parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            params: NeuralParams::zeroed(),
            trained: false,
        }
    }

    /// Whether a completed training run has installed parameters.
    ///
    /// Callers must not query [`Evaluator::score`] while this is `false`.
    #[must_use]
    pub const fn is_trained(&self) -> bool {
        self.trained
    }

    /// Installs the parameters of a completed training run.
    pub fn install(&mut self, params: NeuralParams) {
        self.params = params;
        self.trained = true;
    }

    #[must_use]
    pub const fn params(&self) -> &NeuralParams {
        &self.params
    }
}

impl Evaluator for NeuralEvaluator {
    #[expect(clippy::cast_possible_truncation)]
    fn score(&self, board: &Board, perspective: Mark) -> i32 {
        debug_assert!(
            self.trained,
            "neural evaluator queried before training completed"
        );
        let input = FeatureVector::extract(board).normalized();
        let output = self.params.forward(&input);
        // Features are measured for the reference mark; scoring for the
        // other side is the same value with the sign flipped.
        let signed = if perspective == REFERENCE_MARK {
            output
        } else {
            -output
        };
        (signed * OUTPUT_SCALE) as i32
    }
}
