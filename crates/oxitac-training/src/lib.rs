//! Offline training for the neural evaluator.
//!
//! This crate fits the parameters of the one-hidden-layer network in
//! `oxitac-evaluator` from a stream of labeled feature samples, using
//! plain per-sample stochastic gradient descent written from scratch.
//!
//! # How Training Works
//!
//! 1. **Normalize** - Each sample's 6 features pass through the same fixed
//!    divisors the evaluator applies at inference time
//! 2. **Shuffle** - Sample order is permuted by a seeded Fisher–Yates
//!    shuffle for reproducibility
//! 3. **Split** - A contiguous training prefix and test suffix
//! 4. **Descend** - For each epoch, each training sample in the fixed
//!    order gets a forward pass, squared-error loss against its ±1 label
//!    and an immediate gradient update through both tanh layers
//! 5. **Evaluate** - Test accuracy over sign agreement of the held-out
//!    suffix
//!
//! # Architecture
//!
//! ```text
//! Samples (external dataset loader, already validated)
//!     ↓ consumed by
//! Trainer (seeded shuffle + SGD)
//!     ↓ produces
//! NeuralParams (oxitac-evaluator)
//!     ↓ installed into
//! NeuralEvaluator (queried by oxitac-search)
//! ```
//!
//! # Determinism
//!
//! Training is deterministic end to end: identical (seed, samples, ratio,
//! epochs, learning rate) inputs produce bit-identical parameter
//! trajectories and the identical reported accuracy. The only randomness
//! is the seeded initial weight draw and the seeded shuffle; there is no
//! parallelism and no batching, so each update is visible to the very
//! next sample.
//!
//! # Example
//!
//! ```rust,ignore
//! use oxitac_evaluator::NeuralEvaluator;
//! use oxitac_training::{Trainer, TrainerConfig};
//!
//! let samples = /* supplied by the dataset loader */;
//! let mut evaluator = NeuralEvaluator::new();
//!
//! let trainer = Trainer::new(TrainerConfig::default());
//! let report = trainer.fit(&samples, &mut evaluator)?;
//!
//! assert!(evaluator.is_trained());
//! println!("test accuracy: {:.1}%", report.test_accuracy() * 100.0);
//! ```

pub use self::{sample::*, trainer::*};

mod sample;
mod trainer;
