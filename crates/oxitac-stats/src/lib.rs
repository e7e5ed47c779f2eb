//! Statistical utilities for the Oxitac project.
//!
//! Currently this crate provides descriptive statistics
//! ([`descriptive::DescriptiveStats`]), used to summarize training-loss
//! trajectories reported by the trainer.
//!
//! # Example
//!
//! ```
//! use oxitac_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```

pub mod descriptive;
