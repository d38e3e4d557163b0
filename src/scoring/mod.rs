//! Batch scoring of head to head hand pairs.
//!
//! A [`BatchScorer`] takes pairs of hands, or lines of two hand notation,
//! and counts how often the first hand wins, the second hand wins, or they
//! tie. Large batches are spread over the rayon pool when the `parallel`
//! feature is enabled.
//!
//! # Example
//!
//! ```
//! use showdown::scoring::BatchScorerBuilder;
//!
//! let scorer = BatchScorerBuilder::new()
//!     .parallel_threshold(4096)
//!     .build()
//!     .unwrap();
//!
//! let lines = vec![
//!     "5H 5C 6S 7S KD 2C 3S 8S 8D TD",
//!     "4D 6S 9H QH QC 3D 6D 7H QD QS",
//! ];
//! let tally = scorer.score_lines(&lines).unwrap();
//! assert_eq!(1, tally.wins_a);
//! assert_eq!(1, tally.wins_b);
//! assert_eq!(lines.len(), tally.total());
//! ```

mod builder;
mod config;
mod error;
mod runner;

pub use builder::BatchScorerBuilder;
pub use config::ScorerConfig;
pub use error::{Result, ScoringError};
pub use runner::BatchScorer;
