//! # showdown
//!
//! Parse five card poker hand notation, classify each hand into the poker
//! categories it satisfies and compare two hands with cascading tie breaks.
//!
//! ## Core
//!
//! Everything needed to go from text to a result lives in [`core`]:
//! [`core::Card`], [`core::Hand`], the [`core::Classifiable`] trait and the
//! comparison functions.
//!
//! ```
//! use showdown::core::{Category, Hand, compare_hands};
//! use std::cmp::Ordering;
//!
//! let royal: Hand = "AS KS QS JS TS".parse().unwrap();
//! let junk: Hand = "AS 3D 4C 7H TC".parse().unwrap();
//!
//! assert_eq!(Category::StraightFlush, royal.strength().category);
//! assert_eq!(Ordering::Greater, compare_hands(&royal, &junk));
//! ```
//!
//! ## Scoring
//!
//! With the `scoring` feature (on by default) the [`scoring`] module can tally
//! the results of many head to head pairs, optionally in parallel.
//!
//! ```
//! # #[cfg(feature = "scoring")]
//! # {
//! use showdown::scoring::BatchScorerBuilder;
//!
//! let scorer = BatchScorerBuilder::new().build().unwrap();
//! let tally = scorer
//!     .score_text("5H 5C 6S 7S KD 2C 3S 8S 8D TD\n5D 8C 9S JS AC 2C 5C 7D 8S QH")
//!     .unwrap();
//! assert_eq!(1, tally.wins_a);
//! assert_eq!(1, tally.wins_b);
//! # }
//! ```

/// Cards, hands, classification and comparison.
pub mod core;

/// Tallying many hand pairs.
#[cfg(feature = "scoring")]
pub mod scoring;
