use tracing::event;

use crate::core::{compare_hands, parse_two_hands, Hand, Tally};

use super::config::ScorerConfig;
use super::error::{Result, ScoringError};

/// Scores batches of head to head hand pairs.
///
/// Every pair is independent, so large batches can be spread over the
/// rayon pool: each worker folds into its own `Tally` and the partial
/// tallies are merged at the end.
#[derive(Debug, Clone)]
pub struct BatchScorer {
    config: ScorerConfig,
}

impl BatchScorer {
    /// Create a new BatchScorer (internal - use BatchScorerBuilder instead)
    pub(crate) fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Get the scorer configuration
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Compare every pair and count who won.
    pub fn score_pairs(&self, pairs: &[(Hand, Hand)]) -> Tally {
        let parallel = self.config.use_parallel(pairs.len());
        event!(
            tracing::Level::DEBUG,
            num_pairs = pairs.len(),
            parallel,
            "Scoring hand pairs"
        );

        let tally = if parallel {
            score_parallel(pairs)
        } else {
            score_sequential(pairs)
        };

        event!(
            tracing::Level::INFO,
            wins_a = tally.wins_a,
            wins_b = tally.wins_b,
            ties = tally.ties,
            "Finished scoring batch"
        );
        tally
    }

    /// Parse each line as two hands and score them all.
    ///
    /// # Errors
    ///
    /// `ScoringError::Notation` for the first line that isn't valid two
    /// hand notation. Blank lines are only an error when
    /// `skip_blank_lines` is off. Nothing is scored if any line fails.
    pub fn score_lines<I, S>(&self, lines: I) -> Result<Tally>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pairs = Vec::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if self.config.skip_blank_lines && line.trim().is_empty() {
                event!(tracing::Level::TRACE, line = idx + 1, "Skipping blank line");
                continue;
            }
            let pair = parse_two_hands(line).map_err(|source| {
                event!(
                    tracing::Level::WARN,
                    line = idx + 1,
                    error = %source,
                    "Invalid hand notation"
                );
                ScoringError::Notation {
                    line: idx + 1,
                    source,
                }
            })?;
            pairs.push(pair);
        }

        event!(
            tracing::Level::INFO,
            num_pairs = pairs.len(),
            "Parsed hand notation"
        );
        Ok(self.score_pairs(&pairs))
    }

    /// Score newline separated text, one pair per line.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::scoring::BatchScorerBuilder;
    ///
    /// let text = "\
    /// 5H 5C 6S 7S KD 2C 3S 8S 8D TD
    /// 2D 9C AS AH AC 3D 6D 7D TD QD
    /// ";
    /// let scorer = BatchScorerBuilder::new().build().unwrap();
    /// let tally = scorer.score_text(text).unwrap();
    /// assert_eq!(2, tally.wins_b);
    /// ```
    pub fn score_text(&self, text: &str) -> Result<Tally> {
        self.score_lines(text.lines())
    }
}

fn score_sequential(pairs: &[(Hand, Hand)]) -> Tally {
    pairs
        .iter()
        .map(|(a, b)| {
            let outcome = compare_hands(a, b);
            event!(tracing::Level::TRACE, %a, %b, ?outcome, "Scored pair");
            outcome
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn score_parallel(pairs: &[(Hand, Hand)]) -> Tally {
    use rayon::prelude::*;

    pairs
        .par_iter()
        .fold(Tally::default, |mut tally, (a, b)| {
            tally.record(compare_hands(a, b));
            tally
        })
        .reduce(Tally::default, Tally::merge)
}

#[cfg(not(feature = "parallel"))]
fn score_parallel(pairs: &[(Hand, Hand)]) -> Tally {
    score_sequential(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, NotationError};
    use crate::scoring::BatchScorerBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EULER_SAMPLE: &str = "\
5H 5C 6S 7S KD 2C 3S 8S 8D TD
5D 8C 9S JS AC 2C 5C 7D 8S QH
2D 9C AS AH AC 3D 6D 7D TD QD
4D 6S 9H QH QC 3D 6D 7H QD QS
2H 2D 4C 4D 4S 3C 3D 3S 9S 9D
";

    fn random_pairs(n: usize, seed: u64) -> Vec<(Hand, Hand)> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| Deck::shuffled(&mut rng).deal_pair().unwrap())
            .collect()
    }

    #[test_log::test]
    fn test_euler_sample() {
        let scorer = BatchScorerBuilder::new().build().unwrap();
        let tally = scorer.score_text(EULER_SAMPLE).unwrap();
        // Full houses break ties on the highest card, so nines full beats
        // fours full in the last pair.
        assert_eq!(
            Tally {
                wins_a: 2,
                wins_b: 3,
                ties: 0
            },
            tally
        );
    }

    #[test_log::test]
    fn test_bad_line_reports_line_number() {
        let scorer = BatchScorerBuilder::new().build().unwrap();
        let text = "5H 5C 6S 7S KD 2C 3S 8S 8D TD\n5D 8C 9S JS AC 2C 5C 7D 8S QX\n";
        let err = scorer.score_text(text).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::Notation {
                line: 2,
                source: NotationError::InvalidHand(_)
            }
        ));
    }

    #[test_log::test]
    fn test_blank_lines() {
        let text = "5H 5C 6S 7S KD 2C 3S 8S 8D TD\n\n   \n5D 8C 9S JS AC 2C 5C 7D 8S QH\n";

        let skipping = BatchScorerBuilder::new().build().unwrap();
        assert_eq!(2, skipping.score_text(text).unwrap().total());

        let strict = BatchScorerBuilder::new()
            .skip_blank_lines(false)
            .build()
            .unwrap();
        assert_eq!(
            Err(ScoringError::Notation {
                line: 2,
                source: NotationError::InvalidPairLength(0)
            }),
            strict.score_text(text)
        );
    }

    #[test_log::test]
    fn test_total_matches_input_size() {
        let pairs = random_pairs(500, 1);
        let scorer = BatchScorerBuilder::new().build().unwrap();
        assert_eq!(pairs.len(), scorer.score_pairs(&pairs).total());
    }

    #[test_log::test]
    fn test_parallel_matches_sequential() {
        let pairs = random_pairs(2_000, 99);
        let sequential = BatchScorerBuilder::new()
            .parallel(false)
            .build()
            .unwrap()
            .score_pairs(&pairs);
        let parallel = BatchScorerBuilder::new()
            .parallel(true)
            .parallel_threshold(1)
            .build()
            .unwrap()
            .score_pairs(&pairs);
        assert_eq!(sequential, parallel);
        assert_eq!(crate::core::score_batch(&pairs), sequential);
    }

    #[test]
    fn test_empty_batch() {
        let scorer = BatchScorerBuilder::new().build().unwrap();
        assert_eq!(Tally::default(), scorer.score_pairs(&[]));
        assert_eq!(Tally::default(), scorer.score_text("").unwrap());
    }
}
