use super::config::ScorerConfig;
use super::error::Result;
use super::runner::BatchScorer;

/// Builder for constructing BatchScorer instances
///
/// # Example
///
/// ```
/// use showdown::scoring::BatchScorerBuilder;
///
/// let scorer = BatchScorerBuilder::new()
///     .parallel(false)
///     .skip_blank_lines(true)
///     .build()
///     .unwrap();
/// assert!(!scorer.config().parallel);
/// ```
#[derive(Debug, Default)]
pub struct BatchScorerBuilder {
    parallel: Option<bool>,
    parallel_threshold: Option<usize>,
    skip_blank_lines: Option<bool>,
}

impl BatchScorerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow splitting large batches across threads
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set the smallest batch that will be split across threads
    pub fn parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = Some(parallel_threshold);
        self
    }

    /// Skip blank lines when scoring text
    pub fn skip_blank_lines(mut self, skip_blank_lines: bool) -> Self {
        self.skip_blank_lines = Some(skip_blank_lines);
        self
    }

    /// Start from an existing configuration; values set on the builder
    /// still win.
    pub fn config(self, config: ScorerConfig) -> Self {
        Self {
            parallel: self.parallel.or(Some(config.parallel)),
            parallel_threshold: self.parallel_threshold.or(Some(config.parallel_threshold)),
            skip_blank_lines: self.skip_blank_lines.or(Some(config.skip_blank_lines)),
        }
    }

    /// Build the BatchScorer
    pub fn build(self) -> Result<BatchScorer> {
        let defaults = ScorerConfig::default();
        let config = ScorerConfig {
            parallel: self.parallel.unwrap_or(defaults.parallel),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            skip_blank_lines: self.skip_blank_lines.unwrap_or(defaults.skip_blank_lines),
        };

        config.validate()?;

        Ok(BatchScorer::new(config))
    }
}
