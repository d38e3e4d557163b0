use super::error::{Result, ScoringError};

/// Configuration for scoring batches of hand pairs
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScorerConfig {
    /// Fan work out over the rayon thread pool when the `parallel` feature
    /// is compiled in. Ignored otherwise.
    pub parallel: bool,
    /// Batches smaller than this are always scored on the calling thread.
    pub parallel_threshold: usize,
    /// Skip lines that are empty or only whitespace instead of reporting
    /// them as malformed.
    pub skip_blank_lines: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 1024,
            skip_blank_lines: true,
        }
    }
}

impl ScorerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the scorer configuration
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(ScoringError::InvalidConfig(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Should a batch of `len` pairs be split across threads?
    pub fn use_parallel(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && len >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScorerConfig::default();
        assert!(config.parallel);
        assert_eq!(1024, config.parallel_threshold);
        assert!(config.skip_blank_lines);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_threshold() {
        let config = ScorerConfig {
            parallel_threshold: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScoringError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_small_batches_stay_sequential() {
        let config = ScorerConfig {
            parallel_threshold: 10,
            ..Default::default()
        };
        assert!(!config.use_parallel(9));
        assert_eq!(cfg!(feature = "parallel"), config.use_parallel(10));
    }

    #[test]
    fn test_parallel_off() {
        let config = ScorerConfig {
            parallel: false,
            parallel_threshold: 1,
            ..Default::default()
        };
        assert!(!config.use_parallel(1_000_000));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ScorerConfig = serde_json::from_str(r#"{"parallel": false}"#).unwrap();
        assert!(!config.parallel);
        assert_eq!(1024, config.parallel_threshold);
        assert!(config.skip_blank_lines);
    }
}
