//! Configuration options for the equity estimators.
//!
//! This module provides the configuration struct that controls how many
//! Monte Carlo trials are run, how they are seeded and how they are spread
//! across worker threads, plus the statistics reported after a run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of Monte Carlo trials per estimate.
pub const DEFAULT_TRIALS: u64 = 40_000;

/// Default number of trials per independently seeded batch.
pub const DEFAULT_BATCH_SIZE: u64 = 1_000;

/// Configuration for the equity estimators.
///
/// # Example
/// ```
/// use holdem_equity::equity::EquityConfig;
///
/// let config = EquityConfig::default().with_trials(10_000).with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityConfig {
    /// Number of Monte Carlo trials.
    pub trials: u64,

    /// Trials per batch.
    ///
    /// Each batch draws from its own random source seeded from `seed` and
    /// the batch index, so a seeded estimate does not depend on how many
    /// threads ran it.
    pub batch_size: u64,

    /// Number of worker threads.
    ///
    /// `Some(0)` or `Some(1)` runs on the calling thread. `None` uses the
    /// global rayon pool.
    pub num_threads: Option<usize>,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Log the wall-clock time of the run at info level.
    pub report_timing: bool,

    /// Draw a progress bar while batches run.
    pub show_progress: bool,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            batch_size: DEFAULT_BATCH_SIZE,
            num_threads: None,
            seed: None,
            report_timing: false,
            show_progress: false,
        }
    }
}

impl EquityConfig {
    /// Create a new EquityConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-threaded configuration with a fixed seed.
    pub fn sequential(seed: u64) -> Self {
        Self {
            num_threads: Some(1),
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Builder method: set the number of trials.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Builder method: set trials per batch.
    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: log elapsed time after each run.
    pub fn with_timing(mut self, enable: bool) -> Self {
        self.report_timing = enable;
        self
    }

    /// Builder method: show a progress bar.
    pub fn with_progress(mut self, enable: bool) -> Self {
        self.show_progress = enable;
        self
    }

    /// Whether trials run on the calling thread.
    pub fn is_sequential(&self) -> bool {
        matches!(self.num_threads, Some(0) | Some(1))
    }

    /// Number of batches needed to cover `trials`.
    pub fn num_batches(&self) -> u64 {
        self.trials.div_ceil(self.batch_size.max(1))
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        Ok(())
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Statistics for one estimator run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquityStats {
    /// Trials completed.
    pub trials: u64,

    /// Batches completed.
    pub batches: u64,

    /// Total wall-clock time (in seconds).
    pub elapsed_seconds: f64,

    /// Trials per second.
    pub trials_per_second: f64,
}

impl EquityStats {
    /// Create stats for a finished run.
    pub fn new(trials: u64, batches: u64, elapsed_seconds: f64) -> Self {
        let mut stats = Self {
            trials,
            batches,
            elapsed_seconds,
            trials_per_second: 0.0,
        };
        stats.update_rate();
        stats
    }

    /// Update trials per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.trials_per_second = self.trials as f64 / self.elapsed_seconds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EquityConfig::default();
        assert_eq!(config.trials, 40_000);
        assert_eq!(config.num_batches(), 40);
        assert!(!config.is_sequential());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_and_batches() {
        let config = EquityConfig::new()
            .with_trials(2_500)
            .with_batch_size(1_000)
            .with_threads(1)
            .with_seed(9);
        assert_eq!(config.num_batches(), 3);
        assert!(config.is_sequential());
        assert_eq!(config.seed, Some(9));
        assert!(EquityConfig::sequential(3).is_sequential());
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            EquityConfig::default().with_trials(0).validate(),
            Err(ConfigError::ZeroTrials)
        );
        assert_eq!(
            EquityConfig::default().with_batch_size(0).validate(),
            Err(ConfigError::ZeroBatchSize)
        );
    }

    #[test]
    fn test_json_loading() {
        let config = EquityConfig::from_json_str(r#"{"trials": 500, "seed": 11}"#).unwrap();
        assert_eq!(config.trials, 500);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);

        assert!(matches!(
            EquityConfig::from_json_str("{"),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            EquityConfig::from_json_str(r#"{"trials": 0}"#),
            Err(ConfigError::ZeroTrials)
        );
        assert!(matches!(
            EquityConfig::from_json_file("/nonexistent/equity.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_stats_rate() {
        let stats = EquityStats::new(1_000, 1, 0.5);
        assert_eq!(stats.trials_per_second, 2_000.0);
        assert_eq!(EquityStats::new(10, 1, 0.0).trials_per_second, 0.0);
    }
}
