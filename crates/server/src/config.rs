//! Service configuration.

use std::path::PathBuf;
use std::time::Duration;

use ranking::ScoringWeights;

use crate::error::RecommendError;

/// Smallest accepted `limit`
pub const MIN_LIMIT: i64 = 1;
/// Largest accepted `limit`
pub const MAX_LIMIT: i64 = 100;
/// `limit` used when the caller doesn't pass one
pub const DEFAULT_LIMIT: i64 = 20;

/// Default per-request deadline
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(2);

/// Configuration for the recommendation service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding movies.json, ratings.json and watchlist.json
    pub data_dir: PathBuf,
    /// Upper bound on wall-clock time for one request
    pub deadline: Duration,
    /// Scoring weights; fixed for the lifetime of the service
    pub weights: ScoringWeights,
}

impl Config {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/sample"),
            deadline: DEFAULT_DEADLINE,
            weights: ScoringWeights::default(),
        }
    }
}

/// A validated number of recommendations to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(usize);

impl Limit {
    /// Accepts values in `MIN_LIMIT..=MAX_LIMIT`
    pub fn new(value: i64) -> Result<Self, RecommendError> {
        if (MIN_LIMIT..=MAX_LIMIT).contains(&value) {
            Ok(Self(value as usize))
        } else {
            Err(RecommendError::InvalidLimit { limit: value })
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT as usize)
    }
}
