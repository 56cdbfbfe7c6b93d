//! Errors surfaced by the recommendation service.

use std::time::Duration;

use catalog::CatalogError;
use ranking::RankingError;
use thiserror::Error;

use crate::config::{MAX_LIMIT, MIN_LIMIT};

/// Errors that can occur while serving a recommendation request
#[derive(Error, Debug)]
pub enum RecommendError {
    /// Caller passed a `limit` outside the accepted range. Client error.
    #[error("Limit must be between {min} and {max}, got {limit}", min = MIN_LIMIT, max = MAX_LIMIT)]
    InvalidLimit { limit: i64 },

    /// A store read failed; the request is aborted, not retried
    #[error("Store read failed: {0}")]
    Store(#[from] CatalogError),

    /// The request ran past its deadline
    #[error("Recommendation timed out after {deadline:?}")]
    Timeout { deadline: Duration },

    /// The scoring scan was cancelled
    #[error("Recommendation cancelled: {0}")]
    Cancelled(#[from] RankingError),

    /// A filter in the pipeline failed
    #[error("Filter pipeline failed: {0}")]
    Pipeline(#[from] anyhow::Error),

    /// The blocking worker panicked or was aborted
    #[error("Recommendation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl RecommendError {
    /// True for errors caused by the caller's input rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidLimit { .. })
    }
}
