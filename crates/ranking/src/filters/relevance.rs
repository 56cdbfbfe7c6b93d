//! Filter to drop candidates with no topical relevance.

use crate::traits::Filter;
use crate::types::{ScoredCandidate, UserContext};
use anyhow::Result;

/// Keeps only candidates scoring strictly above `min_score`.
///
/// With the default threshold of 0 this removes every candidate that
/// shares no tag with the profile; a zero score is not a recommendation.
pub struct RelevanceFilter {
    min_score: f64,
}

impl RelevanceFilter {
    /// Create a new RelevanceFilter.
    ///
    /// # Arguments
    /// * `min_score` - Candidates must score strictly above this value
    pub fn new(min_score: f64) -> Self {
        Self { min_score }
    }
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Filter for RelevanceFilter {
    fn name(&self) -> &str {
        "RelevanceFilter"
    }

    fn apply(
        &self,
        candidates: Vec<ScoredCandidate>,
        _context: &UserContext,
    ) -> Result<Vec<ScoredCandidate>> {
        Ok(candidates
            .into_iter()
            .filter(|candidate| candidate.score > self.min_score)
            .collect())
    }
}
