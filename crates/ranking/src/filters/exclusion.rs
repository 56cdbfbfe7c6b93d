//! Filter to remove movies the user has already rated or watchlisted.
//!
//! Runs before scoring, so excluded movies never cost a score computation.

use crate::traits::Filter;
use crate::types::{ScoredCandidate, UserContext};
use anyhow::Result;

/// Removes candidates in the user's exclusion set.
///
/// ## Algorithm
/// Uses the HashSet behind UserContext.exclusions for O(1) lookups.
pub struct ExclusionFilter;

impl Filter for ExclusionFilter {
    fn name(&self) -> &str {
        "ExclusionFilter"
    }

    fn apply(
        &self,
        candidates: Vec<ScoredCandidate>,
        context: &UserContext,
    ) -> Result<Vec<ScoredCandidate>> {
        let filtered: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|candidate| !context.exclusions.contains(candidate.movie_id()))
            .collect();
        Ok(filtered)
    }
}
