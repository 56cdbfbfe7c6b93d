//! The FilterPipeline chains multiple filters.
//!
//! Filters are added with a builder and applied in insertion order.

use crate::traits::Filter;
use crate::types::{ScoredCandidate, UserContext};
use anyhow::Result;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ExclusionFilter)
///     .add_filter(RelevanceFilter::default());
///
/// let filtered = pipeline.apply(candidates, &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Logs each filter's name with its input and output counts. Stops at
    /// the first filter that fails.
    pub fn apply(
        &self,
        candidates: Vec<ScoredCandidate>,
        context: &UserContext,
    ) -> Result<Vec<ScoredCandidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            let input_count = current.len();
            current = filter.apply(current, context)?;
            tracing::debug!(
                "Filter applied: {} ({} -> {} candidates)",
                filter.name(),
                input_count,
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{ExclusionFilter, RelevanceFilter};
    use crate::types::ExclusionSet;
    use anyhow::bail;
    use catalog::{Movie, RatedMovie, TagSet};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn candidates() -> Vec<ScoredCandidate> {
        vec![
            ScoredCandidate::new(Arc::new(Movie::new(1, "Rated")), 30.0),
            ScoredCandidate::new(Arc::new(Movie::new(2, "Irrelevant")), 0.0),
            ScoredCandidate::new(Arc::new(Movie::new(3, "Fresh")), 12.5),
        ]
    }

    fn context_excluding(movie_id: u32) -> UserContext {
        let rated = RatedMovie {
            movie_id,
            score: 5,
            genres: TagSet::new(),
            keywords: TagSet::new(),
        };
        let mut context = UserContext::new(1);
        context.exclusions = ExclusionSet::from_history(&[rated], HashSet::new());
        context
    }

    struct FailingFilter;

    impl Filter for FailingFilter {
        fn name(&self) -> &str {
            "FailingFilter"
        }

        fn apply(
            &self,
            _candidates: Vec<ScoredCandidate>,
            _context: &UserContext,
        ) -> Result<Vec<ScoredCandidate>> {
            bail!("backend went away")
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        assert!(pipeline.is_empty());

        let filtered = pipeline.apply(candidates(), &UserContext::new(1)).unwrap();
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filters_chain_in_order() {
        let pipeline = FilterPipeline::new()
            .add_filter(ExclusionFilter)
            .add_filter(RelevanceFilter::default());
        assert_eq!(pipeline.len(), 2);

        let filtered = pipeline.apply(candidates(), &context_excluding(1)).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].movie_id(), 3);
    }

    #[test]
    fn test_failing_filter_aborts() {
        let pipeline = FilterPipeline::new()
            .add_filter(ExclusionFilter)
            .add_filter(FailingFilter);

        let err = pipeline.apply(candidates(), &UserContext::new(1)).unwrap_err();
        assert!(err.to_string().contains("backend went away"));
    }
}
