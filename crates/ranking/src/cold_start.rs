//! Fallback ranking for users without a usable taste profile.
//!
//! With nothing to overlap against, candidates are ranked by global
//! signals alone: local engagement first, external quality second.

use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

use catalog::Movie;

use crate::scorer::ScoringWeights;
use crate::types::ScoredCandidate;

/// Ranks a catalog snapshot by popularity and quality.
///
/// ## Algorithm
/// 1. Keep movies with a known quality value
/// 2. Order by `popularity_count` desc (unknown counts as 0), then
///    `quality` desc, then id asc
/// 3. Take the first `limit`
///
/// Display score is `popularity_count + quality * cold_start_quality`,
/// unrounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColdStartRanker {
    weights: ScoringWeights,
}

impl ColdStartRanker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn rank(&self, catalog: &[Arc<Movie>], limit: usize) -> Vec<ScoredCandidate> {
        let mut rated: Vec<&Arc<Movie>> = catalog.iter().filter(|m| m.quality.is_some()).collect();

        rated.sort_by(|a, b| compare_by_reach(a, b));
        rated.truncate(limit);

        debug!(
            "Cold-start ranked {} of {} catalog movies",
            rated.len(),
            catalog.len()
        );

        rated
            .into_iter()
            .map(|movie| {
                let score = self.display_score(movie);
                ScoredCandidate::new(Arc::clone(movie), score)
            })
            .collect()
    }

    fn display_score(&self, movie: &Movie) -> f64 {
        movie.popularity_count.unwrap_or(0.0)
            + movie.quality.unwrap_or(0.0) * self.weights.cold_start_quality
    }
}

fn compare_by_reach(a: &Movie, b: &Movie) -> Ordering {
    let popularity = |m: &Movie| m.popularity_count.unwrap_or(0.0);
    let quality = |m: &Movie| m.quality.unwrap_or(0.0);

    popularity(b)
        .total_cmp(&popularity(a))
        .then_with(|| quality(b).total_cmp(&quality(a)))
        .then_with(|| a.id.cmp(&b.id))
}
