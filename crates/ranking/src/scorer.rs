//! Overlap scoring of candidates against a taste profile.
//!
//! ## Formula
//! ```text
//! score = genre_overlap * genre + keyword_overlap * keyword
//! if genre_overlap > 0 || keyword_overlap > 0:
//!     score += quality * quality_weight          (when quality is known)
//!     score += popularity_count * popularity     (when the count is known)
//! round to 2 decimals
//! ```
//!
//! Quality and popularity only separate candidates that are already
//! topically relevant. A movie sharing no tag with the profile scores
//! exactly 0 however well rated it is.

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

use catalog::Movie;

use crate::error::RankingError;
use crate::profile::TasteProfile;
use crate::types::{CancelFlag, ScoredCandidate};

pub const GENRE_WEIGHT: f64 = 10.0;
pub const KEYWORD_WEIGHT: f64 = 5.0;
pub const QUALITY_WEIGHT: f64 = 10.0;
pub const POPULARITY_WEIGHT: f64 = 1.0;
/// Quality multiplier for the cold-start display score
pub const COLD_START_QUALITY_WEIGHT: f64 = 10.0;

/// Weights used by [`Scorer`] and [`ColdStartRanker`](crate::ColdStartRanker).
///
/// Fixed for a running service; `Default` gives the production values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub genre: f64,
    pub keyword: f64,
    pub quality: f64,
    pub popularity: f64,
    pub cold_start_quality: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            genre: GENRE_WEIGHT,
            keyword: KEYWORD_WEIGHT,
            quality: QUALITY_WEIGHT,
            popularity: POPULARITY_WEIGHT,
            cold_start_quality: COLD_START_QUALITY_WEIGHT,
        }
    }
}

/// Computes profile/movie affinity scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single movie against a profile. Always >= 0.
    pub fn score(&self, profile: &TasteProfile, movie: &Movie) -> f64 {
        let genre_overlap = profile.genres.overlap(&movie.genres);
        let keyword_overlap = profile.keywords.overlap(&movie.keywords);

        let mut score = genre_overlap as f64 * self.weights.genre
            + keyword_overlap as f64 * self.weights.keyword;

        if genre_overlap > 0 || keyword_overlap > 0 {
            if let Some(quality) = movie.quality {
                score += quality * self.weights.quality;
            }
            if let Some(count) = movie.popularity_count {
                score += count * self.weights.popularity;
            }
        }

        // Negative metrics in a bad record must not push a score below zero
        round_to_cents(score.max(0.0))
    }

    /// Score every candidate in parallel.
    ///
    /// Each worker checks `cancel` before scoring a candidate; once it is
    /// raised the scan stops and [`RankingError::Cancelled`] is returned.
    /// Output order matches input order.
    pub fn score_all(
        &self,
        candidates: Vec<ScoredCandidate>,
        profile: &TasteProfile,
        cancel: &CancelFlag,
    ) -> Result<Vec<ScoredCandidate>, RankingError> {
        let total = candidates.len();
        let scored = AtomicUsize::new(0);

        let result = candidates
            .into_par_iter()
            .map(|mut candidate| {
                if cancel.is_cancelled() {
                    return Err(RankingError::Cancelled {
                        scored: scored.load(Ordering::Relaxed),
                        total,
                    });
                }
                candidate.score = self.score(profile, &candidate.movie);
                scored.fetch_add(1, Ordering::Relaxed);
                Ok(candidate)
            })
            .collect::<Result<Vec<_>, _>>();

        debug!(
            "Scored {} of {} candidates",
            scored.load(Ordering::Relaxed),
            total
        );
        result
    }
}

/// Sort by score descending, ties by movie id ascending, and keep `limit`.
pub fn top_n(mut candidates: Vec<ScoredCandidate>, limit: usize) -> Vec<ScoredCandidate> {
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.movie_id().cmp(&b.movie_id()))
    });
    candidates.truncate(limit);
    candidates
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
