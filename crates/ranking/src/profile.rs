//! Taste profile aggregation.
//!
//! A [`TasteProfile`] is the union of genre and keyword tags over every
//! movie the user liked. It is rebuilt from raw history on every request
//! and never stored.

use catalog::{RatedMovie, TagSet};
use tracing::debug;

/// Ratings at or above this score count as "liked"
pub const LIKED_THRESHOLD: u8 = 3;

/// Aggregated tags a user has demonstrated a taste for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TasteProfile {
    pub genres: TagSet,
    pub keywords: TagSet,
    /// True iff `genres` or `keywords` is non-empty
    pub has_preferences: bool,
}

impl TasteProfile {
    /// Build a profile directly from tag sets
    pub fn from_tags(genres: TagSet, keywords: TagSet) -> Self {
        let has_preferences = !genres.is_empty() || !keywords.is_empty();
        Self {
            genres,
            keywords,
            has_preferences,
        }
    }
}

/// Builds a [`TasteProfile`] from rating history.
///
/// ## Algorithm
/// 1. Keep ratings with `score >= LIKED_THRESHOLD`
/// 2. Union each liked movie's genres and keywords into the accumulators
/// 3. `has_preferences = !genres.is_empty() || !keywords.is_empty()`
///
/// Every liked rating contributes the same way; score magnitude and
/// recency are ignored, so the result doesn't depend on rating order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileBuilder;

impl ProfileBuilder {
    pub fn build(&self, ratings: &[RatedMovie]) -> TasteProfile {
        let mut genres = TagSet::new();
        let mut keywords = TagSet::new();

        let mut liked = 0usize;
        for rating in ratings.iter().filter(|r| r.score >= LIKED_THRESHOLD) {
            genres.union_with(&rating.genres);
            keywords.union_with(&rating.keywords);
            liked += 1;
        }

        debug!(
            "Built taste profile from {} liked of {} ratings: {} genres, {} keywords",
            liked,
            ratings.len(),
            genres.len(),
            keywords.len()
        );

        TasteProfile::from_tags(genres, keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(movie_id: u32, score: u8, genres: &[&str], keywords: &[&str]) -> RatedMovie {
        RatedMovie {
            movie_id,
            score,
            genres: genres.iter().copied().collect(),
            keywords: keywords.iter().copied().collect(),
        }
    }

    #[test]
    fn test_build_profile_from_liked_ratings() {
        let ratings = vec![
            rated(1, 5, &["Action", "Science Fiction"], &["space", "aliens", "war"]),
            rated(2, 4, &["Action", "Thriller"], &["revenge"]),
        ];

        let profile = ProfileBuilder.build(&ratings);

        assert!(profile.has_preferences);
        assert_eq!(profile.genres.len(), 3);
        assert!(profile.genres.contains("Science Fiction"));
        assert!(profile.keywords.contains("revenge"));
    }

    #[test]
    fn test_low_ratings_are_ignored() {
        let ratings = vec![
            rated(1, 2, &["Romance"], &["love"]),
            rated(2, 1, &["Horror"], &[]),
        ];

        let profile = ProfileBuilder.build(&ratings);

        assert!(!profile.has_preferences);
        assert!(profile.genres.is_empty());
        assert!(profile.keywords.is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let profile = ProfileBuilder.build(&[rated(1, LIKED_THRESHOLD, &["Drama"], &[])]);
        assert!(profile.genres.contains("Drama"));
    }

    #[test]
    fn test_no_ratings_means_no_preferences() {
        let profile = ProfileBuilder.build(&[]);
        assert_eq!(profile, TasteProfile::default());
    }

    #[test]
    fn test_liked_movie_without_tags_gives_no_preferences() {
        let profile = ProfileBuilder.build(&[rated(1, 5, &[], &[])]);
        assert!(!profile.has_preferences);
    }

    #[test]
    fn test_keywords_alone_are_enough() {
        let profile = ProfileBuilder.build(&[rated(1, 4, &[], &["heist"])]);
        assert!(profile.has_preferences);
    }

    #[test]
    fn test_order_independent() {
        let a = rated(1, 5, &["Action"], &["space"]);
        let b = rated(2, 3, &["Comedy"], &["funny"]);
        let c = rated(3, 1, &["Horror"], &["gore"]);

        let forward = ProfileBuilder.build(&[a.clone(), b.clone(), c.clone()]);
        let backward = ProfileBuilder.build(&[c, b, a]);
        assert_eq!(forward, backward);
    }
}
