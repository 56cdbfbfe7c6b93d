//! Integration tests for the ranking stages.
//!
//! These tests drive the stores, profile builder, filters and scorer
//! together the way a recommendation request does.

use catalog::{CatalogIndex, Movie, MovieCatalog, Rating, RatingStore, WatchlistEntry, WatchlistStore};
use ranking::filters::*;
use ranking::{
    CancelFlag, ColdStartRanker, FilterPipeline, ScoredCandidate, Scorer, UserContext, top_n,
};

fn create_test_index() -> CatalogIndex {
    let mut index = CatalogIndex::new();

    index.insert_movie(
        Movie::new(1, "Action Sci-Fi Movie")
            .with_genres(["Action", "Science Fiction"])
            .with_keywords(["space", "aliens", "war"])
            .with_quality(8.5)
            .with_popularity_count(100.0),
    );
    index.insert_movie(
        Movie::new(2, "Another Action Movie")
            .with_genres(["Action", "Thriller"])
            .with_keywords(["revenge", "martial arts"])
            .with_quality(7.8)
            .with_popularity_count(50.0),
    );
    index.insert_movie(
        Movie::new(3, "Romance Drama")
            .with_genres(["Romance", "Drama"])
            .with_keywords(["love", "heartbreak"])
            .with_quality(6.5)
            .with_popularity_count(30.0),
    );
    index.insert_movie(
        Movie::new(4, "Space Adventure")
            .with_genres(["Science Fiction", "Adventure"])
            .with_keywords(["space", "exploration", "future"])
            .with_quality(8.0)
            .with_popularity_count(80.0),
    );
    index.insert_movie(
        Movie::new(5, "Comedy Movie")
            .with_genres(["Comedy"])
            .with_keywords(["funny", "humor"])
            .with_quality(7.0)
            .with_popularity_count(40.0),
    );

    index
}

fn context_for(index: &CatalogIndex, user_id: u32) -> UserContext {
    let ratings = index.ratings_for(user_id).unwrap();
    let watchlisted = index.watchlisted_ids_for(user_id).unwrap();
    UserContext::from_history(user_id, &ratings, watchlisted)
}

fn rank(index: &CatalogIndex, context: &UserContext, limit: usize) -> Vec<ScoredCandidate> {
    let catalog: Vec<ScoredCandidate> = index
        .all()
        .unwrap()
        .into_iter()
        .map(ScoredCandidate::unscored)
        .collect();

    let candidates = FilterPipeline::new()
        .add_filter(ExclusionFilter)
        .apply(catalog, context)
        .unwrap();
    let scored = Scorer::default()
        .score_all(candidates, &context.profile, &CancelFlag::new())
        .unwrap();
    let relevant = FilterPipeline::new()
        .add_filter(RelevanceFilter::default())
        .apply(scored, context)
        .unwrap();
    top_n(relevant, limit)
}

#[test]
fn test_liked_action_user_gets_space_adventure_first() {
    let mut index = create_test_index();
    index.insert_rating(Rating { user_id: 1, movie_id: 1, score: 5, timestamp: 1 });
    index.insert_rating(Rating { user_id: 1, movie_id: 2, score: 4, timestamp: 2 });

    let context = context_for(&index, 1);
    assert!(context.profile.has_preferences);

    let ranked = rank(&index, &context, 20);
    let ids: Vec<u32> = ranked.iter().map(|c| c.movie_id()).collect();

    // Space Adventure: 1 genre + 1 keyword + 80 quality + 80 popularity
    assert_eq!(ids, vec![4]);
    assert_eq!(ranked[0].score, 175.0);
}

#[test]
fn test_excluded_movies_never_ranked() {
    let mut index = create_test_index();
    index.insert_rating(Rating { user_id: 1, movie_id: 1, score: 5, timestamp: 1 });
    index.insert_rating(Rating { user_id: 1, movie_id: 3, score: 1, timestamp: 2 });
    index.insert_watchlist_entry(WatchlistEntry { user_id: 1, movie_id: 4 });

    let context = context_for(&index, 1);
    let ranked = rank(&index, &context, 20);

    for candidate in &ranked {
        assert!(!context.exclusions.contains(candidate.movie_id()));
    }
    let ids: Vec<u32> = ranked.iter().map(|c| c.movie_id()).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_scores_descending_and_positive() {
    let mut index = create_test_index();
    index.insert_rating(Rating { user_id: 1, movie_id: 4, score: 3, timestamp: 1 });

    let ranked = rank(&index, &context_for(&index, 1), 20);

    assert!(!ranked.is_empty());
    assert!(ranked.iter().all(|c| c.score > 0.0));
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_disliked_only_history_falls_back_to_cold_start() {
    let mut index = create_test_index();
    index.insert_rating(Rating { user_id: 1, movie_id: 3, score: 2, timestamp: 1 });

    let context = context_for(&index, 1);
    assert!(!context.profile.has_preferences);

    let ranked = ColdStartRanker::default().rank(&index.all().unwrap(), 3);
    let ids: Vec<u32> = ranked.iter().map(|c| c.movie_id()).collect();
    assert_eq!(ids, vec![1, 4, 2]);
}

#[test]
fn test_everything_excluded_yields_empty_ranking() {
    let mut index = create_test_index();
    for movie_id in 1..=5 {
        index.insert_rating(Rating { user_id: 1, movie_id, score: 4, timestamp: 0 });
    }

    let ranked = rank(&index, &context_for(&index, 1), 20);
    assert!(ranked.is_empty());
}
