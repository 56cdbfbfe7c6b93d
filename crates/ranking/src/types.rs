//! Shared types for the ranking stages.

use catalog::{Movie, MovieId, RatedMovie, UserId};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::profile::{ProfileBuilder, TasteProfile};

/// A candidate movie and its predicted score.
///
/// Created during scoring and dropped once the response is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub movie: Arc<Movie>,
    /// Predicted affinity, always >= 0
    pub score: f64,
}

impl ScoredCandidate {
    pub fn new(movie: Arc<Movie>, score: f64) -> Self {
        Self { movie, score }
    }

    /// A candidate that hasn't been scored yet
    pub fn unscored(movie: Arc<Movie>) -> Self {
        Self::new(movie, 0.0)
    }

    pub fn movie_id(&self) -> MovieId {
        self.movie.id
    }
}

/// Movies that must never be recommended to a user: everything they have
/// rated (any score) plus everything on their watchlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<MovieId>);

impl ExclusionSet {
    /// Union of rated and watchlisted movie ids
    pub fn from_history(ratings: &[RatedMovie], watchlisted: HashSet<MovieId>) -> Self {
        let mut ids = watchlisted;
        ids.extend(ratings.iter().map(|r| r.movie_id));
        Self(ids)
    }

    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.0.contains(&movie_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything the ranking stages need to know about the requesting user.
///
/// Gathered once per request so filters and scorers never go back to the
/// stores.
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    pub user_id: UserId,
    pub profile: TasteProfile,
    pub exclusions: ExclusionSet,
    /// Number of ratings the user has made, liked or not
    pub ratings_count: usize,
}

impl UserContext {
    /// Create an empty context for a user with no history
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Build the context from a user's rating history and watchlist
    pub fn from_history(
        user_id: UserId,
        ratings: &[RatedMovie],
        watchlisted: HashSet<MovieId>,
    ) -> Self {
        Self {
            user_id,
            profile: ProfileBuilder.build(ratings),
            exclusions: ExclusionSet::from_history(ratings, watchlisted),
            ratings_count: ratings.len(),
        }
    }
}

/// Cooperative cancellation signal shared between a request and its scan.
///
/// Cloning shares the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
