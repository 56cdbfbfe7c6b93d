//! Core domain types for the movie catalog.
//!
//! This module defines the records the recommender reads:
//! - Type aliases for domain clarity (UserId, MovieId)
//! - Movie, Rating and WatchlistEntry snapshots
//! - RatedMovie, a rating joined with the rated movie's tags
//! - CatalogIndex, the in-memory snapshot that serves all three stores

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use crate::tags::TagSet;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

/// Lowest valid rating score
pub const MIN_SCORE: u8 = 1;

/// Highest valid rating score
pub const MAX_SCORE: u8 = 5;

// =============================================================================
// Movie
// =============================================================================

/// A movie in the catalog.
///
/// Read-only for the duration of a recommendation request; shared as
/// `Arc<Movie>` so candidates don't copy titles and tag sets around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Genre tags, normalized on the way in
    #[serde(default)]
    pub genres: TagSet,
    /// Keyword tags, normalized on the way in
    #[serde(default)]
    pub keywords: TagSet,
    /// External quality rating on a 0-10 scale
    #[serde(default, alias = "vote_average")]
    pub quality: Option<f64>,
    /// Local engagement volume (number of ratings on this service)
    #[serde(default, alias = "rating_count")]
    pub popularity_count: Option<f64>,
    #[serde(default)]
    pub release_year: Option<u16>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl Movie {
    /// Create a movie with a title and no tags or metrics
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            genres: TagSet::new(),
            keywords: TagSet::new(),
            quality: None,
            popularity_count: None,
            release_year: None,
            poster_url: None,
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().collect();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().collect();
        self
    }

    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_popularity_count(mut self, count: f64) -> Self {
        self.popularity_count = Some(count);
        self
    }
}

// =============================================================================
// Ratings and Watchlist
// =============================================================================

/// A single rating from a user for a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value from 1 to 5
    pub score: u8,
    /// Unix timestamp when the rating was made
    #[serde(default)]
    pub timestamp: i64,
}

/// A movie the user intends to watch later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub user_id: UserId,
    pub movie_id: MovieId,
}

/// A rating joined with the tags of the movie it is for.
///
/// This is what the rating store hands to the profile builder.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedMovie {
    pub movie_id: MovieId,
    pub score: u8,
    pub genres: TagSet,
    pub keywords: TagSet,
}

impl RatedMovie {
    /// Join a rating with the movie it refers to
    pub fn new(rating: &Rating, movie: &Movie) -> Self {
        Self {
            movie_id: rating.movie_id,
            score: rating.score,
            genres: movie.genres.clone(),
            keywords: movie.keywords.clone(),
        }
    }
}

// =============================================================================
// CatalogIndex - in-memory snapshot
// =============================================================================

/// Immutable in-memory snapshot of movies, ratings and watchlists.
///
/// Once built it is only read, so an `Arc<CatalogIndex>` can be shared by
/// any number of concurrent requests and every request sees one
/// consistent view of all three stores.
#[derive(Debug)]
pub struct CatalogIndex {
    /// Movies ordered by id, which also fixes catalog iteration order
    pub(crate) movies: BTreeMap<MovieId, Arc<Movie>>,
    /// All ratings made by each user
    pub(crate) user_ratings: HashMap<UserId, Vec<Rating>>,
    /// Watchlisted movies per user
    pub(crate) user_watchlist: HashMap<UserId, HashSet<MovieId>>,
}

impl CatalogIndex {
    /// Creates a new, empty CatalogIndex
    pub fn new() -> Self {
        Self {
            movies: BTreeMap::new(),
            user_ratings: HashMap::new(),
            user_watchlist: HashMap::new(),
        }
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&Arc<Movie>> {
        self.movies.get(&id)
    }

    /// Get all ratings made by a user
    ///
    /// Returns an empty slice if user has no ratings
    pub fn get_user_ratings(&self, user_id: UserId) -> &[Rating] {
        self.user_ratings
            .get(&user_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get the ids of every movie on a user's watchlist
    pub fn get_user_watchlist(&self, user_id: UserId) -> Option<&HashSet<MovieId>> {
        self.user_watchlist.get(&user_id)
    }

    /// All user ids that have rated or watchlisted something, ascending
    pub fn user_ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self
            .user_ratings
            .keys()
            .chain(self.user_watchlist.keys())
            .copied()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Insert a movie into the index
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, Arc::new(movie));
    }

    /// Insert a rating, replacing any earlier rating of the same movie by the same user
    pub fn insert_rating(&mut self, rating: Rating) {
        let ratings = self.user_ratings.entry(rating.user_id).or_default();
        match ratings.iter_mut().find(|r| r.movie_id == rating.movie_id) {
            Some(existing) => *existing = rating,
            None => ratings.push(rating),
        }
    }

    /// Add a movie to a user's watchlist
    pub fn insert_watchlist_entry(&mut self, entry: WatchlistEntry) {
        self.user_watchlist
            .entry(entry.user_id)
            .or_default()
            .insert(entry.movie_id);
    }

    /// Get counts for debugging/validation: (movies, ratings, watchlist entries)
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_ratings = self.user_ratings.values().map(|v| v.len()).sum();
        let total_watchlist = self.user_watchlist.values().map(|v| v.len()).sum();
        (self.movies.len(), total_ratings, total_watchlist)
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::new()
    }
}
