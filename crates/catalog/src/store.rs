//! Store traits the recommender reads through.
//!
//! The ranking core never talks to storage directly. It asks three narrow
//! collaborators for typed records, and any backend that can answer them
//! can drive recommendations. [`CatalogIndex`] implements all three over an
//! immutable in-memory snapshot.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::types::{CatalogIndex, Movie, MovieId, RatedMovie, UserId};

/// Source of a user's rating history.
pub trait RatingStore: Send + Sync {
    /// Every rating the user made, joined with the rated movie's tags
    fn ratings_for(&self, user_id: UserId) -> Result<Vec<RatedMovie>>;
}

/// Source of a user's watchlist.
pub trait WatchlistStore: Send + Sync {
    fn watchlisted_ids_for(&self, user_id: UserId) -> Result<HashSet<MovieId>>;
}

/// Source of candidate movies.
pub trait MovieCatalog: Send + Sync {
    /// Every movie in the catalog, ordered by id
    fn all(&self) -> Result<Vec<Arc<Movie>>>;
}

/// A backend that serves all three reads from one consistent snapshot.
pub trait DataSource: RatingStore + WatchlistStore + MovieCatalog {}

impl<T: RatingStore + WatchlistStore + MovieCatalog> DataSource for T {}

impl RatingStore for CatalogIndex {
    fn ratings_for(&self, user_id: UserId) -> Result<Vec<RatedMovie>> {
        // Ratings of movies missing from the snapshot carry no tags to learn from
        Ok(self
            .get_user_ratings(user_id)
            .iter()
            .filter_map(|rating| {
                let movie = self.get_movie(rating.movie_id)?;
                Some(RatedMovie::new(rating, movie))
            })
            .collect())
    }
}

impl WatchlistStore for CatalogIndex {
    fn watchlisted_ids_for(&self, user_id: UserId) -> Result<HashSet<MovieId>> {
        Ok(self.get_user_watchlist(user_id).cloned().unwrap_or_default())
    }
}

impl MovieCatalog for CatalogIndex {
    fn all(&self) -> Result<Vec<Arc<Movie>>> {
        Ok(self.movies.values().cloned().collect())
    }
}
