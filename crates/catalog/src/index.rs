//! CatalogIndex building and validation.
//!
//! Loads a snapshot directory into a [`CatalogIndex`]:
//! - Parse movies, ratings and watchlist files in parallel
//! - Build the per-user indices
//! - Validate references between the three

use crate::error::{CatalogError, Result};
use crate::parser::{self, MOVIES_FILE, RATINGS_FILE, WATCHLIST_FILE};
use crate::types::*;
use std::path::Path;
use tracing::info;

impl CatalogIndex {
    /// Load a catalog snapshot from a directory
    ///
    /// Steps:
    /// 1. Parse all three files (movies, ratings, watchlist) in parallel
    /// 2. Insert into the primary indices
    /// 3. Validate data integrity
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog snapshot from {:?}", data_dir);

        let movies_path = data_dir.join(MOVIES_FILE);
        let ratings_path = data_dir.join(RATINGS_FILE);
        let watchlist_path = data_dir.join(WATCHLIST_FILE);

        // Nested joins give three-way parallelism
        let ((movies, ratings), watchlist) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_movies(&movies_path),
                    || parser::parse_ratings(&ratings_path),
                )
            },
            || parser::parse_watchlist(&watchlist_path),
        );

        let movies = movies?;
        let ratings = ratings?;
        let watchlist = watchlist?;

        info!(
            "Loaded {} movies, {} ratings, {} watchlist entries",
            movies.len(),
            ratings.len(),
            watchlist.len()
        );

        let mut index = CatalogIndex::new();
        for movie in movies {
            index.insert_movie(movie);
        }
        for rating in ratings {
            index.insert_rating(rating);
        }
        for entry in watchlist {
            index.insert_watchlist_entry(entry);
        }

        index.validate()?;

        info!("Catalog snapshot built and validated");
        Ok(index)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every rating references an existing movie and has a 1-5 score
    /// - Every watchlist entry references an existing movie
    pub fn validate(&self) -> Result<()> {
        for rating in self.user_ratings.values().flatten() {
            if !self.movies.contains_key(&rating.movie_id) {
                return Err(CatalogError::MissingReference {
                    entity: "Movie".to_string(),
                    id: rating.movie_id,
                });
            }
            parser::check_score(rating.score)?;
        }

        for movie_id in self.user_watchlist.values().flatten() {
            if !self.movies.contains_key(movie_id) {
                return Err(CatalogError::MissingReference {
                    entity: "Movie".to_string(),
                    id: *movie_id,
                });
            }
        }
        Ok(())
    }
}
