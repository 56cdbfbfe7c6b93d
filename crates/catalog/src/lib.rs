//! # Catalog Crate
//!
//! Typed records and store interfaces for the recommender.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Rating, WatchlistEntry, CatalogIndex)
//! - **tags**: Normalization of genre/keyword fields into [`TagSet`]
//! - **store**: Store traits the ranking core reads through
//! - **parser**: Parse JSON snapshot files into Rust structs
//! - **index**: Load and validate a snapshot directory
//! - **error**: Error types for catalog access
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogIndex, MovieCatalog, RatingStore};
//! use std::path::Path;
//!
//! let index = CatalogIndex::load_from_dir(Path::new("data/sample"))?;
//!
//! let movies = index.all()?;
//! let history = index.ratings_for(1)?;
//! println!("{} movies, user 1 rated {}", movies.len(), history.len());
//! ```

pub mod error;
pub mod tags;
pub mod types;
pub mod store;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use tags::{normalize, parse_delimited, RawTags, TagSet};
pub use types::{
    // Type aliases
    MovieId,
    UserId,
    // Core types
    CatalogIndex,
    Movie,
    RatedMovie,
    Rating,
    WatchlistEntry,
    // Score bounds
    MAX_SCORE,
    MIN_SCORE,
};
pub use store::{DataSource, MovieCatalog, RatingStore, WatchlistStore};
