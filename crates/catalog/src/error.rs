//! Error types for the catalog crate.
//!
//! Everything that can go wrong while loading a snapshot or reading from a
//! store ends up as a [`CatalogError`]. Malformed tag fields are *not*
//! errors: they degrade to an empty [`TagSet`](crate::TagSet) at the
//! normalization boundary.

use thiserror::Error;

use crate::types::MovieId;

/// Errors that can occur while loading or querying catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A JSON document couldn't be deserialized
    ///
    /// Keeps the file name so the failing snapshot part is obvious in logs
    #[error("Failed to parse {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Referenced entity doesn't exist (e.g., rating for non-existent movie)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: MovieId },

    /// The backing store could not serve the read
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
