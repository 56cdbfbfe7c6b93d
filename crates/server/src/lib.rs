//! Server crate for the tastematch recommendation engine.
//!
//! This crate contains the pipeline that turns a user id and a limit into
//! a ranked, serializable list of recommendations, plus its configuration
//! and error types.

pub mod config;
pub mod error;
pub mod response;
pub mod orchestrator;

pub use config::{Config, DEFAULT_LIMIT, Limit, MAX_LIMIT, MIN_LIMIT};
pub use error::RecommendError;
pub use orchestrator::RecommendationPipeline;
pub use response::{RecommendedMovie, Recommendations, Strategy};

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber used by the binaries.
///
/// Honors `RUST_LOG`, falling back to `default_filter`.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
