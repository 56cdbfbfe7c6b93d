//! Content-based ranking of movie candidates.
//!
//! This crate provides:
//! - ProfileBuilder, aggregating liked ratings into a TasteProfile
//! - Scorer, the weighted genre/keyword overlap score
//! - ColdStartRanker, the fallback for users without a profile
//! - Filter trait and implementations, composed with FilterPipeline
//!
//! ## Architecture
//! A content-based ranking runs in stages:
//! 1. Candidate filters remove movies the user already rated or watchlisted
//! 2. The Scorer assigns each remaining candidate a score (in parallel)
//! 3. Result filters drop candidates with zero relevance
//! 4. `top_n` sorts by score and truncates
//!
//! ## Example Usage
//! ```ignore
//! use ranking::{FilterPipeline, Scorer, UserContext, top_n};
//! use ranking::filters::*;
//!
//! let context = UserContext::from_history(user_id, &ratings, watchlisted);
//!
//! let candidates = FilterPipeline::new()
//!     .add_filter(ExclusionFilter)
//!     .apply(catalog, &context)?;
//! let scored = Scorer::default().score_all(candidates, &context.profile, &cancel)?;
//! let relevant = FilterPipeline::new()
//!     .add_filter(RelevanceFilter::default())
//!     .apply(scored, &context)?;
//! let ranked = top_n(relevant, 20);
//! ```

pub mod error;
pub mod types;
pub mod profile;
pub mod scorer;
pub mod cold_start;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use error::RankingError;
pub use types::{CancelFlag, ExclusionSet, ScoredCandidate, UserContext};
pub use profile::{LIKED_THRESHOLD, ProfileBuilder, TasteProfile};
pub use scorer::{
    COLD_START_QUALITY_WEIGHT, GENRE_WEIGHT, KEYWORD_WEIGHT, POPULARITY_WEIGHT, QUALITY_WEIGHT,
    Scorer, ScoringWeights, top_n,
};
pub use cold_start::ColdStartRanker;
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
