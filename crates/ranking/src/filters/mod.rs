//! Filter implementations for the ranking stages.
//!
//! This module contains the concrete filters that can be composed
//! into a FilterPipeline.

pub mod exclusion;
pub mod relevance;

// Re-export for convenience
pub use exclusion::ExclusionFilter;
pub use relevance::RelevanceFilter;
