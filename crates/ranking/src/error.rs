//! Error types for the ranking crate.

use thiserror::Error;

/// Errors raised while ranking candidates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    /// The request was cancelled before the scan finished
    #[error("Ranking cancelled after scoring {scored} of {total} candidates")]
    Cancelled { scored: usize, total: usize },
}
