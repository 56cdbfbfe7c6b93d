//! Output contract returned to callers.

use serde::Serialize;
use std::fmt;

use catalog::{MovieId, TagSet};
use ranking::ScoredCandidate;

/// Which ranking strategy produced a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Profile overlap scoring
    ContentBased,
    /// Popularity/quality fallback for users without a profile
    ColdStart,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::ContentBased => "content-based",
            Strategy::ColdStart => "cold-start",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recommended movie with its predicted score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedMovie {
    pub id: MovieId,
    pub title: String,
    pub genres: TagSet,
    pub keywords: TagSet,
    pub vote_average: Option<f64>,
    pub popularity_count: Option<f64>,
    pub release_year: Option<u16>,
    pub poster_url: Option<String>,
    pub predicted_score: f64,
}

impl From<ScoredCandidate> for RecommendedMovie {
    fn from(candidate: ScoredCandidate) -> Self {
        let movie = candidate.movie;
        Self {
            id: movie.id,
            title: movie.title.clone(),
            genres: movie.genres.clone(),
            keywords: movie.keywords.clone(),
            vote_average: movie.quality,
            popularity_count: movie.popularity_count,
            release_year: movie.release_year,
            poster_url: movie.poster_url.clone(),
            predicted_score: candidate.score,
        }
    }
}

/// Ranked recommendations for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub strategy: Strategy,
    pub recommendations: Vec<RecommendedMovie>,
    pub count: usize,
    /// Ratings the user has made, liked or not
    pub user_ratings_count: usize,
}

impl Recommendations {
    pub fn new(strategy: Strategy, ranked: Vec<ScoredCandidate>, user_ratings_count: usize) -> Self {
        let recommendations: Vec<RecommendedMovie> =
            ranked.into_iter().map(RecommendedMovie::from).collect();
        Self {
            strategy,
            count: recommendations.len(),
            recommendations,
            user_ratings_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
