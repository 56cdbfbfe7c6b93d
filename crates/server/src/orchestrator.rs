//! # Recommendation Orchestrator
//!
//! Coordinates one recommendation request end to end:
//! 1. Validate the limit
//! 2. Read rating history and watchlist, build the user context
//! 3. No taste profile: cold-start ranking over the full catalog
//! 4. Otherwise drop excluded movies, score the rest in parallel, drop
//!    irrelevant ones, sort and truncate
//!
//! Steps 2-4 are CPU-bound and run on tokio's blocking pool, bounded by
//! the configured deadline. When the deadline passes the scoring scan is
//! told to stop and the caller gets [`RecommendError::Timeout`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use catalog::{DataSource, UserId};
use ranking::filters::{ExclusionFilter, RelevanceFilter};
use ranking::{CancelFlag, ColdStartRanker, FilterPipeline, ScoredCandidate, Scorer, UserContext, top_n};

use crate::config::{Config, Limit};
use crate::error::RecommendError;
use crate::response::{Recommendations, Strategy};

/// Produces ranked recommendations from a consistent data snapshot.
///
/// Holds no per-user state; clones share the snapshot and the filter
/// chains, so one instance can serve any number of concurrent requests.
pub struct RecommendationPipeline<S> {
    source: Arc<S>,
    scorer: Scorer,
    cold_start: ColdStartRanker,
    candidate_filters: Arc<FilterPipeline>,
    result_filters: Arc<FilterPipeline>,
    deadline: Duration,
}

impl<S> Clone for RecommendationPipeline<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            scorer: self.scorer,
            cold_start: self.cold_start,
            candidate_filters: Arc::clone(&self.candidate_filters),
            result_filters: Arc::clone(&self.result_filters),
            deadline: self.deadline,
        }
    }
}

impl<S: DataSource + 'static> RecommendationPipeline<S> {
    /// Create a pipeline over a data source
    ///
    /// # Arguments
    /// * `source` - Snapshot serving ratings, watchlists and the catalog
    /// * `config` - Weights and deadline; `data_dir` is not used here
    pub fn new(source: Arc<S>, config: &Config) -> Self {
        let candidate_filters = Arc::new(FilterPipeline::new().add_filter(ExclusionFilter));
        let result_filters = Arc::new(FilterPipeline::new().add_filter(RelevanceFilter::default()));

        Self {
            source,
            scorer: Scorer::new(config.weights),
            cold_start: ColdStartRanker::new(config.weights),
            candidate_filters,
            result_filters,
            deadline: config.deadline,
        }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Main entry point: get recommendations for a user
    ///
    /// # Arguments
    /// * `user_id` - The user to recommend for
    /// * `limit` - Number of recommendations, must be in 1..=100
    ///
    /// # Returns
    /// Recommendations sorted by predicted score, highest first. An empty
    /// list is a valid answer.
    #[instrument(skip(self))]
    pub async fn recommend(
        &self,
        user_id: UserId,
        limit: i64,
    ) -> Result<Recommendations, RecommendError> {
        // Reject bad input before touching any store
        let limit = Limit::new(limit)?;
        let start_time = Instant::now();

        let cancel = CancelFlag::new();
        let task = tokio::task::spawn_blocking({
            let pipeline = self.clone();
            let cancel = cancel.clone();
            move || pipeline.recommend_blocking(user_id, limit, &cancel)
        });

        let recommendations = match tokio::time::timeout(self.deadline, task).await {
            Ok(joined) => joined??,
            Err(_) => {
                cancel.cancel();
                warn!(
                    "Recommendation for user {} exceeded deadline of {:?}",
                    user_id, self.deadline
                );
                return Err(RecommendError::Timeout {
                    deadline: self.deadline,
                });
            }
        };

        info!(
            "Served {} {} recommendations for user {} in {:.2?}",
            recommendations.count,
            recommendations.strategy,
            user_id,
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    /// Synchronous body of [`recommend`](Self::recommend).
    ///
    /// Runs on the calling thread; `cancel` stops the scoring scan early.
    pub fn recommend_blocking(
        &self,
        user_id: UserId,
        limit: Limit,
        cancel: &CancelFlag,
    ) -> Result<Recommendations, RecommendError> {
        let context = self.build_user_context(user_id)?;

        if !context.profile.has_preferences {
            // Global fallback over the whole catalog; exclusions only apply to content-based ranking
            let ranked = self.cold_start.rank(&self.source.all()?, limit.get());
            debug!("User {} has no taste profile, using cold start", user_id);
            return Ok(Recommendations::new(
                Strategy::ColdStart,
                ranked,
                context.ratings_count,
            ));
        }

        let candidates = self.retrieve_candidates(&context)?;
        let scored = self.scorer.score_all(candidates, &context.profile, cancel)?;
        let relevant = self.result_filters.apply(scored, &context)?;
        let ranked = top_n(relevant, limit.get());

        Ok(Recommendations::new(
            Strategy::ContentBased,
            ranked,
            context.ratings_count,
        ))
    }

    /// Build the user context from the rating and watchlist stores
    pub fn build_user_context(&self, user_id: UserId) -> Result<UserContext, RecommendError> {
        let ratings = self.source.ratings_for(user_id)?;
        let watchlisted = self.source.watchlisted_ids_for(user_id)?;

        let context = UserContext::from_history(user_id, &ratings, watchlisted);
        debug!(
            "Built user context for user {}: {} ratings, {} excluded movies, has_preferences={}",
            user_id,
            context.ratings_count,
            context.exclusions.len(),
            context.profile.has_preferences
        );
        Ok(context)
    }

    /// Catalog minus the user's exclusion set, in catalog order
    fn retrieve_candidates(
        &self,
        context: &UserContext,
    ) -> Result<Vec<ScoredCandidate>, RecommendError> {
        let catalog: Vec<ScoredCandidate> = self
            .source
            .all()?
            .into_iter()
            .map(ScoredCandidate::unscored)
            .collect();
        let catalog_size = catalog.len();

        let candidates = self.candidate_filters.apply(catalog, context)?;
        debug!(
            "Retrieved {} candidates from a catalog of {}",
            candidates.len(),
            catalog_size
        );
        Ok(candidates)
    }
}
