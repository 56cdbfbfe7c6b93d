//! Simple test harness for the recommendation pipeline.
//!
//! Loads a snapshot and prints the JSON response for one user:
//!
//! ```text
//! server [data_dir] [user_id] [limit]
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use catalog::CatalogIndex;
use server::{Config, DEFAULT_LIMIT, RecommendationPipeline};

#[tokio::main]
async fn main() -> Result<()> {
    server::init_tracing("info,server=debug,ranking=debug");

    let mut args = std::env::args().skip(1);
    let mut config = Config::default();
    if let Some(dir) = args.next() {
        config = config.with_data_dir(PathBuf::from(dir));
    }
    let user_id = match args.next() {
        Some(raw) => raw.parse().context("user_id must be a non-negative integer")?,
        None => 1,
    };
    let limit = match args.next() {
        Some(raw) => raw.parse().context("limit must be an integer")?,
        None => DEFAULT_LIMIT,
    };

    info!("Loading catalog snapshot from {}", config.data_dir.display());
    let index = CatalogIndex::load_from_dir(&config.data_dir)
        .with_context(|| format!("Failed to load snapshot from {}", config.data_dir.display()))?;
    let pipeline = RecommendationPipeline::new(Arc::new(index), &config);

    info!("Getting recommendations for user {} (limit: {})", user_id, limit);
    let recommendations = pipeline.recommend(user_id, limit).await?;

    println!("{}", serde_json::to_string_pretty(&recommendations)?);
    Ok(())
}
