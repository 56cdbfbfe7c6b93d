use anyhow::{bail, Context, Result};
use catalog::{CatalogIndex, TagSet, UserId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use server::{Config, RecommendationPipeline, Recommendations, Strategy, DEFAULT_LIMIT};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// TasteMatch - content-based movie recommendations
#[derive(Parser)]
#[command(name = "tastematch")]
#[command(about = "Recommend movies from the genres and keywords a user liked", long_about = None)]
struct Cli {
    /// Directory holding movies.json, ratings.json and watchlist.json
    #[arg(short, long, env = "TASTEMATCH_DATA_DIR", default_value = "data/sample")]
    data_dir: PathBuf,

    /// Per-request deadline in milliseconds
    #[arg(long, env = "TASTEMATCH_DEADLINE_MS", default_value = "2000")]
    deadline_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get movie recommendations for a user
    Recommend {
        #[arg(long)]
        user_id: UserId,

        /// Number of recommendations to return (1-100)
        #[arg(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
        limit: i64,

        /// Print the response document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the taste profile built from a user's ratings
    Profile {
        #[arg(long)]
        user_id: UserId,
    },

    /// Fire concurrent requests for random users and report latency
    Benchmark {
        #[arg(long, default_value = "100")]
        requests: usize,

        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    server::init_tracing("info");

    let cli = Cli::parse();
    let config = Config::default()
        .with_data_dir(&cli.data_dir)
        .with_deadline(Duration::from_millis(cli.deadline_ms));

    println!("Loading catalog from {}...", config.data_dir.display());
    let start = Instant::now();
    let index = CatalogIndex::load_from_dir(&config.data_dir)
        .with_context(|| format!("Failed to load catalog from {}", config.data_dir.display()))?;
    println!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());

    let index = Arc::new(index);
    let pipeline = RecommendationPipeline::new(index.clone(), &config);

    match cli.command {
        Commands::Recommend { user_id, limit, json } => {
            handle_recommend(&pipeline, user_id, limit, json).await?
        }
        Commands::Profile { user_id } => handle_profile(&pipeline, user_id)?,
        Commands::Benchmark { requests, limit } => {
            handle_benchmark(pipeline, &index, requests, limit).await?
        }
    }

    Ok(())
}

async fn handle_recommend(
    pipeline: &RecommendationPipeline<CatalogIndex>,
    user_id: UserId,
    limit: i64,
    json: bool,
) -> Result<()> {
    let recommendations = pipeline
        .recommend(user_id, limit)
        .await
        .with_context(|| format!("Failed to recommend for user {}", user_id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        print_recommendations(user_id, &recommendations);
    }
    Ok(())
}

fn handle_profile(pipeline: &RecommendationPipeline<CatalogIndex>, user_id: UserId) -> Result<()> {
    let context = pipeline
        .build_user_context(user_id)
        .with_context(|| format!("Failed to read history for user {}", user_id))?;

    println!("{}", format!("User ID: {}", user_id).bold().blue());
    println!("{}Ratings: {}", "• ".cyan(), context.ratings_count);
    println!("{}Excluded movies: {}", "• ".cyan(), context.exclusions.len());

    if !context.profile.has_preferences {
        println!(
            "{}",
            "No ratings of 3 or more yet; recommendations use the cold-start ranking".yellow()
        );
        return Ok(());
    }

    println!("{}Liked genres: {}", "• ".green(), join_tags(&context.profile.genres));
    println!("{}Liked keywords: {}", "• ".green(), join_tags(&context.profile.keywords));
    Ok(())
}

async fn handle_benchmark(
    pipeline: RecommendationPipeline<CatalogIndex>,
    index: &CatalogIndex,
    requests: usize,
    limit: i64,
) -> Result<()> {
    let known_users = index.user_ids();
    if known_users.is_empty() {
        bail!("Catalog has no users with ratings or watchlist entries");
    }
    if requests == 0 {
        bail!("Benchmark needs at least one request");
    }

    let users: Vec<UserId> = (0..requests)
        .map(|_| known_users[rand::random_range(0..known_users.len())])
        .collect();

    let wall = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for user_id in users {
        let pipeline = pipeline.clone();
        handles.push(tokio::spawn(async move {
            let start = Instant::now();
            pipeline.recommend(user_id, limit).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        }));
    }

    let mut timings = Vec::with_capacity(handles.len());
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall.elapsed();

    timings.sort();
    let percentile = |p: f64| {
        let rank = ((timings.len() as f64 * p) as usize).min(timings.len() - 1);
        timings[rank]
    };
    let average: Duration = timings.iter().sum::<Duration>() / timings.len() as u32;
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", requests);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", average);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn print_recommendations(user_id: UserId, recommendations: &Recommendations) {
    let strategy = match recommendations.strategy {
        Strategy::ContentBased => recommendations.strategy.as_str().green(),
        Strategy::ColdStart => recommendations.strategy.as_str().yellow(),
    };
    println!(
        "{} ({}, {} ratings)",
        format!("Recommendations for user {}:", user_id).bold().blue(),
        strategy,
        recommendations.user_ratings_count
    );

    if recommendations.is_empty() {
        println!("  Nothing left to recommend");
        return;
    }

    for (rank, movie) in recommendations.recommendations.iter().enumerate() {
        let year = movie
            .release_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "{}. {} ({}) [{}] - Score: {:.2}",
            (rank + 1).to_string().green(),
            movie.title,
            year,
            join_tags(&movie.genres),
            movie.predicted_score
        );
    }
}

fn join_tags(tags: &TagSet) -> String {
    tags.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
