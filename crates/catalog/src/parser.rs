//! Parser for catalog snapshot files.
//!
//! A snapshot directory holds three JSON documents, each a top-level array:
//! - movies.json: `{id, title, genres, keywords, vote_average?, rating_count?, ...}`
//! - ratings.json: `{user_id, movie_id, score, timestamp?}`
//! - watchlist.json: `{user_id, movie_id}`
//!
//! Tag fields are normalized while deserializing (see [`crate::tags`]).

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

pub const MOVIES_FILE: &str = "movies.json";
pub const RATINGS_FILE: &str = "ratings.json";
pub const WATCHLIST_FILE: &str = "watchlist.json";

/// Read a JSON array of records from `path`
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(err),
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            CatalogError::IoError(source.into())
        } else {
            CatalogError::JsonError {
                file: file_label(path),
                source,
            }
        }
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse the movies file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    read_records(path)
}

/// Parse the ratings file
///
/// Scores outside 1-5 are rejected here rather than silently clamped.
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    let ratings: Vec<Rating> = read_records(path)?;
    for rating in &ratings {
        check_score(rating.score)?;
    }
    Ok(ratings)
}

/// Parse the watchlist file
pub fn parse_watchlist(path: &Path) -> Result<Vec<WatchlistEntry>> {
    read_records(path)
}

pub(crate) fn check_score(score: u8) -> Result<()> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(CatalogError::InvalidValue {
            field: "score".to_string(),
            value: score.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("catalog-parser-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_check_score() {
        assert!(check_score(1).is_ok());
        assert!(check_score(5).is_ok());
        assert!(check_score(0).is_err());
        assert!(check_score(6).is_err());
    }

    #[test]
    fn test_parse_ratings_rejects_out_of_range() {
        let path = write_temp(
            "bad_ratings.json",
            r#"[{"user_id": 1, "movie_id": 1, "score": 9}]"#,
        );
        let result = parse_ratings(&path);
        assert!(matches!(result, Err(CatalogError::InvalidValue { .. })));
    }

    #[test]
    fn test_parse_movies_reports_file_on_bad_json() {
        let path = write_temp("broken_movies.json", "[{\"id\": ");
        match parse_movies(&path) {
            Err(CatalogError::JsonError { file, .. }) => assert_eq!(file, "broken_movies.json"),
            other => panic!("expected JsonError, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_read_failure_is_io_error() {
        // Opening a directory succeeds on unix, reading it does not
        let dir = std::env::temp_dir().join(format!("catalog-parser-dir-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let result = parse_movies(&dir);
        assert!(matches!(result, Err(CatalogError::IoError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = parse_watchlist(Path::new("/definitely/not/here/watchlist.json"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }
}
