//! Parser for MovieLens CSV files.
//!
//! This module handles the two input files:
//! - movies.csv: movieId,title,genres
//! - ratings.csv: userId,movieId,rating,timestamp
//!
//! Both files start with a header row. Columns are read by position, so the
//! header names themselves are not checked. Titles may be quoted and contain
//! commas; genres are pipe-separated.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Marker MovieLens uses for a movie without any genre
const NO_GENRES: &str = "(no genres listed)";

/// Raw movies.csv row, by position
type MovieRow = (MovieId, String, String);

/// Raw ratings.csv row, by position. Timestamps are Unix seconds and are
/// read as floats so both "964982703" and "964982703.0" are accepted.
type RatingRow = (UserId, MovieId, f64, f64);

/// Open a data file, reporting a missing file as `FileNotFound`
fn open(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(File::open(path)?)
}

/// Name used in parse errors: just the file name, not the full path
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Iterate the data rows of a CSV source, deserializing each into `T`
fn read_rows<T, R>(reader: R, file: &str) -> Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
    R: Read,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row = record
            .deserialize(None)
            .map_err(|e| DataLoadError::ParseError {
                file: file.to_string(),
                line,
                reason: e.to_string(),
            })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Parse the movies.csv file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    read_movies(open(path)?, &file_label(path))
}

/// Parse movies from any CSV source
///
/// `file` is only used to label errors.
pub fn read_movies<R: Read>(reader: R, file: &str) -> Result<Vec<Movie>> {
    let rows: Vec<MovieRow> = read_rows(reader, file)?;

    let movies = rows
        .into_iter()
        .map(|(id, title, genres)| Movie {
            id,
            year: extract_year_from_title(&title),
            genres: parse_genres(&genres),
            title,
        })
        .collect();
    Ok(movies)
}

/// Parse the ratings.csv file
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    read_ratings(open(path)?, &file_label(path))
}

/// Parse ratings from any CSV source
///
/// `file` is only used to label errors.
pub fn read_ratings<R: Read>(reader: R, file: &str) -> Result<Vec<Rating>> {
    let rows: Vec<RatingRow> = read_rows(reader, file)?;
    let mut ratings = Vec::with_capacity(rows.len());

    for (user_id, movie_id, rating, timestamp) in rows {
        if !rating.is_finite() {
            return Err(DataLoadError::InvalidValue {
                field: "rating".to_string(),
                value: rating.to_string(),
            });
        }
        ratings.push(Rating {
            user_id,
            movie_id,
            rating,
            timestamp: timestamp_from_secs(timestamp)?,
        });
    }
    Ok(ratings)
}

/// Convert Unix seconds (possibly fractional) into a UTC timestamp
fn timestamp_from_secs(secs: f64) -> Result<DateTime<Utc>> {
    let invalid = || DataLoadError::InvalidValue {
        field: "timestamp".to_string(),
        value: secs.to_string(),
    };
    if !secs.is_finite() {
        return Err(invalid());
    }

    let whole = secs.floor();
    let nanos = (((secs - whole) * 1e9) as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos).ok_or_else(invalid)
}

/// Extract year from movie title
///
/// Example: "Toy Story (1995)" -> Some(1995)
///          "Movie Title" -> None
fn extract_year_from_title(title: &str) -> Option<u16> {
    let inner = title.trim_end().strip_suffix(')')?;
    let open = inner.rfind('(')?;
    inner[open + 1..].trim().parse().ok()
}

/// Parse pipe-separated genres
///
/// Example: "Action|Adventure|Sci-Fi" -> ["Action", "Adventure", "Sci-Fi"]
fn parse_genres(s: &str) -> Vec<String> {
    if s.trim() == NO_GENRES {
        return Vec::new();
    }
    s.split('|')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}
