//! DataIndex loading.
//!
//! Parses both input files and builds the in-memory index. The two files are
//! independent, so they are parsed side by side with `rayon::join`; records
//! are then inserted sequentially in file order.

use crate::config::DataConfig;
use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::time::Instant;
use tracing::{info, instrument};

impl DataIndex {
    /// Load the dataset described by `config`
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Parse movies.csv and ratings.csv
    /// 2. Insert movies, then ratings, in file order
    #[instrument(
        skip_all,
        fields(
            ratings = %config.ratings_path.display(),
            movies = %config.movies_path.display(),
        )
    )]
    pub fn load(config: &DataConfig) -> Result<Self> {
        let start = Instant::now();

        let (movies, ratings) = rayon::join(
            || parser::parse_movies(&config.movies_path),
            || parser::parse_ratings(&config.ratings_path),
        );
        let movies = movies?;
        let ratings = ratings?;
        info!(
            "Parsed {} movies and {} ratings",
            movies.len(),
            ratings.len()
        );

        let index = DataIndex::from_records(movies, ratings);

        let (users, movies, ratings) = index.counts();
        info!(
            users,
            movies,
            ratings,
            elapsed = ?start.elapsed(),
            "DataIndex built"
        );
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use std::path::Path;

    fn rating(user_id: UserId, movie_id: MovieId, value: f64) -> Rating {
        Rating::new(user_id, movie_id, value, DateTime::default())
    }

    fn movie(id: MovieId, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            year: None,
            genres: vec!["Drama".to_string()],
        }
    }

    #[test]
    fn test_duplicate_rating_last_wins() {
        let index = DataIndex::from_records(
            vec![movie(10, "Ten")],
            vec![rating(1, 10, 2.0), rating(1, 10, 4.5)],
        );

        assert_eq!(index.rating(1, 10).unwrap().rating, 4.5);
        let for_movie: Vec<f64> = index.ratings_for_movie(10).map(|r| r.rating).collect();
        assert_eq!(for_movie, vec![4.5]);
        assert_eq!(index.counts(), (1, 1, 1));
    }

    #[test]
    fn test_ratings_for_movie_across_users() {
        let index = DataIndex::from_records(
            vec![movie(10, "Ten"), movie(20, "Twenty")],
            vec![rating(1, 10, 4.0), rating(2, 10, 5.0), rating(2, 20, 1.0)],
        );

        let mut values: Vec<f64> = index.ratings_for_movie(10).map(|r| r.rating).collect();
        values.sort_by(f64::total_cmp);
        assert_eq!(values, vec![4.0, 5.0]);

        // Re-derived on every call
        assert_eq!(index.ratings_for_movie(10).count(), 2);
        assert_eq!(index.ratings_for_movie(10).count(), 2);
    }

    #[test]
    fn test_rating_for_movie_outside_catalog() {
        let index = DataIndex::from_records(Vec::new(), vec![rating(1, 99, 3.0)]);

        assert!(index.movie(99).is_none());
        assert_eq!(index.ratings_for_movie(99).count(), 1);
        assert!(index.contains_user(1));
    }

    #[test]
    fn test_load_dataset() {
        // This test requires the actual dataset files
        // Place ml-latest-small in ../../data/ml-latest-small/
        let data_dir = Path::new("../../data/ml-latest-small");

        if data_dir.exists() {
            let index = DataIndex::load(&DataConfig::from_dir(data_dir)).unwrap();
            let (users, movies, ratings) = index.counts();

            assert!(users > 0);
            assert!(movies > 0);
            assert!(ratings >= users);
        }
    }
}
