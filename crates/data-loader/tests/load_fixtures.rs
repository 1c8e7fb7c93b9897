//! Loads the small CSV fixtures end to end.
//!
//! Fixture layout (see tests/fixtures):
//! - 5 movies, movie 5 has no ratings and no genres
//! - 4 users; user 3 rates movie 4 twice and rates movie 99, which is not in the catalog

use data_loader::{DataConfig, DataIndex, DataLoadError};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixtures() -> DataIndex {
    DataIndex::load(&DataConfig::from_dir(fixtures_dir())).unwrap()
}

#[test]
fn test_counts() {
    let index = load_fixtures();
    let (users, movies, ratings) = index.counts();

    assert_eq!(users, 4);
    assert_eq!(movies, 5);
    // 10 rows, one of which is a duplicate (user 3, movie 4)
    assert_eq!(ratings, 9);
}

#[test]
fn test_movie_records() {
    let index = load_fixtures();

    let toy_story = index.movie(1).unwrap();
    assert_eq!(toy_story.title, "Toy Story (1995)");
    assert_eq!(toy_story.year, Some(1995));
    assert_eq!(
        toy_story.genre_display(),
        "Adventure, Animation, Children, Comedy, Fantasy"
    );

    let president = index.movie(3).unwrap();
    assert_eq!(president.title, "American President, The (1995)");

    assert!(index.movie(5).unwrap().genres.is_empty());
}

#[test]
fn test_duplicate_rating_last_loaded_wins() {
    let index = load_fixtures();

    let rating = index.rating(3, 4).unwrap();
    assert_eq!(rating.rating, 2.0);
    assert_eq!(rating.timestamp.timestamp(), 964980100);
}

#[test]
fn test_rating_outside_catalog_is_kept() {
    let index = load_fixtures();

    assert!(index.movie(99).is_none());
    assert_eq!(index.ratings_for_movie(99).count(), 1);
}

#[test]
fn test_ratings_for_movie() {
    let index = load_fixtures();

    let mut values: Vec<f64> = index.ratings_for_movie(1).map(|r| r.rating).collect();
    values.sort_by(f64::total_cmp);
    assert_eq!(values, vec![4.0, 5.0]);
    assert_eq!(index.ratings_for_movie(5).count(), 0);
}

#[test]
fn test_missing_ratings_file() {
    let config = DataConfig::from_dir(fixtures_dir()).with_ratings_path("nope/ratings.csv");
    let err = DataIndex::load(&config).unwrap_err();

    assert!(matches!(err, DataLoadError::FileNotFound { .. }));
}
