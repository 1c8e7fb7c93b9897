//! Where the loader finds its input files.

use std::path::{Path, PathBuf};

/// Default location of the MovieLens "latest-small" dataset
pub const DEFAULT_DATA_DIR: &str = "data/ml-latest-small";

/// Paths to the two input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub ratings_path: PathBuf,
    pub movies_path: PathBuf,
}

impl DataConfig {
    pub fn new(ratings_path: impl Into<PathBuf>, movies_path: impl Into<PathBuf>) -> Self {
        Self {
            ratings_path: ratings_path.into(),
            movies_path: movies_path.into(),
        }
    }

    /// `ratings.csv` and `movies.csv` inside `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join("ratings.csv"), dir.join("movies.csv"))
    }

    pub fn with_ratings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ratings_path = path.into();
        self
    }

    pub fn with_movies_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.movies_path = path.into();
        self
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::from_dir(DEFAULT_DATA_DIR)
    }
}
