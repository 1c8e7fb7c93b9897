//! # Data Loader Crate
//!
//! This crate loads the MovieLens CSV files and builds the in-memory
//! rating index the recommender queries.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Rating, DataIndex)
//! - **parser**: Parse CSV files into Rust structs
//! - **index**: Load both files and build the index
//! - **config**: Input file locations
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DataConfig, DataIndex};
//!
//! let index = DataIndex::load(&DataConfig::from_dir("data/ml-latest-small"))?;
//!
//! let movie = index.movie(1).unwrap();
//! let rated = index.user_ratings(1).map(|r| r.len()).unwrap_or(0);
//! println!("{} is one of {} movies in the catalog; user 1 rated {}", movie.title, index.counts().1, rated);
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use config::DataConfig;
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    MovieId,
    UserId,
    UserRatings,
    // Core types
    DataIndex,
    Movie,
    Rating,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_index_creation() {
        // Test that we can create an empty DataIndex
        let index = DataIndex::new();
        let (users, movies, ratings) = index.counts();

        assert_eq!(users, 0);
        assert_eq!(movies, 0);
        assert_eq!(ratings, 0);
    }

    #[test]
    fn test_empty_queries() {
        let index = DataIndex::new();

        // Querying non-existent data should return None or nothing
        assert!(index.movie(999).is_none());
        assert!(index.user_ratings(999).is_none());
        assert!(index.rating(999, 1).is_none());
        assert_eq!(index.ratings_for_movie(999).count(), 0);
        assert!(!index.contains_user(999));
    }
}
