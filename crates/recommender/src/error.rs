//! Error types for the recommender crate.

use data_loader::{DataLoadError, MovieId, UserId};
use thiserror::Error;

/// Errors surfaced by engine queries
///
/// Queries are pure functions over a static index, so every error here is
/// deterministic: asking the same question again gives the same failure.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The user has no ratings in the index
    #[error("UserId {user_id} not found")]
    UserNotFound { user_id: UserId },

    /// A plain average was requested for a movie nobody rated
    #[error("Movie {movie_id} has no ratings")]
    NoRatings { movie_id: MovieId },

    /// Engine configuration rejected at construction time
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    /// The dataset could not be loaded
    #[error(transparent)]
    Load(#[from] DataLoadError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;
