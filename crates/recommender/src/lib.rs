//! # Recommender Crate
//!
//! The in-memory analytics engine over a loaded `DataIndex`.
//!
//! ## Components
//!
//! ### Scoring
//! Per-movie quality: a plain average, and a smoothed (Bayesian-style)
//! average that pulls movies with few ratings toward a prior.
//!
//! ### Similarity
//! User-to-user similarity from the ratings two users share, as an inverse
//! Euclidean distance.
//!
//! ### Selection
//! Bounded top-N selection used by both of the above.
//!
//! ### Query facade
//! `Recommender` composes the pieces into `average_rating`, `top_rated` and
//! `similar_users`.
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DataConfig;
//! use recommender::{EngineConfig, Recommender};
//!
//! let recommender = Recommender::load(&DataConfig::default(), EngineConfig::default())?;
//!
//! println!("{}", recommender.average_rating(1)?);
//! for movie in recommender.top_rated(10) {
//!     println!("{} {:.3}", movie.movie_id, movie.score);
//! }
//! let neighbours = recommender.similar_users(1, Some(10))?;
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod query;
pub mod scoring;
pub mod selection;
pub mod similarity;

// Re-export commonly used types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use query::{AverageRating, Recommender};
pub use scoring::MovieScore;
pub use selection::top_n;
pub use similarity::{SharedRatings, SimilarUser, SimilarityMetric};
