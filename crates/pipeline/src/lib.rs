//! Pipeline for turning a neighbour's ratings into recommendations.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - `recommend_from_neighbour`, the end-to-end flow used by the CLI
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{recommend_from_neighbour, PERFECT_RATING};
//!
//! let neighbours = recommender.similar_users(user_id, Some(10))?;
//! let picks = recommend_from_neighbour(&recommender, user_id, neighbours[0].user_id, PERFECT_RATING)?;
//! for pick in picks {
//!     println!("{:?}: {}", pick.title, pick.average);
//! }
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod recommend;
pub mod traits;
pub mod types;
pub mod user_context;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use recommend::{PERFECT_RATING, Recommendation, recommend_from_neighbour};
pub use traits::Filter;
pub use types::{Candidate, UserContext};
