//! Filter implementations for the candidate pipeline.

pub mod already_watched;
pub mod neighbour_rating;

// Re-export for convenience
pub use already_watched::AlreadyWatchedFilter;
pub use neighbour_rating::NeighbourRatingFilter;
