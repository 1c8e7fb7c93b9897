//! Recommendations mined from one neighbour's ratings.
//!
//! ## Algorithm
//! 1. Collect everything the current user has rated
//! 2. Take every movie the neighbour rated as a candidate
//! 3. Drop movies the current user already rated
//! 4. Keep movies the neighbour rated at or above the threshold
//! 5. Attach each survivor's title and average rating

use anyhow::{Context, Result};
use data_loader::{MovieId, UserId};
use recommender::{AverageRating, Recommender};
use serde::Serialize;
use tracing::{info, instrument};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{AlreadyWatchedFilter, NeighbourRatingFilter};
use crate::user_context::{build_user_context, neighbour_candidates};

/// Neighbour rating the interactive flow asks for
pub const PERFECT_RATING: f64 = 5.0;

/// A movie recommended on a neighbour's behalf
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub movie_id: MovieId,
    /// `None` when the rating refers to a movie missing from the catalog
    pub title: Option<String>,
    pub neighbour_rating: f64,
    pub average: AverageRating,
}

/// Movies `neighbour_id` rated at least `min_rating` that `user_id` has not
/// rated, ordered by movie id
#[instrument(skip(recommender))]
pub fn recommend_from_neighbour(
    recommender: &Recommender,
    user_id: UserId,
    neighbour_id: UserId,
    min_rating: f64,
) -> Result<Vec<Recommendation>> {
    let index = recommender.index();
    let context = build_user_context(index, user_id)?;
    let candidates = neighbour_candidates(index, neighbour_id)?;

    let pipeline = FilterPipeline::new()
        .add_filter(AlreadyWatchedFilter)
        .add_filter(NeighbourRatingFilter::new(min_rating));
    let mut filtered = pipeline.apply(candidates, &context)?;
    filtered.sort_by_key(|c| c.movie_id);

    let recommendations = filtered
        .into_iter()
        .map(|candidate| {
            let average = recommender
                .average_rating(candidate.movie_id)
                .with_context(|| format!("Failed to average movie {}", candidate.movie_id))?;
            Ok(Recommendation {
                movie_id: candidate.movie_id,
                title: index.movie(candidate.movie_id).map(|m| m.title.clone()),
                neighbour_rating: candidate.neighbour_rating,
                average,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        "User {} gets {} recommendations from user {}",
        user_id,
        recommendations.len(),
        neighbour_id
    );
    Ok(recommendations)
}
