//! Per-movie quality scores.
//!
//! Two flavours:
//! - `simple_average`: plain mean of a movie's ratings; fails for unrated movies
//! - `smoothed_scores`: Bayesian-style mean pulled toward a prior, defined for
//!   every movie in the catalog
//!
//! The smoothed score is `(c * m + sum) / (c + count)`: `c` phantom ratings of
//! value `m` are mixed in with the real ones. A single 5-star rating moves a
//! movie only a little, while thousands of consistent 4.5s dominate the prior.

use crate::error::{EngineError, Result};
use data_loader::{DataIndex, MovieId};
use serde::Serialize;

/// Smoothed score of one catalog movie
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovieScore {
    pub movie_id: MovieId,
    pub score: f64,
    pub rating_count: usize,
}

/// Sum and count of all ratings for a movie
fn rating_totals(index: &DataIndex, movie_id: MovieId) -> (f64, usize) {
    index
        .ratings_for_movie(movie_id)
        .fold((0.0, 0), |(sum, count), r| (sum + r.rating, count + 1))
}

/// Arithmetic mean and count of a movie's ratings
///
/// Returns `EngineError::NoRatings` when nobody rated the movie, including
/// movies that are not in the catalog at all.
pub fn simple_average(index: &DataIndex, movie_id: MovieId) -> Result<(f64, usize)> {
    let (sum, count) = rating_totals(index, movie_id);
    if count == 0 {
        return Err(EngineError::NoRatings { movie_id });
    }
    Ok((sum / count as f64, count))
}

/// Smoothed score for a movie with `count` ratings summing to `sum`
fn smoothed(confidence: f64, prior_mean: f64, sum: f64, count: usize) -> f64 {
    if count == 0 {
        // Exactly the prior, without a c*m/c round trip
        return prior_mean;
    }
    (confidence * prior_mean + sum) / (confidence + count as f64)
}

/// Lazily score every movie in the catalog
///
/// Yields one `MovieScore` per catalog movie, rated or not, in no particular
/// order. `confidence` must be positive (see `EngineConfig::validate`).
pub fn smoothed_scores(
    index: &DataIndex,
    confidence: f64,
    prior_mean: f64,
) -> impl Iterator<Item = MovieScore> + '_ {
    index.movies().map(move |movie| {
        let (sum, count) = rating_totals(index, movie.id);
        MovieScore {
            movie_id: movie.id,
            score: smoothed(confidence, prior_mean, sum, count),
            rating_count: count,
        }
    })
}
