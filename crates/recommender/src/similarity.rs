//! User-to-user similarity from shared ratings.
//!
//! ## Algorithm
//! 1. Intersect the movies two users have rated
//! 2. Sum the squared rating differences over that intersection
//! 3. Turn the Euclidean distance into a similarity: `1 / (1 + distance)`
//!
//! Two users with no movie in common are *incomparable*, which is not the
//! same thing as dissimilar. `similarity` reports that as `None`;
//! `compare_users` keeps the numeric form and reports it as `0.0`.
//!
//! The score is an inverse distance, not a correlation, so pairs with very
//! different overlap sizes are not strictly comparable.

use crate::error::{EngineError, Result};
use crate::selection::top_n;
use data_loader::{DataIndex, MovieId, UserId, UserRatings};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Shared movies mapped to (first user's rating, second user's rating)
pub type SharedRatings = HashMap<MovieId, (f64, f64)>;

/// How shared ratings are turned into a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityMetric {
    /// `1 / (1 + sqrt(sum of squared differences))`, in (0, 1].
    /// Self-similarity is 1.
    #[default]
    Euclidean,
    /// The Euclidean score multiplied by the number of shared movies.
    /// Self-similarity is the user's rating count.
    OverlapWeighted,
}

impl SimilarityMetric {
    /// Score a set of (rating, rating) pairs, `None` if there are none
    pub fn score<I>(self, pairs: I) -> Option<f64>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (shared, sum_of_squares) = pairs
            .into_iter()
            .fold((0usize, 0.0), |(shared, acc), (a, b)| {
                (shared + 1, acc + (a - b).powi(2))
            });
        if shared == 0 {
            return None;
        }

        let inverse_distance = 1.0 / (1.0 + sum_of_squares.sqrt());
        Some(match self {
            SimilarityMetric::Euclidean => inverse_distance,
            SimilarityMetric::OverlapWeighted => inverse_distance * shared as f64,
        })
    }
}

/// One entry of a similar-users list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarUser {
    pub user_id: UserId,
    pub similarity: f64,
}

fn ratings_of(index: &DataIndex, user_id: UserId) -> Result<&UserRatings> {
    index
        .user_ratings(user_id)
        .ok_or(EngineError::UserNotFound { user_id })
}

/// Rating pairs for every movie both users rated, keeping argument order in
/// the pair. Walks the smaller of the two maps.
fn shared_pairs<'a>(
    first: &'a UserRatings,
    second: &'a UserRatings,
) -> impl Iterator<Item = (MovieId, (f64, f64))> + 'a {
    let swapped = first.len() > second.len();
    let (small, large) = if swapped {
        (second, first)
    } else {
        (first, second)
    };

    small.iter().filter_map(move |(&movie_id, a)| {
        let b = large.get(&movie_id)?;
        let pair = if swapped {
            (b.rating, a.rating)
        } else {
            (a.rating, b.rating)
        };
        Some((movie_id, pair))
    })
}

/// Movies both users rated, with each user's rating
///
/// Fails with `UserNotFound` if either user has no ratings (`user1` is
/// checked first). An empty intersection is a valid, empty result.
pub fn shared_ratings(index: &DataIndex, user1: UserId, user2: UserId) -> Result<SharedRatings> {
    let first = ratings_of(index, user1)?;
    let second = ratings_of(index, user2)?;
    Ok(shared_pairs(first, second).collect())
}

/// Similarity of two users, `None` when they share no movies
pub fn similarity(
    index: &DataIndex,
    metric: SimilarityMetric,
    user1: UserId,
    user2: UserId,
) -> Result<Option<f64>> {
    let first = ratings_of(index, user1)?;
    let second = ratings_of(index, user2)?;
    Ok(metric.score(shared_pairs(first, second).map(|(_, pair)| pair)))
}

/// Similarity of two users with `0.0` standing in for "no shared movies"
pub fn compare_users(
    index: &DataIndex,
    metric: SimilarityMetric,
    user1: UserId,
    user2: UserId,
) -> Result<f64> {
    Ok(similarity(index, metric, user1, user2)?.unwrap_or(0.0))
}

/// Similarity of `user_id` to every other comparable user
///
/// Excludes the user themself and every user with no movie in common.
#[instrument(skip(index))]
pub fn similarity_map(
    index: &DataIndex,
    metric: SimilarityMetric,
    user_id: UserId,
) -> Result<HashMap<UserId, f64>> {
    let target = ratings_of(index, user_id)?;

    let similarities: HashMap<UserId, f64> = index
        .user_ids()
        .filter(|&other| other != user_id)
        .filter_map(|other| {
            let ratings = index.user_ratings(other)?;
            let score = metric.score(shared_pairs(target, ratings).map(|(_, pair)| pair))?;
            Some((other, score))
        })
        .filter(|&(_, score)| score != 0.0)
        .collect();

    debug!(
        "User {} is comparable with {} users",
        user_id,
        similarities.len()
    );
    Ok(similarities)
}

/// The `n` users most similar to `user_id`, highest first
pub fn top_similar_users(
    index: &DataIndex,
    metric: SimilarityMetric,
    user_id: UserId,
    n: usize,
) -> Result<Vec<SimilarUser>> {
    let similarities = similarity_map(index, metric, user_id)?;
    let candidates = similarities
        .into_iter()
        .map(|(user_id, similarity)| SimilarUser {
            user_id,
            similarity,
        });
    Ok(top_n(candidates, n, |user| user.similarity))
}
