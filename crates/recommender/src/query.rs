//! # Query Facade
//!
//! `Recommender` is the one type callers talk to. It owns a shared handle to
//! the read-only index plus the engine settings, and answers three questions:
//! - what is the average rating of a movie?
//! - which movies score highest once smoothed?
//! - which users rate most like a given user?

use std::fmt;
use std::sync::Arc;

use data_loader::{DataConfig, DataIndex, MovieId, UserId};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::scoring::{self, MovieScore};
use crate::selection::top_n;
use crate::similarity::{self, SharedRatings, SimilarUser};

/// Mean rating of a movie together with how many ratings it is based on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AverageRating {
    pub movie_id: MovieId,
    pub mean: f64,
    pub count: usize,
}

impl AverageRating {
    /// Human-readable form, e.g. "Average rating: 4.500 (2 ratings)"
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average rating: {:.3} ({} ratings)",
            self.mean, self.count
        )
    }
}

/// Entry point for all engine queries
#[derive(Debug, Clone)]
pub struct Recommender {
    /// Shared reference to the data index (read-only, so no Mutex needed)
    index: Arc<DataIndex>,
    config: EngineConfig,
}

impl Recommender {
    /// Create a recommender over an already built index
    pub fn new(index: Arc<DataIndex>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { index, config })
    }

    /// Load the dataset from disk and wrap it
    ///
    /// The config is checked before any file is read, so a bad config fails
    /// without paying for the load.
    pub fn load(data: &DataConfig, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let index = DataIndex::load(data)?;
        Self::new(Arc::new(index), config)
    }

    /// Shared handle to the underlying index
    pub fn index(&self) -> &Arc<DataIndex> {
        &self.index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Plain average rating of a movie
    ///
    /// Fails with `EngineError::NoRatings` if nobody rated it.
    #[instrument(skip(self))]
    pub fn average_rating(&self, movie_id: MovieId) -> Result<AverageRating> {
        let (mean, count) = scoring::simple_average(&self.index, movie_id)?;
        Ok(AverageRating {
            movie_id,
            mean,
            count,
        })
    }

    /// The `n` catalog movies with the highest smoothed score, highest first
    #[instrument(skip(self))]
    pub fn top_rated(&self, n: usize) -> Vec<MovieScore> {
        let scores =
            scoring::smoothed_scores(&self.index, self.config.confidence, self.config.prior_mean);
        let top = top_n(scores, n, |s| s.score);
        debug!("Selected {} top-rated movies", top.len());
        top
    }

    /// `top_rated` with the configured `top_rated_limit`
    pub fn top_rated_default(&self) -> Vec<MovieScore> {
        self.top_rated(self.config.top_rated_limit)
    }

    /// Users most similar to `user_id`, highest first
    ///
    /// `Some(n)` keeps the best `n`; `None` returns every comparable user.
    /// Fails with `EngineError::UserNotFound` if the user has no ratings.
    #[instrument(skip(self))]
    pub fn similar_users(&self, user_id: UserId, limit: Option<usize>) -> Result<Vec<SimilarUser>> {
        let metric = self.config.metric;
        let users = match limit {
            Some(n) => similarity::top_similar_users(&self.index, metric, user_id, n)?,
            None => {
                let all = similarity::similarity_map(&self.index, metric, user_id)?;
                let len = all.len();
                let users = all.into_iter().map(|(user_id, similarity)| SimilarUser {
                    user_id,
                    similarity,
                });
                top_n(users, len, |u| u.similarity)
            }
        };
        debug!("Found {} similar users", users.len());
        Ok(users)
    }

    /// Similarity of two users under the configured metric, `0.0` if they
    /// share no movies
    pub fn compare_users(&self, user1: UserId, user2: UserId) -> Result<f64> {
        similarity::compare_users(&self.index, self.config.metric, user1, user2)
    }

    /// Movies both users rated, with each user's rating
    pub fn shared_ratings(&self, user1: UserId, user2: UserId) -> Result<SharedRatings> {
        similarity::shared_ratings(&self.index, user1, user2)
    }
}
