//! Values passed through the filter pipeline.

use data_loader::{MovieId, UserId};
use std::collections::HashSet;

/// A movie proposed for recommendation, taken from a neighbour's ratings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub movie_id: MovieId,
    /// What the neighbour rated it
    pub neighbour_rating: f64,
}

impl Candidate {
    pub fn new(movie_id: MovieId, neighbour_rating: f64) -> Self {
        Self {
            movie_id,
            neighbour_rating,
        }
    }
}

/// What the filters need to know about the user being recommended to
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    pub user_id: UserId,
    /// Every movie the user has rated
    pub watched_movies: HashSet<MovieId>,
}

impl UserContext {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            watched_movies: HashSet::new(),
        }
    }
}
