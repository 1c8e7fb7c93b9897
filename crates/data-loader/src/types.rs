//! Core domain types for the MovieLens dataset.
//!
//! This module defines the records produced by the parser and the
//! `DataIndex` that holds them for the lifetime of the process:
//! - Type aliases for domain clarity (UserId, MovieId)
//! - Movie and Rating records
//! - The rating index, keyed both by user and by movie

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with movie IDs

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

// =============================================================================
// Movie-related Types
// =============================================================================

/// Represents a movie in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Year extracted from title (e.g., "Toy Story (1995)")
    pub year: Option<u16>,
    /// Genres in the order they appear in the source file
    pub genres: Vec<String>,
}

impl Movie {
    /// Genres joined for display, e.g. "Adventure, Animation, Children"
    pub fn genre_display(&self) -> String {
        self.genres.join(", ")
    }
}

// =============================================================================
// Rating Type
// =============================================================================

/// Represents a single rating from a user for a movie
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value, typically 0.5 to 5.0 in half steps
    pub rating: f64,
    /// When the rating was made
    pub timestamp: DateTime<Utc>,
}

impl Rating {
    pub fn new(user_id: UserId, movie_id: MovieId, rating: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id,
            movie_id,
            rating,
            timestamp,
        }
    }
}

// =============================================================================
// DataIndex - The Core In-Memory Database
// =============================================================================

/// Ratings made by one user, keyed by movie
pub type UserRatings = HashMap<MovieId, Rating>;

/// Main data structure that holds the movie catalog and the rating index.
///
/// Ratings are stored twice: once per user and once per movie. Both maps are
/// written by the same insert, so a (user, movie) pair always resolves to the
/// same record in either direction, and a later rating for the same pair
/// replaces the earlier one in both.
///
/// A built index is never mutated; the insert methods are crate-private and
/// only used while loading.
#[derive(Debug, Default)]
pub struct DataIndex {
    // Movie catalog
    pub(crate) movies: HashMap<MovieId, Movie>,

    /// All ratings made by each user
    pub(crate) user_ratings: HashMap<UserId, UserRatings>,
    /// All ratings received by each movie
    pub(crate) movie_ratings: HashMap<MovieId, HashMap<UserId, Rating>>,
}

impl DataIndex {
    /// Creates a new, empty DataIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from already-parsed records.
    ///
    /// Records are inserted in iteration order, so for duplicate
    /// (user, movie) ratings the last one wins. Ratings may reference movies
    /// that are not in the catalog.
    pub fn from_records<M, R>(movies: M, ratings: R) -> Self
    where
        M: IntoIterator<Item = Movie>,
        R: IntoIterator<Item = Rating>,
    {
        let mut index = Self::new();
        for movie in movies {
            index.insert_movie(movie);
        }
        for rating in ratings {
            index.insert_rating(rating);
        }
        index
    }

    // Getters - These return references (&T) into the index

    /// Get a movie by ID
    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Iterate over the whole movie catalog, in no particular order
    pub fn movies(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.movies.values()
    }

    /// Get all ratings made by a user, keyed by movie.
    ///
    /// Returns `None` if the user has no ratings at all.
    pub fn user_ratings(&self, user_id: UserId) -> Option<&UserRatings> {
        self.user_ratings.get(&user_id)
    }

    /// Look up the rating a user gave a movie
    pub fn rating(&self, user_id: UserId, movie_id: MovieId) -> Option<&Rating> {
        self.user_ratings.get(&user_id)?.get(&movie_id)
    }

    /// All ratings for a movie across all users.
    ///
    /// The iterator is derived fresh from the index on each call. An unknown
    /// movie yields nothing.
    pub fn ratings_for_movie(&self, movie_id: MovieId) -> impl Iterator<Item = &Rating> + '_ {
        self.movie_ratings
            .get(&movie_id)
            .into_iter()
            .flat_map(|ratings| ratings.values())
    }

    /// Every user with at least one rating
    pub fn user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.user_ratings.keys().copied()
    }

    /// Whether the user has any ratings
    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.user_ratings.contains_key(&user_id)
    }

    // Inserts - only used while building

    pub(crate) fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    pub(crate) fn insert_rating(&mut self, rating: Rating) {
        self.user_ratings
            .entry(rating.user_id)
            .or_default()
            .insert(rating.movie_id, rating);

        self.movie_ratings
            .entry(rating.movie_id)
            .or_default()
            .insert(rating.user_id, rating);
    }

    /// Get (users, movies, ratings) counts for logging
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_ratings = self.user_ratings.values().map(|r| r.len()).sum();
        (self.user_ratings.len(), self.movies.len(), total_ratings)
    }
}
