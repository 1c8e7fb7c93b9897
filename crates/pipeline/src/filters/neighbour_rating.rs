//! Filter on how much the neighbour liked a movie.
//!
//! Only movies the neighbour rated at or above a threshold are worth passing
//! on. The interactive CLI uses a threshold of 5.0, i.e. perfect ratings only.

use crate::traits::Filter;
use crate::types::{Candidate, UserContext};
use anyhow::Result;

/// Keeps candidates whose neighbour rating is at least `min_rating`.
pub struct NeighbourRatingFilter {
    min_rating: f64,
}

impl NeighbourRatingFilter {
    /// Create a new NeighbourRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Lowest neighbour rating to keep (5.0 keeps only perfect scores)
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for NeighbourRatingFilter {
    fn name(&self) -> &str {
        "NeighbourRatingFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _context: &UserContext) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| candidate.neighbour_rating >= self.min_rating)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbour_rating_filter() {
        let candidates = vec![
            Candidate::new(1, 5.0),
            Candidate::new(2, 4.5),
            Candidate::new(3, 0.5),
            Candidate::new(4, 5.0),
        ];

        let filter = NeighbourRatingFilter::new(5.0);
        let filtered = filter.apply(candidates, &UserContext::new(1)).unwrap();

        let ids: Vec<u32> = filtered.iter().map(|c| c.movie_id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_lower_threshold() {
        let candidates = vec![Candidate::new(1, 4.0), Candidate::new(2, 3.5)];

        let filtered = NeighbourRatingFilter::new(4.0)
            .apply(candidates, &UserContext::new(1))
            .unwrap();
        assert_eq!(filtered, vec![Candidate::new(1, 4.0)]);
    }
}
