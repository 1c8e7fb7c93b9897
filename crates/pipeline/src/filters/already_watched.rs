//! Filter to remove movies the user has already rated.
//!
//! This is typically the first filter in the pipeline, as there's no
//! point in recommending movies the user has already seen.

use crate::traits::Filter;
use crate::types::{Candidate, UserContext};
use anyhow::Result;

/// Removes candidates that appear in `UserContext::watched_movies`.
pub struct AlreadyWatchedFilter;

impl Filter for AlreadyWatchedFilter {
    fn name(&self) -> &str {
        "AlreadyWatchedFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &UserContext) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| !context.watched_movies.contains(&candidate.movie_id))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_watched_filter() {
        let mut context = UserContext::new(1);
        context.watched_movies.insert(100);
        context.watched_movies.insert(200);

        let candidates = vec![
            Candidate::new(100, 5.0),
            Candidate::new(101, 5.0),
            Candidate::new(200, 4.0),
            Candidate::new(300, 3.0),
        ];

        let filtered = AlreadyWatchedFilter.apply(candidates, &context).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].movie_id, 101);
        assert_eq!(filtered[1].movie_id, 300);
    }
}
