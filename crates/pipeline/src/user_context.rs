//! Helpers to build pipeline inputs from the DataIndex.

use crate::types::{Candidate, UserContext};
use anyhow::{anyhow, Result};
use data_loader::{DataIndex, UserId};

/// Build a UserContext for `user_id`
///
/// Fails if the user has no ratings.
pub fn build_user_context(data_index: &DataIndex, user_id: UserId) -> Result<UserContext> {
    let ratings = data_index
        .user_ratings(user_id)
        .ok_or_else(|| anyhow!("User {} not found", user_id))?;

    let mut context = UserContext::new(user_id);
    context.watched_movies.extend(ratings.keys().copied());
    Ok(context)
}

/// Every movie the neighbour rated, as candidates
///
/// Fails if the neighbour has no ratings.
pub fn neighbour_candidates(data_index: &DataIndex, neighbour_id: UserId) -> Result<Vec<Candidate>> {
    let ratings = data_index
        .user_ratings(neighbour_id)
        .ok_or_else(|| anyhow!("User {} not found", neighbour_id))?;

    Ok(ratings
        .values()
        .map(|r| Candidate::new(r.movie_id, r.rating))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use data_loader::Rating;

    fn create_test_index() -> DataIndex {
        let ratings = vec![
            Rating::new(1, 1, 5.0, DateTime::default()),
            Rating::new(1, 2, 3.0, DateTime::default()),
            Rating::new(2, 3, 4.5, DateTime::default()),
        ];
        DataIndex::from_records(Vec::new(), ratings)
    }

    #[test]
    fn test_build_user_context_basic() {
        let index = create_test_index();
        let context = build_user_context(&index, 1).unwrap();

        assert_eq!(context.user_id, 1);
        assert_eq!(context.watched_movies.len(), 2);
        assert!(context.watched_movies.contains(&1));
        assert!(context.watched_movies.contains(&2));
    }

    #[test]
    fn test_user_not_found() {
        let index = create_test_index();
        assert!(build_user_context(&index, 999).is_err());
        assert!(neighbour_candidates(&index, 999).is_err());
    }

    #[test]
    fn test_neighbour_candidates() {
        let index = create_test_index();
        let candidates = neighbour_candidates(&index, 2).unwrap();

        assert_eq!(candidates, vec![Candidate::new(3, 4.5)]);
    }
}
