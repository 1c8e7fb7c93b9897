//! Regression values for the MovieLens "latest-small" dataset.
//!
//! These only run when the dataset is present at ../../data/ml-latest-small
//! (relative to this crate). The reference numbers were produced with the
//! overlap-weighted metric, where a user's self-similarity is their rating count.

use data_loader::DataConfig;
use recommender::{EngineConfig, Recommender, SimilarityMetric};
use std::collections::HashMap;
use std::path::PathBuf;

fn reference_recommender() -> Option<Recommender> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/ml-latest-small");
    if !dir.exists() {
        return None;
    }
    let config = EngineConfig::default().with_metric(SimilarityMetric::OverlapWeighted);
    Some(Recommender::load(&DataConfig::from_dir(dir), config).unwrap())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_same_user() {
    let Some(recommender) = reference_recommender() else {
        return;
    };
    let rated = recommender.index().user_ratings(1).unwrap().len();

    assert_eq!(recommender.compare_users(1, 1).unwrap(), 20.0);
    assert_eq!(recommender.compare_users(1, 1).unwrap(), rated as f64);
}

#[test]
fn test_some_similarity() {
    let Some(recommender) = reference_recommender() else {
        return;
    };
    assert_close(recommender.compare_users(1, 73).unwrap(), 2.255135881683525);
}

#[test]
fn test_user_zero_equality() {
    let Some(recommender) = reference_recommender() else {
        return;
    };
    assert_eq!(recommender.compare_users(1, 2).unwrap(), 0.0);
}

#[test]
fn test_user_movie_overlap() {
    let Some(recommender) = reference_recommender() else {
        return;
    };
    let expected: HashMap<u32, (f64, f64)> = [
        (1953, (4.0, 5.0)),
        (2193, (2.0, 3.0)),
        (2968, (1.0, 5.0)),
        (2105, (4.0, 4.0)),
        (1371, (2.5, 4.0)),
    ]
    .into_iter()
    .collect();

    assert_eq!(recommender.shared_ratings(1, 4).unwrap(), expected);
}

#[test]
fn test_similar_users() {
    let Some(recommender) = reference_recommender() else {
        return;
    };
    let similar = recommender.similar_users(1, Some(3)).unwrap();
    let expected = [
        (468, 3.045189340712464),
        (580, 2.756021814145972),
        (73, 2.255135881683525),
    ];

    assert_eq!(similar.len(), expected.len());
    for (user, (user_id, similarity)) in similar.iter().zip(expected) {
        assert_eq!(user.user_id, user_id);
        assert_close(user.similarity, similarity);
    }
}

#[test]
fn test_not_similar() {
    let Some(recommender) = reference_recommender() else {
        return;
    };
    let similar = recommender.similar_users(1, None).unwrap();
    assert!(similar.iter().all(|s| s.user_id != 2));
}
