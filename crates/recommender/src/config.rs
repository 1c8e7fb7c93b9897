//! Tunables for scoring and similarity.

use crate::error::{EngineError, Result};
use crate::similarity::SimilarityMetric;
use serde::{Deserialize, Serialize};

/// Engine settings, passed explicitly to [`crate::Recommender::new`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of phantom prior ratings in the smoothed average (`c`)
    pub confidence: f64,
    /// Value the phantom ratings take (`m`)
    pub prior_mean: f64,
    /// How two users' shared ratings become a similarity score
    pub metric: SimilarityMetric,
    /// List length for `top_rated` when the caller has no preference
    pub top_rated_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence: 11.0,
            prior_mean: 3.0,
            metric: SimilarityMetric::Euclidean,
            top_rated_limit: 10,
        }
    }
}

impl EngineConfig {
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_prior_mean(mut self, prior_mean: f64) -> Self {
        self.prior_mean = prior_mean;
        self
    }

    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_top_rated_limit(mut self, limit: usize) -> Self {
        self.top_rated_limit = limit;
        self
    }

    /// The smoothed average divides by `confidence + count`, so `confidence`
    /// must be strictly positive for unrated movies to score at all.
    pub fn validate(&self) -> Result<()> {
        if !(self.confidence.is_finite() && self.confidence > 0.0) {
            return Err(EngineError::InvalidConfig {
                field: "confidence".to_string(),
                reason: format!("must be a positive number, got {}", self.confidence),
            });
        }
        if !self.prior_mean.is_finite() {
            return Err(EngineError::InvalidConfig {
                field: "prior_mean".to_string(),
                reason: format!("must be finite, got {}", self.prior_mean),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.confidence, 11.0);
        assert_eq!(config.prior_mean, 3.0);
        assert_eq!(config.metric, SimilarityMetric::Euclidean);
        assert_eq!(config.top_rated_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_confidence() {
        let config = EngineConfig::default().with_confidence(0.0);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));

        let config = EngineConfig::default().with_confidence(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_infinite_prior() {
        let config = EngineConfig::default().with_prior_mean(f64::INFINITY);
        assert!(config.validate().is_err());
    }
}
