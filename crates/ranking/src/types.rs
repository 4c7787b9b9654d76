use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier for the similarity metric used to score candidates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Sample Pearson correlation over sparse feature vectors.
    Pearson,
    /// Cosine similarity over dense embeddings.
    Cosine,
}

impl Metric {
    /// Score a candidate vector against the target, or `None` when no valid
    /// score exists.
    ///
    /// Metric preconditions (empty input, length mismatch, zero norm) and
    /// non-finite results all collapse to `None`: at the ranking layer an
    /// unscoreable candidate is excluded, never an error.
    pub fn score(&self, target: &[f64], candidate: &[f64]) -> Option<f64> {
        let result = match self {
            Metric::Pearson => similarity::pearson(target, candidate),
            Metric::Cosine => similarity::cosine(target, candidate),
        };
        match result {
            Ok(score) if score.is_finite() => Some(score),
            _ => None,
        }
    }
}

/// A candidate proposed by the store, prior to scoring.
///
/// `id` is opaque to the ranker (integer user id, string job id); `meta`
/// carries whatever display fields the orchestrator wants back alongside the
/// score. The vector is optional because partial store data is expected —
/// candidates without one are silently skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate<I, M> {
    pub id: I,
    pub vector: Option<Vec<f64>>,
    pub meta: M,
}

/// A candidate that survived validation and scoring.
///
/// `score` is always finite and within the configured metric's range;
/// unscoreable candidates are never materialized as `ScoredCandidate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate<I, M> {
    pub id: I,
    pub meta: M,
    pub score: f64,
}

/// Configuration for a single ranking pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankConfig {
    /// Metric used to score candidates against the target vector.
    pub metric: Metric,
    /// Maximum number of results returned to the caller. Must be positive.
    #[serde(default = "RankConfig::default_limit")]
    pub limit: usize,
    /// Drop candidates whose score is not strictly positive. Used by the
    /// job path, where zero similarity means no relevance at all.
    #[serde(default)]
    pub positive_only: bool,
}

impl RankConfig {
    pub(crate) fn default_limit() -> usize {
        10
    }

    /// Convenience constructor with the default limit.
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            limit: Self::default_limit(),
            positive_only: false,
        }
    }

    /// Replace the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enable the strictly-positive score filter.
    pub fn positive_only(mut self) -> Self {
        self.positive_only = true;
        self
    }

    /// Validate the configuration for a single ranking pass.
    pub fn validate(&self) -> Result<(), RankError> {
        if self.limit == 0 {
            return Err(RankError::InvalidConfig(
                "limit must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Errors produced by the ranking layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankError {
    /// Invalid ranking configuration supplied by the caller.
    #[error("invalid rank config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Metric::Pearson).unwrap();
        assert_eq!(json, "\"pearson\"");
        let metric: Metric = serde_json::from_str("\"cosine\"").unwrap();
        assert_eq!(metric, Metric::Cosine);
    }

    #[test]
    fn metric_score_skips_mismatched_lengths() {
        assert_eq!(Metric::Pearson.score(&[1.0, 2.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(Metric::Cosine.score(&[1.0, 2.0], &[1.0]), None);
    }

    #[test]
    fn metric_score_skips_zero_norm_cosine() {
        assert_eq!(Metric::Cosine.score(&[1.0, 0.0], &[0.0, 0.0]), None);
    }

    #[test]
    fn metric_score_keeps_zero_variance_pearson() {
        // Zero variance degrades to a 0.0 correlation, not to exclusion.
        assert_eq!(Metric::Pearson.score(&[1.0, 1.0], &[1.0, 2.0]), Some(0.0));
    }

    #[test]
    fn metric_score_skips_non_finite_input() {
        assert_eq!(
            Metric::Cosine.score(&[f64::NAN, 1.0], &[1.0, 1.0]),
            None
        );
        assert_eq!(
            Metric::Pearson.score(&[f64::INFINITY, 1.0], &[1.0, 2.0]),
            None
        );
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = RankConfig::new(Metric::Pearson);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.limit, RankConfig::default_limit());
        assert!(!cfg.positive_only);
    }

    #[test]
    fn zero_limit_rejected() {
        let cfg = RankConfig::new(Metric::Cosine).with_limit(0);
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            RankError::InvalidConfig(msg) => assert!(msg.contains("limit")),
        }
    }

    #[test]
    fn builder_sets_positive_only() {
        let cfg = RankConfig::new(Metric::Cosine).with_limit(5).positive_only();
        assert_eq!(cfg.limit, 5);
        assert!(cfg.positive_only);
    }

    #[test]
    fn rank_config_serde_defaults() {
        let cfg: RankConfig = serde_json::from_str("{\"metric\":\"cosine\"}").unwrap();
        assert_eq!(cfg.metric, Metric::Cosine);
        assert_eq!(cfg.limit, RankConfig::default_limit());
        assert!(!cfg.positive_only);
    }
}
