use ranking::RankError;
use serde::{Deserialize, Serialize};
use store::StoreError;
use thiserror::Error;

/// Engine-level configuration shared by all recommendation kinds.
///
/// Cheap to clone and serde-friendly so deployments can embed it in their
/// own configuration files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendConfig {
    /// Dimension of the shared embedding space. Must stay in sync with the
    /// external embedding producer that populates job vectors in the store.
    #[serde(default = "RecommendConfig::default_embedding_dim")]
    pub embedding_dim: usize,
    /// Store-side bound on the "people you may know" candidate pool,
    /// independent of the per-request result limit.
    #[serde(default = "RecommendConfig::default_candidate_pool")]
    pub candidate_pool: usize,
}

impl RecommendConfig {
    pub(crate) fn default_embedding_dim() -> usize {
        projection::EMBEDDING_DIM
    }

    pub(crate) fn default_candidate_pool() -> usize {
        200
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), RecommendError> {
        if self.embedding_dim == 0 {
            return Err(RecommendError::InvalidConfig(
                "embedding_dim must be greater than zero".into(),
            ));
        }
        if self.candidate_pool == 0 {
            return Err(RecommendError::InvalidConfig(
                "candidate_pool must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            embedding_dim: Self::default_embedding_dim(),
            candidate_pool: Self::default_candidate_pool(),
        }
    }
}

/// A recommended user (friend suggestion or "people you may know").
///
/// `score` is the mutual-friend count on the friend path and the Pearson
/// correlation on the people-you-may-know path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedUser {
    pub user_id: i64,
    pub name: Option<String>,
    pub score: f64,
}

/// A recommended job posting; `score` is the cosine similarity between the
/// user's embedding and the job embedding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedJob {
    pub job_id: String,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub posting_url: Option<String>,
    pub normalized_salary: Option<f64>,
    pub score: f64,
}

/// Errors produced by the recommendation layer.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Invalid engine configuration or request parameter.
    #[error("invalid recommend config: {0}")]
    InvalidConfig(String),
    /// A store query failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// The ranking layer rejected its configuration.
    #[error("rank error: {0}")]
    Rank(#[from] RankError),
}
