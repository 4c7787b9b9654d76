//! # Peoplegraph recommenders (`recommend`)
//!
//! ## Purpose
//!
//! `recommend` sits on top of the scoring crates (`similarity` via
//! `ranking`, plus `projection`) and the [`store::GraphStore`] boundary. It
//! composes store queries with the candidate ranker to produce the three
//! recommendation kinds, along with the simple friend-count aggregate:
//!
//! - **Friend recommendations** — the store orders candidates by
//!   mutual-friend count; the engine shapes rows into scored results.
//! - **People you may know** — Pearson correlation over raw feature
//!   vectors, ranked and truncated.
//! - **Job recommendations** — cosine similarity over dense embeddings in
//!   the shared `projection::EMBEDDING_DIM` space; zero or unscoreable
//!   similarity excludes a job outright.
//!
//! ## Core Types
//!
//! - [`Recommender`]: the engine; one instance per store handle, safe to
//!   share across concurrent requests.
//! - [`RecommendConfig`]: engine tuning (embedding dimension, candidate
//!   pool bound).
//! - [`RecommendedUser`] / [`RecommendedJob`]: plain result records handed
//!   to the response-shaping layer.
//! - [`RecommendError`]: invalid configuration or store failure; missing
//!   data is never an error, it degrades to empty results.
//!
//! ## Example
//!
//! ```no_run
//! use recommend::{RecommendConfig, Recommender};
//! use store::MemoryGraph;
//!
//! # async fn run() -> Result<(), recommend::RecommendError> {
//! let graph = MemoryGraph::new();
//! graph.add_user(1, Some("Alice"));
//! graph.add_user(2, Some("Bob"));
//! graph.add_friendship(1, 2);
//!
//! let engine = Recommender::new(graph, RecommendConfig::default())?;
//! if let Some(friends) = engine.recommend_friends(1, 10).await? {
//!     for friend in friends {
//!         println!("{} score={}", friend.user_id, friend.score);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Observability
//!
//! Install a [`RecommendMetrics`] implementation via
//! [`set_recommend_metrics`] to record per-request latency and result
//! counts. This is typically done once during service startup so all
//! [`Recommender`] instances share the same metrics backend.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::Recommender;
pub use crate::metrics::{set_recommend_metrics, RecommendMetrics, RecommendationKind};
pub use crate::types::{RecommendConfig, RecommendError, RecommendedJob, RecommendedUser};
