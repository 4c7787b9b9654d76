//! Graph store boundary for the peoplegraph recommendation engine.
//!
//! The engine never talks to a concrete graph database; it consumes the
//! [`GraphStore`] capability, which exposes each pattern-matching query the
//! recommendation paths need as a typed method returning either an optional
//! record or a sequence of records. Missing records and empty sequences are
//! valid "nothing found" states, never errors — [`StoreError`] is reserved
//! for backend failures.
//!
//! Result rows are strongly typed per query kind (see [`records`]) so a
//! renamed or missing field in a store integration fails at compile time
//! instead of at lookup time.
//!
//! [`MemoryGraph`] is the bundled in-memory implementation: it backs unit
//! and integration tests and small demos, and doubles as the reference
//! semantics for what production store adapters must return.

pub mod error;
pub mod memory;
pub mod records;

use async_trait::async_trait;

pub use crate::error::StoreError;
pub use crate::memory::MemoryGraph;
pub use crate::records::{
    FriendCounts, FriendSuggestionRow, JobPostingRow, PeerFeaturesRow, UserFeaturesRow,
    UserSummary,
};

/// Query capability over the social graph.
///
/// Implementations execute the underlying pattern-matching queries (Cypher,
/// SQL, in-memory traversal — the engine does not care) and materialize the
/// results into the typed rows of [`records`]. All methods take `&self`;
/// implementations must be safe to call from concurrent in-flight requests.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Friend suggestions for `user_id`, ordered by mutual-friend count
    /// descending, at most `limit` rows. Unknown users yield an empty list.
    async fn friend_suggestions(
        &self,
        user_id: i64,
        limit: usize,
    ) -> Result<Vec<FriendSuggestionRow>, StoreError>;

    /// Name and raw feature vector for `user_id`, or `None` when the user
    /// does not exist.
    async fn user_features(&self, user_id: i64)
        -> Result<Option<UserFeaturesRow>, StoreError>;

    /// A bounded pool of other users' feature vectors to score against.
    /// `pool` caps the candidate set on the store side, independently of the
    /// final recommendation limit.
    async fn peer_features(
        &self,
        user_id: i64,
        pool: usize,
    ) -> Result<Vec<PeerFeaturesRow>, StoreError>;

    /// Pre-computed dense embedding for `user_id`, or `None` when the user
    /// does not exist or carries no embedding.
    async fn user_embedding(&self, user_id: i64) -> Result<Option<Vec<f64>>, StoreError>;

    /// All job posting candidates with their embeddings.
    async fn job_postings(&self) -> Result<Vec<JobPostingRow>, StoreError>;

    /// Direct and extended friend counts for `user_id`. Unknown users yield
    /// zero counts.
    async fn friend_counts(&self, user_id: i64) -> Result<FriendCounts, StoreError>;

    /// Case-insensitive name search, at most `limit` rows.
    async fn search_users(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<UserSummary>, StoreError>;

    /// Shortest friendship path between two users as a sequence of user ids
    /// (endpoints included), or `None` when no path exists.
    async fn shortest_path(
        &self,
        from_user: i64,
        to_user: i64,
    ) -> Result<Option<Vec<i64>>, StoreError>;
}
