use std::sync::Arc;
use std::time::Instant;

use ranking::{rank, Candidate, Metric, RankConfig};
use store::{FriendCounts, GraphStore, JobPostingRow, UserSummary};
use tracing::{debug, warn};

use crate::metrics::{metrics_recorder, RecommendationKind};
use crate::types::{RecommendConfig, RecommendError, RecommendedJob, RecommendedUser};


/// Display fields carried through the ranking pass for a job candidate.
struct JobMeta {
    title: String,
    company: Option<String>,
    location: Option<String>,
    posting_url: Option<String>,
    normalized_salary: Option<f64>,
}

fn job_candidate(row: JobPostingRow) -> Candidate<String, JobMeta> {
    let JobPostingRow {
        job_id,
        title,
        company,
        location,
        posting_url,
        normalized_salary,
        embedding,
    } = row;
    Candidate {
        id: job_id,
        vector: Some(embedding),
        meta: JobMeta {
            title,
            company,
            location,
            posting_url,
            normalized_salary,
        },
    }
}

/// Recommendation engine over a [`GraphStore`].
///
/// Stateless between calls: every method fetches what it needs from the
/// store, scores and ranks locally, and hands back plain result records.
/// Safe to share across concurrent in-flight requests.
pub struct Recommender<S> {
    store: Arc<S>,
    config: RecommendConfig,
}

impl<S: GraphStore> Recommender<S> {
    /// Construct a recommender owning its store handle.
    pub fn new(store: S, config: RecommendConfig) -> Result<Self, RecommendError> {
        Self::with_store_arc(Arc::new(store), config)
    }

    /// Construct a recommender from a shared store handle.
    pub fn with_store_arc(store: Arc<S>, config: RecommendConfig) -> Result<Self, RecommendError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// The engine configuration this recommender was built with.
    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    /// Friend recommendations for `user_id`.
    ///
    /// The store already orders suggestion rows by mutual-friend count, so
    /// no re-ranking happens here; the mutual count becomes the score.
    /// Returns `Ok(None)` when the store has no candidates at all — callers
    /// decide whether that becomes a user-visible "not found".
    pub async fn recommend_friends(
        &self,
        user_id: i64,
        limit: usize,
    ) -> Result<Option<Vec<RecommendedUser>>, RecommendError> {
        validate_limit(limit)?;
        let start = Instant::now();

        let rows = self.store.friend_suggestions(user_id, limit).await?;
        if rows.is_empty() {
            debug!(user_id, "no friend suggestions in store");
            record(RecommendationKind::Friends, start, 0);
            return Ok(None);
        }

        let friends: Vec<RecommendedUser> = rows
            .into_iter()
            .map(|row| RecommendedUser {
                user_id: row.user_id,
                name: row.name,
                score: row.mutual_friends as f64,
            })
            .collect();

        record(RecommendationKind::Friends, start, friends.len());
        Ok(Some(friends))
    }

    /// "People you may know": users whose raw feature vectors correlate with
    /// the source user's, ranked by Pearson correlation.
    ///
    /// A missing user or an empty feature vector yields an empty list —
    /// partial graph data is expected, not an error.
    pub async fn people_you_may_know(
        &self,
        user_id: i64,
        limit: usize,
    ) -> Result<Vec<RecommendedUser>, RecommendError> {
        validate_limit(limit)?;
        let start = Instant::now();

        let Some(source) = self.store.user_features(user_id).await? else {
            debug!(user_id, "source user not in store");
            record(RecommendationKind::PeopleYouMayKnow, start, 0);
            return Ok(Vec::new());
        };
        if source.features.is_empty() {
            debug!(user_id, "source user has no feature vector");
            record(RecommendationKind::PeopleYouMayKnow, start, 0);
            return Ok(Vec::new());
        }

        let peers = self
            .store
            .peer_features(user_id, self.config.candidate_pool)
            .await?;
        let candidates = peers.into_iter().map(|row| Candidate {
            id: row.user_id,
            vector: Some(row.features),
            meta: row.name,
        });

        let cfg = RankConfig::new(Metric::Pearson).with_limit(limit);
        let ranked = rank(&source.features, candidates, &cfg)?;
        let people: Vec<RecommendedUser> = ranked
            .into_iter()
            .map(|c| RecommendedUser {
                user_id: c.id,
                name: c.meta,
                score: c.score,
            })
            .collect();

        record(RecommendationKind::PeopleYouMayKnow, start, people.len());
        Ok(people)
    }

    /// Job recommendations: postings whose embeddings are cosine-similar to
    /// the user's pre-computed embedding.
    ///
    /// Jobs with zero or unscoreable similarity are excluded entirely; a
    /// user without an embedding gets an empty list.
    pub async fn recommend_jobs(
        &self,
        user_id: i64,
        limit: usize,
    ) -> Result<Vec<RecommendedJob>, RecommendError> {
        validate_limit(limit)?;
        let start = Instant::now();

        let Some(embedding) = self.store.user_embedding(user_id).await? else {
            debug!(user_id, "source user has no embedding");
            record(RecommendationKind::Jobs, start, 0);
            return Ok(Vec::new());
        };
        if embedding.is_empty() {
            debug!(user_id, "source user embedding is empty");
            record(RecommendationKind::Jobs, start, 0);
            return Ok(Vec::new());
        }

        let jobs = self.rank_jobs(&embedding, limit).await?;
        record(RecommendationKind::Jobs, start, jobs.len());
        Ok(jobs)
    }

    /// What-if job recommendations for a raw feature vector that has not
    /// been through the ingestion pipeline: the features are projected into
    /// the shared embedding space first, then ranked like
    /// [`recommend_jobs`](Self::recommend_jobs).
    pub async fn recommend_jobs_for_features(
        &self,
        features: &[f64],
        limit: usize,
    ) -> Result<Vec<RecommendedJob>, RecommendError> {
        validate_limit(limit)?;
        let start = Instant::now();

        let embedding = projection::project(features, self.config.embedding_dim);
        let jobs = self.rank_jobs(&embedding, limit).await?;
        record(RecommendationKind::Jobs, start, jobs.len());
        Ok(jobs)
    }

    async fn rank_jobs(
        &self,
        embedding: &[f64],
        limit: usize,
    ) -> Result<Vec<RecommendedJob>, RecommendError> {
        if embedding.len() != self.config.embedding_dim {
            // Candidates are still compared against the actual target
            // length, so a drifted producer degrades to empty results
            // rather than to cross-space scores.
            warn!(
                got = embedding.len(),
                expected = self.config.embedding_dim,
                "user embedding dimension differs from the configured space"
            );
        }

        let rows = self.store.job_postings().await?;
        let candidates = rows.into_iter().map(job_candidate);

        let cfg = RankConfig::new(Metric::Cosine)
            .with_limit(limit)
            .positive_only();
        let ranked = rank(embedding, candidates, &cfg)?;
        Ok(ranked
            .into_iter()
            .map(|c| RecommendedJob {
                job_id: c.id,
                title: c.meta.title,
                company: c.meta.company,
                location: c.meta.location,
                posting_url: c.meta.posting_url,
                normalized_salary: c.meta.normalized_salary,
                score: c.score,
            })
            .collect())
    }

    /// Direct and extended friend counts; a pure store pass-through.
    pub async fn friend_counts(&self, user_id: i64) -> Result<FriendCounts, RecommendError> {
        Ok(self.store.friend_counts(user_id).await?)
    }

    /// Case-insensitive user name search; a pure store pass-through.
    pub async fn search_users(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<UserSummary>, RecommendError> {
        validate_limit(limit)?;
        Ok(self.store.search_users(query, limit).await?)
    }

    /// Shortest friendship path between two users; a pure store
    /// pass-through. `None` means no path exists.
    pub async fn shortest_path(
        &self,
        from_user: i64,
        to_user: i64,
    ) -> Result<Option<Vec<i64>>, RecommendError> {
        Ok(self.store.shortest_path(from_user, to_user).await?)
    }
}

fn validate_limit(limit: usize) -> Result<(), RecommendError> {
    if limit == 0 {
        return Err(RecommendError::InvalidConfig(
            "limit must be greater than zero".into(),
        ));
    }
    Ok(())
}

fn record(kind: RecommendationKind, start: Instant, result_count: usize) {
    if let Some(recorder) = metrics_recorder() {
        recorder.record_recommendation(kind, start.elapsed(), result_count);
    }
}
