//! Workspace umbrella crate for the peoplegraph recommendation engine.
//!
//! This crate stitches the scoring stack together so callers can rank
//! friends, "people you may know," and job postings with a single
//! dependency: similarity metrics (`similarity`), feature-to-embedding
//! projection (`projection`), candidate ranking (`ranking`), the graph
//! store boundary (`store`), and the recommendation orchestrators
//! (`recommend`).
//!
//! The engine consumes already-materialized vectors and counts from a
//! [`GraphStore`] and returns plain ordered result records; graph storage,
//! transport, and ingestion live outside this workspace.

pub use projection::{project, project_default, EMBEDDING_DIM};
pub use ranking::{rank, Candidate, Metric, RankConfig, RankError, ScoredCandidate};
pub use recommend::{
    set_recommend_metrics, RecommendConfig, RecommendError, RecommendMetrics, RecommendationKind,
    Recommender, RecommendedJob, RecommendedUser,
};
pub use similarity::{cosine, pearson, SimilarityError};
pub use store::{
    FriendCounts, FriendSuggestionRow, GraphStore, JobPostingRow, MemoryGraph, PeerFeaturesRow,
    StoreError, UserFeaturesRow, UserSummary,
};

/// Build a small seeded [`MemoryGraph`]: five users with features,
/// embeddings, and friendships, plus a handful of job postings in the
/// shared embedding space. Useful for demos and integration smoke tests.
pub fn demo_graph() -> MemoryGraph {
    let graph = MemoryGraph::new();

    let users: [(i64, &str, &[f64]); 5] = [
        (1, "Ada", &[1.0, 2.0, 3.0, 4.0]),
        (2, "Grace", &[2.0, 4.0, 6.0, 8.0]),
        (3, "Edsger", &[4.0, 3.0, 2.0, 1.0]),
        (4, "Barbara", &[1.0, 1.0, 2.0, 2.0]),
        (5, "Donald", &[3.0, 1.0, 4.0, 1.0]),
    ];
    for (user_id, name, features) in users {
        graph.add_user(user_id, Some(name));
        graph.set_features(user_id, features.to_vec());
        graph.set_embedding(user_id, project_default(features));
    }

    graph.add_friendship(1, 2);
    graph.add_friendship(1, 3);
    graph.add_friendship(2, 4);
    graph.add_friendship(3, 4);
    graph.add_friendship(4, 5);

    let jobs: [(&str, &str, &str, &[f64]); 3] = [
        ("job-backend", "Backend Engineer", "Initech", &[1.0, 2.0, 3.0, 4.0]),
        ("job-data", "Data Scientist", "Hooli", &[4.0, 3.0, 2.0, 1.0]),
        ("job-compiler", "Compiler Engineer", "Aperture", &[1.0, 1.0, 2.0, 2.0]),
    ];
    for (job_id, title, company, signal) in jobs {
        graph.add_job(JobPostingRow {
            job_id: job_id.into(),
            title: title.into(),
            company: Some(company.into()),
            location: None,
            posting_url: None,
            normalized_salary: None,
            embedding: project_default(signal),
        });
    }

    graph
}
