use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::records::{
    FriendCounts, FriendSuggestionRow, JobPostingRow, PeerFeaturesRow, UserFeaturesRow,
    UserSummary,
};
use crate::GraphStore;

#[derive(Debug, Clone, Default)]
struct UserNode {
    name: Option<String>,
    features: Vec<f64>,
    embedding: Option<Vec<f64>>,
}

#[derive(Default)]
struct GraphData {
    users: HashMap<i64, UserNode>,
    /// Undirected friendship adjacency.
    edges: HashMap<i64, HashSet<i64>>,
    jobs: Vec<JobPostingRow>,
}

/// In-memory [`GraphStore`] implementation.
///
/// Holds users, undirected friendship edges, and job postings behind a
/// `RwLock`. Useful for tests, demos, and as the reference semantics for
/// production store adapters. Suggestion ordering is deterministic: mutual
/// count descending, then user id ascending.
pub struct MemoryGraph {
    data: RwLock<GraphData>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(GraphData::default()),
        }
    }

    /// Insert a user (or reset an existing one's name).
    pub fn add_user(&self, user_id: i64, name: Option<&str>) {
        let mut data = self.write();
        let node = data.users.entry(user_id).or_default();
        node.name = name.map(str::to_string);
    }

    /// Attach a raw feature vector to a user, inserting the user if needed.
    pub fn set_features(&self, user_id: i64, features: Vec<f64>) {
        let mut data = self.write();
        data.users.entry(user_id).or_default().features = features;
    }

    /// Attach a pre-computed embedding to a user, inserting the user if
    /// needed.
    pub fn set_embedding(&self, user_id: i64, embedding: Vec<f64>) {
        let mut data = self.write();
        data.users.entry(user_id).or_default().embedding = Some(embedding);
    }

    /// Record an undirected friendship edge. Self-edges are ignored.
    pub fn add_friendship(&self, a: i64, b: i64) {
        if a == b {
            return;
        }
        let mut data = self.write();
        data.users.entry(a).or_default();
        data.users.entry(b).or_default();
        data.edges.entry(a).or_default().insert(b);
        data.edges.entry(b).or_default().insert(a);
    }

    /// Add a job posting candidate.
    pub fn add_job(&self, job: JobPostingRow) {
        self.write().jobs.push(job);
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, GraphData> {
        self.data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, GraphData>, StoreError> {
        self.data
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))
    }
}

impl Default for MemoryGraph {
    fn default() -> Self {
        Self::new()
    }
}

fn neighbors(data: &GraphData, user_id: i64) -> Option<&HashSet<i64>> {
    data.edges.get(&user_id)
}

/// Friends-of-friends of `user_id`, excluding the user and direct friends.
fn extended_circle(data: &GraphData, user_id: i64) -> HashSet<i64> {
    let mut circle = HashSet::new();
    let Some(direct) = neighbors(data, user_id) else {
        return circle;
    };
    for friend in direct {
        if let Some(theirs) = neighbors(data, *friend) {
            for candidate in theirs {
                if *candidate != user_id && !direct.contains(candidate) {
                    circle.insert(*candidate);
                }
            }
        }
    }
    circle
}

#[async_trait]
impl GraphStore for MemoryGraph {
    async fn friend_suggestions(
        &self,
        user_id: i64,
        limit: usize,
    ) -> Result<Vec<FriendSuggestionRow>, StoreError> {
        let data = self.read()?;
        let Some(direct) = neighbors(&data, user_id) else {
            return Ok(Vec::new());
        };

        let mut rows: Vec<FriendSuggestionRow> = extended_circle(&data, user_id)
            .into_iter()
            .map(|candidate| {
                let mutual_friends = neighbors(&data, candidate)
                    .map(|theirs| direct.intersection(theirs).count() as u64)
                    .unwrap_or(0);
                FriendSuggestionRow {
                    user_id: candidate,
                    name: data.users.get(&candidate).and_then(|u| u.name.clone()),
                    mutual_friends,
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.mutual_friends
                .cmp(&a.mutual_friends)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        rows.truncate(limit);
        Ok(rows)
    }

    async fn user_features(
        &self,
        user_id: i64,
    ) -> Result<Option<UserFeaturesRow>, StoreError> {
        let data = self.read()?;
        Ok(data.users.get(&user_id).map(|node| UserFeaturesRow {
            name: node.name.clone(),
            features: node.features.clone(),
        }))
    }

    async fn peer_features(
        &self,
        user_id: i64,
        pool: usize,
    ) -> Result<Vec<PeerFeaturesRow>, StoreError> {
        let data = self.read()?;
        let mut rows: Vec<PeerFeaturesRow> = data
            .users
            .iter()
            .filter(|(id, node)| **id != user_id && !node.features.is_empty())
            .map(|(id, node)| PeerFeaturesRow {
                user_id: *id,
                name: node.name.clone(),
                features: node.features.clone(),
            })
            .collect();
        rows.sort_by_key(|row| row.user_id);
        rows.truncate(pool);
        Ok(rows)
    }

    async fn user_embedding(&self, user_id: i64) -> Result<Option<Vec<f64>>, StoreError> {
        let data = self.read()?;
        Ok(data.users.get(&user_id).and_then(|node| node.embedding.clone()))
    }

    async fn job_postings(&self) -> Result<Vec<JobPostingRow>, StoreError> {
        Ok(self.read()?.jobs.clone())
    }

    async fn friend_counts(&self, user_id: i64) -> Result<FriendCounts, StoreError> {
        let data = self.read()?;
        let direct = neighbors(&data, user_id).map(|n| n.len() as u64).unwrap_or(0);
        let extended = extended_circle(&data, user_id).len() as u64;
        Ok(FriendCounts { direct, extended })
    }

    async fn search_users(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<UserSummary>, StoreError> {
        let needle = query.to_lowercase();
        let data = self.read()?;
        let mut rows: Vec<UserSummary> = data
            .users
            .iter()
            .filter(|(_, node)| {
                node.name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .map(|(id, node)| UserSummary {
                user_id: *id,
                name: node.name.clone(),
            })
            .collect();
        rows.sort_by_key(|row| row.user_id);
        rows.truncate(limit);
        Ok(rows)
    }

    async fn shortest_path(
        &self,
        from_user: i64,
        to_user: i64,
    ) -> Result<Option<Vec<i64>>, StoreError> {
        let data = self.read()?;
        if !data.users.contains_key(&from_user) || !data.users.contains_key(&to_user) {
            return Ok(None);
        }
        if from_user == to_user {
            return Ok(Some(vec![from_user]));
        }

        // Breadth-first search; neighbors are visited in sorted order so the
        // returned path is deterministic.
        let mut parent: HashMap<i64, i64> = HashMap::new();
        let mut queue = VecDeque::from([from_user]);
        while let Some(current) = queue.pop_front() {
            let mut next: Vec<i64> = neighbors(&data, current)
                .map(|n| n.iter().copied().collect())
                .unwrap_or_default();
            next.sort_unstable();
            for candidate in next {
                if candidate == from_user || parent.contains_key(&candidate) {
                    continue;
                }
                parent.insert(candidate, current);
                if candidate == to_user {
                    let mut path = vec![to_user];
                    let mut cursor = to_user;
                    while let Some(&prev) = parent.get(&cursor) {
                        path.push(prev);
                        cursor = prev;
                    }
                    path.reverse();
                    return Ok(Some(path));
                }
                queue.push_back(candidate);
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small fixture: 1-2, 1-3, 2-4, 3-4, 4-5. From user 1 the extended
    /// circle is {4}; from user 5 it is {2, 3}.
    fn seeded_graph() -> MemoryGraph {
        let graph = MemoryGraph::new();
        graph.add_user(1, Some("Alice"));
        graph.add_user(2, Some("Bob"));
        graph.add_user(3, Some("Charlie"));
        graph.add_user(4, Some("Dana"));
        graph.add_user(5, Some("Eve"));
        graph.add_friendship(1, 2);
        graph.add_friendship(1, 3);
        graph.add_friendship(2, 4);
        graph.add_friendship(3, 4);
        graph.add_friendship(4, 5);
        graph
    }

    #[tokio::test]
    async fn friend_suggestions_ordered_by_mutual_count() {
        let graph = seeded_graph();
        let rows = graph.friend_suggestions(1, 10).await.expect("query");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id, 4);
        assert_eq!(rows[0].mutual_friends, 2);
        assert_eq!(rows[0].name.as_deref(), Some("Dana"));
    }

    #[tokio::test]
    async fn friend_suggestions_tie_break_is_deterministic() {
        let graph = seeded_graph();
        // Both 2 and 3 share exactly one mutual friend (4) with user 5.
        let rows = graph.friend_suggestions(5, 10).await.expect("query");

        let ids: Vec<i64> = rows.iter().map(|r| r.user_id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(rows.iter().all(|r| r.mutual_friends == 1));
    }

    #[tokio::test]
    async fn friend_suggestions_respects_limit() {
        let graph = seeded_graph();
        let rows = graph.friend_suggestions(5, 1).await.expect("query");
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn friend_suggestions_unknown_user_is_empty() {
        let graph = seeded_graph();
        let rows = graph.friend_suggestions(99, 10).await.expect("query");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn friend_counts_direct_and_extended() {
        let graph = seeded_graph();
        let counts = graph.friend_counts(1).await.expect("query");
        assert_eq!(counts.direct, 2);
        assert_eq!(counts.extended, 1);
    }

    #[tokio::test]
    async fn friend_counts_unknown_user_is_zero() {
        let graph = seeded_graph();
        let counts = graph.friend_counts(99).await.expect("query");
        assert_eq!(counts, FriendCounts::default());
    }

    #[tokio::test]
    async fn user_features_roundtrip() {
        let graph = seeded_graph();
        graph.set_features(1, vec![1.0, 2.0, 3.0]);

        let row = graph.user_features(1).await.expect("query").expect("user");
        assert_eq!(row.name.as_deref(), Some("Alice"));
        assert_eq!(row.features, vec![1.0, 2.0, 3.0]);

        assert!(graph.user_features(99).await.expect("query").is_none());
    }

    #[tokio::test]
    async fn peer_features_excludes_self_and_featureless_users() {
        let graph = seeded_graph();
        graph.set_features(1, vec![1.0, 2.0]);
        graph.set_features(2, vec![2.0, 4.0]);
        graph.set_features(3, vec![4.0, 3.0]);

        let rows = graph.peer_features(1, 10).await.expect("query");
        let ids: Vec<i64> = rows.iter().map(|r| r.user_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn peer_features_bounded_by_pool() {
        let graph = seeded_graph();
        for id in 2..=5 {
            graph.set_features(id, vec![id as f64]);
        }
        let rows = graph.peer_features(1, 2).await.expect("query");
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn user_embedding_lookup() {
        let graph = seeded_graph();
        graph.set_embedding(1, vec![1.0, 0.0, 0.0]);

        let embedding = graph.user_embedding(1).await.expect("query");
        assert_eq!(embedding, Some(vec![1.0, 0.0, 0.0]));
        assert!(graph.user_embedding(2).await.expect("query").is_none());
    }

    #[tokio::test]
    async fn job_postings_returned_in_insertion_order() {
        let graph = MemoryGraph::new();
        for id in ["job-a", "job-b"] {
            graph.add_job(JobPostingRow {
                job_id: id.into(),
                title: "Engineer".into(),
                company: None,
                location: None,
                posting_url: None,
                normalized_salary: None,
                embedding: vec![1.0, 0.0],
            });
        }

        let jobs = graph.job_postings().await.expect("query");
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].job_id, "job-a");
        assert_eq!(jobs[1].job_id, "job-b");
    }

    #[tokio::test]
    async fn search_users_is_case_insensitive() {
        let graph = seeded_graph();
        let rows = graph.search_users("ali", 10).await.expect("query");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id, 1);

        let rows = graph.search_users("A", 10).await.expect("query");
        // Alice, Charlie, Dana all contain an "a".
        assert_eq!(rows.len(), 3);
    }

    #[tokio::test]
    async fn search_users_respects_limit() {
        let graph = seeded_graph();
        let rows = graph.search_users("a", 1).await.expect("query");
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn shortest_path_found() {
        let graph = seeded_graph();
        let path = graph.shortest_path(1, 5).await.expect("query").expect("path");
        assert_eq!(path, vec![1, 2, 4, 5]);
    }

    #[tokio::test]
    async fn shortest_path_same_user() {
        let graph = seeded_graph();
        let path = graph.shortest_path(3, 3).await.expect("query");
        assert_eq!(path, Some(vec![3]));
    }

    #[tokio::test]
    async fn shortest_path_disconnected_is_none() {
        let graph = seeded_graph();
        graph.add_user(42, Some("Hermit"));
        let path = graph.shortest_path(1, 42).await.expect("query");
        assert!(path.is_none());
    }

    #[tokio::test]
    async fn shortest_path_unknown_user_is_none() {
        let graph = seeded_graph();
        let path = graph.shortest_path(1, 99).await.expect("query");
        assert!(path.is_none());
    }

    #[tokio::test]
    async fn self_edges_are_ignored() {
        let graph = MemoryGraph::new();
        graph.add_user(1, Some("Alice"));
        graph.add_friendship(1, 1);
        let counts = graph.friend_counts(1).await.expect("query");
        assert_eq!(counts.direct, 0);
    }
}
