use serde::{Deserialize, Serialize};

/// One friend suggestion row, pre-ordered by the store (mutual-friend count
/// descending).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FriendSuggestionRow {
    pub user_id: i64,
    pub name: Option<String>,
    /// Number of friends shared with the source user.
    pub mutual_friends: u64,
}

/// Source-user record for the "people you may know" path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserFeaturesRow {
    pub name: Option<String>,
    /// Raw graph-derived feature vector; may be empty when the user carries
    /// no signal.
    pub features: Vec<f64>,
}

/// One candidate row for the "people you may know" path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeerFeaturesRow {
    pub user_id: i64,
    pub name: Option<String>,
    pub features: Vec<f64>,
}

/// One job posting candidate, embedding included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPostingRow {
    pub job_id: String,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub posting_url: Option<String>,
    pub normalized_salary: Option<f64>,
    /// Dense embedding in the shared comparison space.
    pub embedding: Vec<f64>,
}

/// Direct and extended friend counts for one user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FriendCounts {
    /// Users one hop away.
    pub direct: u64,
    /// Users exactly two hops away (friends of friends, minus the user and
    /// their direct friends).
    pub extended: u64,
}

/// Minimal user record returned by name search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub user_id: i64,
    pub name: Option<String>,
}
