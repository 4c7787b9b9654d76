//! Candidate ranking for the peoplegraph recommendation engine.
//!
//! The ranker consumes a target vector plus a sequence of
//! [`Candidate`] values fetched from the graph store, scores each one with
//! the configured [`Metric`], and returns a descending-ordered, truncated
//! list of [`ScoredCandidate`] values.
//!
//! Filtering policy ("skip on any anomaly") lives in exactly one place —
//! [`rank`] — rather than being re-implemented per recommendation kind:
//! candidates with absent, empty, or length-mismatched vectors are skipped,
//! as are candidates the metric cannot score or that score non-finite.
//! Everything here is synchronous and free of shared state, so concurrent
//! in-flight requests need no coordination.

pub mod engine;
pub mod types;

pub use crate::engine::rank;
pub use crate::types::{Candidate, Metric, RankConfig, RankError, ScoredCandidate};
