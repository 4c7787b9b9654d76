// Metrics hooks for the `recommend` crate.
//
// Callers install a global `RecommendMetrics` implementation via
// [`set_recommend_metrics`], then `Recommender` reports per-request latency
// and result counts for each recommendation call. This keeps instrumentation
// decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Which recommendation path produced an observation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Friends,
    PeopleYouMayKnow,
    Jobs,
}

/// Metrics observer for recommendation operations.
pub trait RecommendMetrics: Send + Sync {
    /// Record the outcome of one recommendation request.
    ///
    /// `kind` is the recommendation path, `latency` the wall-clock duration
    /// between the start and end of the call (store queries included), and
    /// `result_count` the number of entries handed back to the caller after
    /// all filtering and truncation.
    fn record_recommendation(
        &self,
        kind: RecommendationKind,
        latency: Duration,
        result_count: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn RecommendMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn RecommendMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn RecommendMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global recommendation metrics recorder.
///
/// Typically called once during service startup so all `Recommender`
/// instances share the same metrics backend.
pub fn set_recommend_metrics(recorder: Option<Arc<dyn RecommendMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("recommend metrics lock poisoned");
    *guard = recorder;
}
