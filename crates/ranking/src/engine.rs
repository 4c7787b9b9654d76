use std::cmp::Ordering;

use crate::types::{Candidate, RankConfig, RankError, ScoredCandidate};

/// Score, filter, sort, and truncate a candidate set against a target vector.
///
/// Candidates are opportunistic: one with a missing or empty vector, a
/// vector whose length differs from the target's, or a score the metric
/// cannot produce is silently skipped. With `positive_only`, scores that are
/// not strictly positive are skipped as well. Survivors are ordered by score
/// descending; the sort is stable, so exact ties keep the store's original
/// candidate order. The result holds at most `config.limit` entries.
///
/// Pure given its inputs — no side effects, no retained state.
pub fn rank<I, M>(
    target: &[f64],
    candidates: impl IntoIterator<Item = Candidate<I, M>>,
    config: &RankConfig,
) -> Result<Vec<ScoredCandidate<I, M>>, RankError> {
    config.validate()?;

    let mut scored = Vec::new();
    for candidate in candidates {
        let Some(vector) = candidate.vector else {
            continue;
        };
        if vector.is_empty() || vector.len() != target.len() {
            continue;
        }
        let Some(score) = config.metric.score(target, &vector) else {
            continue;
        };
        if config.positive_only && score <= 0.0 {
            continue;
        }
        scored.push(ScoredCandidate {
            id: candidate.id,
            meta: candidate.meta,
            score,
        });
    }

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(config.limit);
    Ok(scored)
}
