use thiserror::Error;

/// Errors surfaced by the similarity metrics.
///
/// `EmptyInput` and `LengthMismatch` indicate direct programmatic misuse of
/// the metrics API; the ranking layer pre-filters candidates so these never
/// occur on the recommendation paths. `ZeroNorm` marks a vector for which
/// cosine similarity is not definable; callers exclude the candidate rather
/// than score it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// One or both input vectors were empty.
    #[error("empty input vector")]
    EmptyInput,
    /// The two input vectors have different lengths.
    #[error("vector length mismatch: left={left}, right={right}")]
    LengthMismatch { left: usize, right: usize },
    /// A vector with zero Euclidean norm was passed to cosine similarity.
    #[error("zero-norm vector: cosine similarity undefined")]
    ZeroNorm,
}
