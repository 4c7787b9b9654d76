//! Statistical similarity metrics for the peoplegraph recommendation engine.
//!
//! Two metrics are exposed, both pure functions over `&[f64]` slices:
//!
//! - [`pearson`]: sample Pearson correlation, used to compare sparse
//!   graph-derived feature vectors ("people you may know").
//! - [`cosine`]: cosine similarity, used to compare dense embeddings in the
//!   shared job-embedding space.
//!
//! Both fail fast with [`SimilarityError`] on empty or length-mismatched
//! input — that is the misuse contract for direct callers. Degenerate but
//! well-formed input is handled without errors or NaN: zero variance maps to
//! a `0.0` correlation, while a zero-norm vector surfaces as
//! [`SimilarityError::ZeroNorm`] so ranking callers can exclude the
//! candidate instead of inventing a score.

mod cosine;
mod error;
mod pearson;

pub use crate::cosine::cosine;
pub use crate::error::SimilarityError;
pub use crate::pearson::pearson;
