use crate::error::SimilarityError;
use crate::pearson::validate_pair;

/// Cosine similarity between two equal-length vectors.
///
/// Returns `dot(a, b) / (‖a‖ · ‖b‖)` in `[-1.0, 1.0]`. Unlike the Pearson
/// degenerate case there is no neutral value to fall back to: a zero-norm
/// vector has no direction, so the similarity is reported as
/// [`SimilarityError::ZeroNorm`] and the caller decides what to exclude.
pub fn cosine(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
    validate_pair(a, b)?;

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let norm_a = norm_a.sqrt();
    let norm_b = norm_b.sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(SimilarityError::ZeroNorm);
    }

    Ok(dot / (norm_a * norm_b))
}
