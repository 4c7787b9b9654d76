use crate::error::SimilarityError;

/// Sample Pearson correlation coefficient between two equal-length vectors.
///
/// Returns a value in `[-1.0, 1.0]` (up to floating-point tolerance):
/// `1.0` for perfectly positively co-linear inputs, `-1.0` for perfectly
/// negatively co-linear inputs. When either vector has zero variance the
/// correlation is mathematically undefined; this returns `0.0` ("no linear
/// relationship detectable") instead of failing or producing NaN.
///
/// Empty inputs and length mismatches are programmer errors and are
/// rejected eagerly.
pub fn pearson(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
    validate_pair(a, b)?;

    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    // Centered sums; the 1/(n-1) factors of covariance and the standard
    // deviations cancel, so they are never materialized.
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 {
        return Ok(0.0);
    }

    Ok(cov / denom)
}

pub(crate) fn validate_pair(a: &[f64], b: &[f64]) -> Result<(), SimilarityError> {
    if a.is_empty() || b.is_empty() {
        return Err(SimilarityError::EmptyInput);
    }
    if a.len() != b.len() {
        return Err(SimilarityError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
