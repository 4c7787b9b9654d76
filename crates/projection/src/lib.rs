//! Projection of variable-length sparse feature vectors into the fixed
//! dense embedding space used for job matching.
//!
//! User feature vectors come out of the graph store with whatever length the
//! source data had; job embeddings live in a fixed [`EMBEDDING_DIM`]-sized
//! space produced by an external embedding model. [`project`] reconciles the
//! two: L2-normalize, then truncate or zero-pad to the target dimension.
//! This is a deliberately cheap, deterministic alignment — trailing feature
//! dimensions are treated as a low-priority sparse tail — not a learned or
//! statistical mapping.

/// Dimension of the shared embedding space.
///
/// Must stay in sync with the external embedding producer that populates job
/// vectors in the store.
pub const EMBEDDING_DIM: usize = 384;

/// Project a raw feature vector into a dense vector of length exactly `dim`.
///
/// - Empty input yields all zeros ("no signal", not an error).
/// - Non-empty input is L2-normalized first; a zero-norm vector skips
///   normalization and is used as-is.
/// - Longer-than-`dim` input keeps only the first `dim` components; shorter
///   input is right-padded with zeros.
pub fn project(features: &[f64], dim: usize) -> Vec<f64> {
    if features.is_empty() {
        return vec![0.0; dim];
    }

    let mut vec = features.to_vec();
    l2_normalize_in_place(&mut vec);

    if vec.len() >= dim {
        vec.truncate(dim);
    } else {
        vec.resize(dim, 0.0);
    }
    vec
}

/// [`project`] into the shared [`EMBEDDING_DIM`]-sized space.
pub fn project_default(features: &[f64]) -> Vec<f64> {
    project(features, EMBEDDING_DIM)
}

/// In-place L2 normalization. A zero-norm vector is left untouched.
pub(crate) fn l2_normalize_in_place(v: &mut [f64]) {
    let norm_sq: f64 = v.iter().map(|x| x * x).sum();
    if norm_sq > 0.0 {
        let inv_norm = norm_sq.sqrt().recip();
        for x in v.iter_mut() {
            *x *= inv_norm;
        }
    }
}
