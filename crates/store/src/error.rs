use thiserror::Error;

/// Errors surfaced by a graph store implementation.
///
/// "Nothing found" is never an error: absent records and empty candidate
/// sequences are modeled as `Option`/empty `Vec` in the query results.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    /// The underlying store backend failed (connection, transaction, lock).
    #[error("store backend error: {0}")]
    Backend(String),
    /// A record came back in a shape the typed row could not be built from.
    #[error("malformed store record: {0}")]
    Malformed(String),
}

impl StoreError {
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }

    pub fn malformed<E: std::fmt::Display>(err: E) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_constructor_formats_source() {
        let err = StoreError::backend("connection refused");
        assert!(err.to_string().contains("store backend error"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn malformed_constructor_formats_source() {
        let err = StoreError::malformed("missing field `features`");
        assert!(err.to_string().contains("malformed store record"));
        assert!(err.to_string().contains("features"));
    }
}
