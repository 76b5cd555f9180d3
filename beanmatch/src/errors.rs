use thiserror::Error;

/// Returned by [`check`](crate::check) when the actual value does not match.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("\nExpected: {expected}\n     but: {mismatch}")]
pub struct AssertionError {
    /// What the matcher expected.
    pub expected: String,
    /// Why the actual value did not match.
    pub mismatch: String,
}
