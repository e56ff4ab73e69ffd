//! Errors relative to non-finite input values.

/// Raised when a correlation entry, λ value, or parameter is not finite.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum NonFiniteError {
    /// The correlation vector contains a non-finite entry.
    #[error("correlation entry at index {0} is not finite")]
    Correlation(usize),
    /// The λ grid contains a non-finite entry.
    #[error("lambda at index {0} is not finite")]
    Lambda(usize),
    /// A scalar parameter is not finite.
    #[error("parameter '{0}' is not finite")]
    Param(&'static str),
}
