//! Errors relative to a mismatch between `p` (the initial matrix's
//! dimension) and the supplied correlation vector.

/// Raised when the correlation vector's length disagrees with `p`.
///
/// `p` itself is taken from the caller-supplied initial matrix, the only
/// place it is canonically recorded in [`crate::solve`]'s signature; a
/// correlation vector of the wrong length is the only way the two inputs
/// can disagree.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("correlation vector has length {actual}, expected {expected} for p = {p}")]
pub struct DimensionError {
    /// Number of variables, taken from the initial matrix's dimension.
    pub p: usize,
    /// Expected length, `p(p+1)/2`.
    pub expected: usize,
    /// Actual length supplied.
    pub actual: usize,
}
