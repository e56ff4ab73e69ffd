//! Errors relative to [`crate::matrix::SparseBlockMatrix`] block operations.

/// Raised by [`crate::matrix::SparseBlockMatrix::add_block`] when a block
/// for the given unordered pair is already present.
///
/// Reachable only through a solver bug: every call site checks
/// [`crate::matrix::SparseBlockMatrix::find`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("block {{{0}, {1}}} already exists")]
pub struct MatrixError(pub usize, pub usize);
