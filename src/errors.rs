//! Submodule defining common errors for the solver crate.

pub mod dimension;
pub mod graph;
pub mod matrix;
pub mod non_finite;
pub mod param;

pub use dimension::DimensionError;
pub use graph::GraphError;
pub use matrix::MatrixError;
pub use non_finite::NonFiniteError;
pub use param::ParamError;

/// Top-level error returned by [`crate::solve`].
///
/// Every variant corresponds to one of the four error kinds required
/// before any mutation may take place: invalid parameters, a dimension
/// mismatch between `p` and the supplied correlation vector or initial
/// matrix, a graph larger than the configured cycle-check capacity, or
/// a non-finite value in the input.
#[derive(Debug, thiserror::Error)]
pub enum CcdrError {
    /// One of `gamma`, `eps`, `max_iters`, `alpha`, or the λ grid is invalid.
    #[error(transparent)]
    Param(#[from] ParamError),
    /// The correlation vector or initial matrix does not match `p`.
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    /// `p` exceeds the configured cycle-check scratch capacity.
    #[error(transparent)]
    GraphTooLarge(#[from] GraphError),
    /// A correlation entry, λ value, or parameter is not finite.
    #[error(transparent)]
    NonFinite(#[from] NonFiniteError),
}
