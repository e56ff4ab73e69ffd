//! `ccdr-core`: the coordinate-descent engine behind a regularized DAG
//! structure estimator.
//!
//! Given a flat lower-triangular Gram/correlation vector over `p`
//! variables and a decreasing grid of regularization strengths, [`solve`]
//! returns, for each λ, a sparse weighted adjacency matrix and variance
//! vector that jointly locally minimize a penalized Gaussian log-likelihood
//! subject to acyclicity. The solver is single-threaded per λ; a grid may
//! be parallelized externally by the caller.
//!
//! Data loading, correlation precomputation, construction of the λ grid,
//! and bindings to any analysis environment are out of scope — this crate
//! only implements the core iteration.

#![warn(missing_docs)]

pub mod correlation;
pub mod cycle;
pub mod errors;
pub mod grid;
pub mod matrix;
pub mod params;
pub mod penalty;
pub mod solver;

pub use errors::CcdrError;
pub use grid::{solve, Snapshot};
pub use matrix::SparseBlockMatrix;
pub use params::Params;

/// Re-exports the crate's primary types for glob import.
pub mod prelude {
    pub use crate::correlation::CorrelationVector;
    pub use crate::errors::CcdrError;
    pub use crate::grid::{solve, Snapshot};
    pub use crate::matrix::SparseBlockMatrix;
    pub use crate::params::Params;
    pub use crate::penalty::{Mcp, Penalty};
}
