//! Errors relative to solver parameters and the λ grid.

/// Errors that may occur while validating [`crate::params::Params`] or a λ grid.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// `gamma` must be strictly greater than 1 for the MCP threshold formula to apply.
    #[error("gamma must be > 1, got {0}")]
    GammaNotGreaterThanOne(f64),
    /// `eps` must be strictly positive.
    #[error("eps must be > 0, got {0}")]
    EpsNotPositive(f64),
    /// `alpha` must lie in (0, 1].
    #[error("alpha must be in (0, 1], got {0}")]
    AlphaOutOfRange(f64),
    /// `max_iters` must be at least 1.
    #[error("max_iters must be > 0")]
    MaxItersZero,
    /// The λ grid is not strictly decreasing at the given index.
    #[error("lambda grid must be strictly decreasing, violated at index {0}")]
    LambdaGridNotDecreasing(usize),
}
