//! Errors relative to the cycle-check scratch capacity.

/// Raised when `p` exceeds the configured cycle-check scratch capacity.
///
/// The reference implementation hard-codes this cap at 4000; this crate
/// makes it an explicit, documented configuration value instead (see
/// [`crate::cycle::DEFAULT_CYCLE_SCRATCH_CAP`]) and never silently truncates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("graph of size {p} exceeds cycle-check scratch capacity {cap}")]
pub struct GraphError {
    /// Number of variables requested.
    pub p: usize,
    /// Configured scratch capacity.
    pub cap: usize,
}
