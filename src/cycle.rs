//! Submodule providing reusable cycle-check scratch space and the
//! ancestor-search cycle test itself.

use bitvec::vec::BitVec;

use crate::matrix::SparseBlockMatrix;

/// Default capacity of a freshly-constructed [`CycleScratch`]; matrices
/// larger than this need [`CycleScratch::with_capacity`] instead.
pub const DEFAULT_CYCLE_SCRATCH_CAP: usize = 4000;

/// Reusable DFS scratch space for [`has_cycle`].
///
/// A single instance is built once per [`crate::solver::single_ccdr`] run
/// and passed by `&mut` into every cycle check, so that the thousands of
/// checks a full sweep performs allocate nothing. Only the nodes visited
/// during the most recent call are touched on reset, so clearing scratch
/// between calls is O(visited), not O(p).
#[derive(Debug, Clone)]
pub struct CycleScratch {
    visited: BitVec,
    stack: Vec<usize>,
    touched: Vec<usize>,
}

impl CycleScratch {
    /// Builds scratch space sized for [`DEFAULT_CYCLE_SCRATCH_CAP`] variables.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CYCLE_SCRATCH_CAP)
    }

    /// Builds scratch space sized for exactly `p` variables.
    pub fn with_capacity(p: usize) -> Self {
        Self { visited: BitVec::repeat(false, p), stack: Vec::new(), touched: Vec::new() }
    }

    /// The number of variables this scratch space was sized for.
    pub fn capacity(&self) -> usize {
        self.visited.len()
    }

    fn reset(&mut self) {
        for &n in &self.touched {
            self.visited.set(n, false);
        }
        self.touched.clear();
        self.stack.clear();
    }
}

impl Default for CycleScratch {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` if adding the directed edge `a -> b` to `matrix` would
/// close a cycle, i.e. if `b` is already an ancestor of `a`.
///
/// Implemented as an iterative DFS over direct predecessor links: starting
/// from `a`, at each node `u` this walks `matrix.row(u, k)` for every `k`
/// with `matrix.value(u, k)` nonzero — the columns `u` currently receives
/// an edge from — pushing each unvisited predecessor onto the stack. This
/// deliberately does *not* consult `sibling_value`: a predecessor is
/// defined by what is actually stored as an incoming edge into `u`, not by
/// the existence of a block touching `u`. The search terminates as soon as
/// `b` is discovered, or when the stack empties.
///
/// `scratch` is cleared and reused across calls; it must have capacity at
/// least `matrix.dim()`.
pub fn has_cycle(matrix: &SparseBlockMatrix, scratch: &mut CycleScratch, a: usize, b: usize) -> bool {
    debug_assert!(scratch.capacity() >= matrix.dim());
    scratch.reset();
    if a == b {
        return true;
    }
    scratch.stack.push(a);
    scratch.visited.set(a, true);
    scratch.touched.push(a);
    while let Some(u) = scratch.stack.pop() {
        for k in 0..matrix.row_count(u) {
            if matrix.value(u, k).abs() <= crate::matrix::ZERO_THRESH {
                continue;
            }
            let pred = matrix.row(u, k);
            if pred == b {
                return true;
            }
            if !scratch.visited[pred] {
                scratch.visited.set(pred, true);
                scratch.touched.push(pred);
                scratch.stack.push(pred);
            }
        }
    }
    false
}
