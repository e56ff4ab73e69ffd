//! Submodule providing [`refine_sweep`], the O(|active|) pass that only
//! updates weights on already-active edges.

use super::{recompute_sigma, spu, SolverState};
use crate::correlation::CorrelationVector;
use crate::matrix::{SparseBlockMatrix, ZERO_THRESH};
use crate::penalty::Penalty;

/// Runs one refinement sweep: for every stored block `{i, j}` visited
/// exactly once (by column `j`, then row-list index `k`, restricted to
/// `i = row(j, k) < j`), re-derives the weight on whichever side is
/// currently nonzero via [`spu`]. No cycle check, no direction swap, no
/// new block is ever created here.
pub fn refine_sweep(
    matrix: &mut SparseBlockMatrix,
    corr: &CorrelationVector,
    n: f64,
    lambda: f64,
    penalty: &impl Penalty,
    state: &mut SolverState,
) {
    state.error_accum = 0.0;
    recompute_sigma(matrix, corr, n);

    for j in 0..matrix.dim() {
        for k in 0..matrix.row_count(j) {
            let i = matrix.row(j, k);
            if i >= j {
                continue;
            }
            let beta_kj = matrix.value(j, k);
            let beta_jk = matrix.sibling_value(j, k);

            let (beta_ij, beta_ji) = if beta_kj.abs() > ZERO_THRESH {
                (spu(matrix, corr, i, j, lambda, penalty), 0.0)
            } else if beta_jk.abs() > ZERO_THRESH {
                (0.0, spu(matrix, corr, j, i, lambda, penalty))
            } else {
                (0.0, 0.0)
            };

            let (d1, d2) = matrix.update_block(j, k, beta_ij, beta_ji);
            state.error_accum = state.error_accum.max(d1).max(d2);
        }
    }
}
