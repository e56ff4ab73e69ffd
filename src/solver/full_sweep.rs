//! Submodule providing [`full_sweep`], the O(p²) pass that may add, remove,
//! or swap the direction of any edge.

use super::{compute_edge_loss, recompute_sigma, spu, SolverState};
use crate::correlation::CorrelationVector;
use crate::cycle::{has_cycle, CycleScratch};
use crate::matrix::{SparseBlockMatrix, ZERO_THRESH};
use crate::penalty::Penalty;

/// Runs one full sweep over every unordered pair `(i, j)`, `i < j`, in
/// ascending order: computes both candidate directions' single-parameter
/// updates, rules out whichever would close a cycle, breaks any remaining
/// tie by penalized-likelihood comparison (favoring `i -> j`), and applies
/// the surviving direction to `matrix`.
///
/// Terminates early, leaving the remaining pairs of this sweep untouched,
/// as soon as the active set exceeds `alpha * p` — matching the edge
/// budget the grid driver checks again once the whole λ-solve returns.
pub fn full_sweep(
    matrix: &mut SparseBlockMatrix,
    corr: &CorrelationVector,
    n: f64,
    lambda: f64,
    alpha: f64,
    penalty: &impl Penalty,
    scratch: &mut CycleScratch,
    state: &mut SolverState,
) {
    state.error_accum = 0.0;
    recompute_sigma(matrix, corr, n);
    let p = matrix.dim();

    for i in 0..p {
        for j in (i + 1)..p {
            let mut beta_ij = spu(matrix, corr, i, j, lambda, penalty);
            let mut beta_ji = spu(matrix, corr, j, i, lambda, penalty);

            let c_ij = if beta_ij.abs() > ZERO_THRESH { has_cycle(matrix, scratch, i, j) } else { false };
            let c_ji = if beta_ji.abs() > ZERO_THRESH && !c_ij {
                has_cycle(matrix, scratch, j, i)
            } else {
                false
            };

            if c_ij {
                beta_ij = 0.0;
            } else if c_ji {
                beta_ji = 0.0;
            } else {
                let (s_zero_ji, s_updated_ji) = compute_edge_loss(matrix, corr, n, j, i, beta_ji, lambda, penalty);
                let (s_zero_ij, s_updated_ij) = compute_edge_loss(matrix, corr, n, i, j, beta_ij, lambda, penalty);
                if s_zero_ji + s_updated_ij <= s_updated_ji + s_zero_ij {
                    beta_ji = 0.0;
                } else {
                    beta_ij = 0.0;
                }
            }

            match matrix.find(i, j) {
                Some(k) => {
                    let old_ij = matrix.value(j, k);
                    let old_ji = matrix.sibling_value(j, k);
                    let (d1, d2) = matrix.update_block(j, k, beta_ij, beta_ji);
                    state.error_accum = state.error_accum.max(d1).max(d2);
                    let zeroed = (old_ij.abs() > ZERO_THRESH && beta_ij.abs() <= ZERO_THRESH)
                        || (old_ji.abs() > ZERO_THRESH && beta_ji.abs() <= ZERO_THRESH);
                    if zeroed {
                        state.active_set_changed = true;
                    }
                }
                None => {
                    if beta_ij.abs() > ZERO_THRESH || beta_ji.abs() > ZERO_THRESH {
                        let (d1, d2) = matrix
                            .add_block(i, j, beta_ij, beta_ji)
                            .expect("find() just confirmed no block exists for this pair");
                        state.error_accum = state.error_accum.max(d1).max(d2);
                        state.active_set_changed = true;
                    }
                }
            }

            if matrix.active_set_size() as f64 > alpha * p as f64 {
                return;
            }
        }
    }
}
