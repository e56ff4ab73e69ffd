//! Submodule implementing the coordinate-descent engine: variance updates,
//! the single-parameter update, the full and refinement sweeps, and the
//! per-λ driver that ties them together.

mod edge_loss;
mod full_sweep;
mod refine_sweep;

pub use edge_loss::compute_edge_loss;
pub use full_sweep::full_sweep;
pub use refine_sweep::refine_sweep;

use crate::correlation::CorrelationVector;
use crate::cycle::CycleScratch;
use crate::matrix::SparseBlockMatrix;
use crate::params::Params;
use crate::penalty::Penalty;

/// Per-λ progress tracker: error accumulator, sweep counters, and the
/// active-set-changed flag driving [`single_ccdr`]'s outer loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverState {
    /// Maximum absolute elementwise change accumulated by the most recent sweep.
    pub error_accum: f64,
    /// Number of completed outer (full-sweep + refinement) iterations.
    pub sweep_count: usize,
    /// Total number of refinement sweeps run across the whole λ-solve.
    pub inner_iters: usize,
    /// Set whenever a full sweep adds, removes, or (by way of an
    /// existing block going to zero) changes the active set.
    pub active_set_changed: bool,
}

impl SolverState {
    /// A fresh tracker for one λ-solve: `active_set_changed` starts `true`
    /// so the outer loop always runs at least one full sweep.
    pub fn new() -> Self {
        Self { active_set_changed: true, ..Default::default() }
    }
}

/// Recomputes every ρ_j in closed form from the current Φ and correlation
/// vector: `c_j = Σ_{i ∈ rows[j]} Φ[i,j]·⟨x_j,x_i⟩`, then `ρ_j = ½(c_j +
/// √(c_j² + 4n))`, the positive root of `ρ² − c·ρ − n = 0`.
///
/// Must run before any sweep touches Φ; ρ depends only on the Φ left over
/// from the previous sweep (or warm-start), never on values computed
/// within the sweep about to run.
pub fn recompute_sigma(matrix: &mut SparseBlockMatrix, corr: &CorrelationVector, n: f64) {
    for j in 0..matrix.dim() {
        let mut c = 0.0;
        for k in 0..matrix.row_count(j) {
            let i = matrix.row(j, k);
            c += matrix.value(j, k) * corr.get(j, i);
        }
        let sigma = 0.5 * (c + (c * c + 4.0 * n).sqrt());
        matrix.set_sigma(j, sigma);
    }
}

/// The single-parameter update for candidate edge `a -> b`: the thresholded
/// residual `ρ_b·⟨x_a,x_b⟩ − Σ_{i ∈ rows[b], i≠a} Φ[i,b]·⟨x_i,x_a⟩`.
pub fn spu(
    matrix: &SparseBlockMatrix,
    corr: &CorrelationVector,
    a: usize,
    b: usize,
    lambda: f64,
    penalty: &impl Penalty,
) -> f64 {
    let mut res = matrix.sigma(b) * corr.get(a, b);
    for k in 0..matrix.row_count(b) {
        let i = matrix.row(b, k);
        if i == a {
            continue;
        }
        res -= matrix.value(b, k) * corr.get(i, a);
    }
    penalty.threshold(res, lambda)
}

/// Drives a single λ to convergence starting from the (possibly
/// warm-started) `matrix`, mutating it in place.
///
/// A repeat-until loop, not a pre-condition loop: the first full sweep
/// always runs regardless of `matrix`'s starting active-set size, since
/// `active_set_changed` is initialized `true`. Each iteration alternates a
/// full sweep ([`full_sweep`]) with, when it changed the active set,
/// repeated refinement sweeps ([`refine_sweep`]) until the per-sweep
/// accumulated change falls below `params.eps` or the inner iteration
/// budget is exhausted. Only the *next* iteration is gated on
/// active-set-changed, the sweep-count cap, and the edge budget.
pub fn single_ccdr(
    matrix: &mut SparseBlockMatrix,
    corr: &CorrelationVector,
    n: f64,
    lambda: f64,
    params: &Params,
    penalty: &impl Penalty,
    scratch: &mut CycleScratch,
) -> SolverState {
    let p = matrix.dim();
    let mut state = SolverState::new();
    loop {
        state.active_set_changed = false;
        full_sweep(matrix, corr, n, lambda, params.alpha, penalty, scratch, &mut state);
        if state.active_set_changed {
            loop {
                refine_sweep(matrix, corr, n, lambda, penalty, &mut state);
                state.inner_iters += 1;
                if state.error_accum < params.eps || state.inner_iters >= params.max_iters {
                    break;
                }
            }
        }
        state.sweep_count += 1;

        if !(state.active_set_changed
            && state.sweep_count < params.max_iters
            && matrix.active_set_size() as f64 <= params.alpha * p as f64)
        {
            break;
        }
    }
    state
}
