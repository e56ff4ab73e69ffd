//! Submodule providing [`compute_edge_loss`], the penalized-likelihood
//! evaluation behind the tie-break in [`super::full_sweep`].

use crate::correlation::CorrelationVector;
use crate::matrix::{SparseBlockMatrix, ZERO_THRESH};
use crate::penalty::Penalty;

/// Evaluates the penalized log-likelihood contribution of column `b` under
/// two scenarios: `Φ[a,b] = 0` (returned first) and `Φ[a,b] = beta_hat`
/// (returned second).
///
/// If a block for `{a, b}` already exists, its current entry in column `b`
/// is temporarily zeroed for the first evaluation and restored before this
/// function returns — `matrix` is left exactly as it was found, regardless
/// of the value passed as `beta_hat`.
pub fn compute_edge_loss(
    matrix: &mut SparseBlockMatrix,
    corr: &CorrelationVector,
    n: f64,
    a: usize,
    b: usize,
    beta_hat: f64,
    lambda: f64,
    penalty: &impl Penalty,
) -> (f64, f64) {
    let existing = matrix.find(a, b);
    let restore = existing.map(|k| (k, matrix.value(b, k)));
    if let Some((k, _)) = existing {
        matrix.set_value(b, k, 0.0);
    }

    let sigma_b = matrix.sigma(b);
    let mut quad = 0.0;
    let mut cross = 0.0;
    let mut penalty_base = 0.0;
    for m in 0..matrix.row_count(b) {
        let r_m = matrix.row(b, m);
        let phi_m = matrix.value(b, m);
        penalty_base += penalty.p(phi_m.abs(), lambda);
        cross += corr.get(r_m, b) * phi_m;
        for q in 0..matrix.row_count(b) {
            let r_q = matrix.row(b, q);
            quad += corr.get(r_m, r_q) * phi_m * matrix.value(b, q);
        }
    }
    let loss_base = sigma_b * sigma_b + quad - 2.0 * sigma_b * cross;
    let s_zero = -n * sigma_b.ln() + 0.5 * loss_base + penalty_base;

    let mut delta_loss = 0.0;
    for k in 0..matrix.row_count(b) {
        let i = matrix.row(b, k);
        if i == a {
            continue;
        }
        delta_loss += corr.get(i, a) * matrix.value(b, k) * beta_hat;
    }
    delta_loss = 2.0 * delta_loss + corr.get(a, a) * beta_hat * beta_hat
        - 2.0 * sigma_b * corr.get(a, b) * beta_hat;
    let delta_pen = penalty.p(beta_hat.abs(), lambda) - penalty.p(0.0, lambda);
    let s_updated = if beta_hat.abs() > ZERO_THRESH { s_zero + delta_loss + delta_pen } else { s_zero };

    if let Some((k, old)) = restore {
        matrix.set_value(b, k, old);
    }

    (s_zero, s_updated)
}
