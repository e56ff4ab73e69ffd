//! Submodule providing [`Snapshot`] and [`solve`], the grid driver
//! (`gridCCDr`) that is the crate's sole public entry point.

use log::info;

use crate::correlation::CorrelationVector;
use crate::cycle::{CycleScratch, DEFAULT_CYCLE_SCRATCH_CAP};
use crate::errors::{CcdrError, DimensionError, GraphError, NonFiniteError};
use crate::matrix::SparseBlockMatrix;
use crate::params::{validate_lambda_grid, Params};
use crate::penalty::Mcp;
use crate::solver::single_ccdr;

/// A per-λ result: for each column `j`, the list of `(row, weight)` pairs
/// with `|weight| > τ` (the caller interprets `(i, w)` in column `j` as
/// edge `i -> j` with weight `w`), plus the ρ vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// `columns[j]` is the list of `(i, Φ[i,j])` pairs with a nonzero weight.
    pub columns: Vec<Vec<(usize, f64)>>,
    /// ρ, indexed by variable.
    pub sigma: Vec<f64>,
}

impl Snapshot {
    fn capture(matrix: &SparseBlockMatrix) -> Self {
        let p = matrix.dim();
        let mut columns = vec![Vec::new(); p];
        for j in 0..p {
            for k in 0..matrix.row_count(j) {
                let v = matrix.value(j, k);
                if v.abs() > crate::matrix::ZERO_THRESH {
                    columns[j].push((matrix.row(j, k), v));
                }
            }
        }
        let sigma = (0..p).map(|j| matrix.sigma(j)).collect();
        Self { columns, sigma }
    }
}

/// Solves a decreasing grid of λ values, warm-starting each solve from the
/// previous one's result.
///
/// `correlations` is the flat lower-triangular Gram/correlation vector of
/// length `p(p+1)/2`; `n` is the observation count; `initial` is the
/// starting Φ (typically empty); `lambdas` must be strictly decreasing;
/// `verbose`, when true, emits one `log::info!` progress line per λ in the
/// form `"lambda = {lambda} [{l}/{L}] | {active} || {recomputed}"`.
///
/// Terminates early, returning fewer than `lambdas.len()` snapshots, the
/// first time the active set reaches `params.alpha * p` edges.
///
/// # Errors
///
/// Returns [`CcdrError::Param`] for invalid `params` or a non-decreasing
/// `lambdas`, [`CcdrError::Dimension`] if `correlations` or `initial`
/// disagree with `p`, [`CcdrError::GraphTooLarge`] if `p` exceeds
/// [`DEFAULT_CYCLE_SCRATCH_CAP`], and [`CcdrError::NonFinite`] if any
/// correlation entry, λ, or parameter is not finite. All validation runs
/// before `initial` is touched.
pub fn solve(
    correlations: &[f64],
    n: usize,
    initial: SparseBlockMatrix,
    lambdas: &[f64],
    params: &Params,
    verbose: bool,
) -> Result<Vec<Snapshot>, CcdrError> {
    params.validate()?;
    validate_lambda_grid(lambdas)?;

    let p = initial.dim();
    if p > DEFAULT_CYCLE_SCRATCH_CAP {
        return Err(GraphError { p, cap: DEFAULT_CYCLE_SCRATCH_CAP }.into());
    }

    let expected_len = p * (p + 1) / 2;
    if correlations.len() != expected_len {
        return Err(DimensionError { p, expected: expected_len, actual: correlations.len() }.into());
    }

    for (idx, &c) in correlations.iter().enumerate() {
        if !c.is_finite() {
            return Err(NonFiniteError::Correlation(idx).into());
        }
    }
    for (idx, &l) in lambdas.iter().enumerate() {
        if !l.is_finite() {
            return Err(NonFiniteError::Lambda(idx).into());
        }
    }
    if !params.gamma.is_finite() {
        return Err(NonFiniteError::Param("gamma").into());
    }
    if !params.eps.is_finite() {
        return Err(NonFiniteError::Param("eps").into());
    }
    if !params.alpha.is_finite() {
        return Err(NonFiniteError::Param("alpha").into());
    }

    let corr = CorrelationVector::new(correlations, p)?;
    let penalty = Mcp::new(params.gamma);
    let mut scratch = CycleScratch::with_capacity(p);
    let n_f = n as f64;
    let budget = params.alpha * p as f64;

    let mut matrix = initial;
    let mut snapshots = Vec::with_capacity(lambdas.len());

    for (l, &lambda) in lambdas.iter().enumerate() {
        single_ccdr(&mut matrix, &corr, n_f, lambda, params, &penalty, &mut scratch);

        let active = matrix.active_set_size();
        if verbose {
            let recomputed = matrix.recompute_active_set_size(true);
            info!("lambda = {lambda} [{}/{}] | {active} || {recomputed}", l + 1, lambdas.len());
        }

        snapshots.push(Snapshot::capture(&matrix));
        matrix.clear_blocks();

        if active as f64 >= budget {
            break;
        }
    }

    Ok(snapshots)
}
