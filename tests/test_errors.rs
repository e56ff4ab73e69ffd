use ccdr_core::{solve, CcdrError, Params, SparseBlockMatrix};

fn base_params() -> Params {
    Params { gamma: 2.0, eps: 1e-6, max_iters: 50, alpha: 1.0 }
}

#[test]
fn invalid_gamma_rejected_before_any_mutation() -> Result<(), Box<dyn std::error::Error>> {
    let params = Params { gamma: 1.0, ..base_params() };
    let corr = [100.0, 50.0, 100.0];
    let result = solve(&corr, 100, SparseBlockMatrix::new(2), &[10.0], &params, false);
    assert!(matches!(result, Err(CcdrError::Param(_))));
    Ok(())
}

#[test]
fn lambda_grid_not_decreasing_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let params = base_params();
    let corr = [100.0, 50.0, 100.0];
    let result = solve(&corr, 100, SparseBlockMatrix::new(2), &[10.0, 10.0], &params, false);
    assert!(matches!(result, Err(CcdrError::Param(_))));
    Ok(())
}

#[test]
fn dimension_mismatch_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let params = base_params();
    let corr = [100.0, 50.0]; // wrong length for p = 2 (needs 3)
    let result = solve(&corr, 100, SparseBlockMatrix::new(2), &[10.0], &params, false);
    assert!(matches!(result, Err(CcdrError::Dimension(_))));
    Ok(())
}

#[test]
fn non_finite_correlation_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let params = base_params();
    let corr = [100.0, f64::NAN, 100.0];
    let result = solve(&corr, 100, SparseBlockMatrix::new(2), &[10.0], &params, false);
    assert!(matches!(result, Err(CcdrError::NonFinite(_))));
    Ok(())
}

#[test]
fn non_finite_lambda_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let params = base_params();
    let corr = [100.0, 50.0, 100.0];
    let result = solve(&corr, 100, SparseBlockMatrix::new(2), &[f64::INFINITY], &params, false);
    assert!(matches!(result, Err(CcdrError::NonFinite(_))));
    Ok(())
}

#[test]
fn graph_too_large_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let params = base_params();
    let p = ccdr_core::cycle::DEFAULT_CYCLE_SCRATCH_CAP + 1;
    let corr = vec![1.0; p * (p + 1) / 2];
    let result = solve(&corr, 100, SparseBlockMatrix::new(p), &[10.0], &params, false);
    assert!(matches!(result, Err(CcdrError::GraphTooLarge(_))));
    Ok(())
}
