use ccdr_core::{solve, Params, Snapshot, SparseBlockMatrix};

// p = 4 Gram vector (n = 100), lower-triangular by column:
// [C00, C01, C11, C02, C12, C22, C03, C13, C23, C33]
const N: usize = 100;
const CORR: [f64; 10] = [100.0, 70.0, 100.0, 50.0, 60.0, 100.0, 20.0, 30.0, 40.0, 100.0];
const LAMBDAS: [f64; 3] = [50.0, 20.0, 5.0];

fn params() -> Params {
    Params { gamma: 2.0, eps: 1e-7, max_iters: 50, alpha: 1.0 }
}

fn is_acyclic(snapshot: &Snapshot) -> bool {
    let p = snapshot.columns.len();
    let mut visiting = vec![false; p];
    let mut done = vec![false; p];

    fn dfs(u: usize, snapshot: &Snapshot, visiting: &mut [bool], done: &mut [bool]) -> bool {
        if visiting[u] {
            return false;
        }
        if done[u] {
            return true;
        }
        visiting[u] = true;
        for j in 0..snapshot.columns.len() {
            if snapshot.columns[j].iter().any(|&(i, _)| i == u) && !dfs(j, snapshot, visiting, done) {
                return false;
            }
        }
        visiting[u] = false;
        done[u] = true;
        true
    }

    (0..p).all(|u| dfs(u, snapshot, &mut visiting, &mut done))
}

#[test]
fn every_snapshot_is_acyclic() -> Result<(), Box<dyn std::error::Error>> {
    let snapshots = solve(&CORR, N, SparseBlockMatrix::new(4), &LAMBDAS, &params(), false)?;
    for snap in &snapshots {
        assert!(is_acyclic(snap), "cyclic snapshot: {snap:?}");
    }
    Ok(())
}

#[test]
fn no_self_loops_in_any_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let snapshots = solve(&CORR, N, SparseBlockMatrix::new(4), &LAMBDAS, &params(), false)?;
    for snap in &snapshots {
        for (j, col) in snap.columns.iter().enumerate() {
            assert!(col.iter().all(|&(i, _)| i != j));
        }
    }
    Ok(())
}

#[test]
fn identical_inputs_produce_identical_outputs() -> Result<(), Box<dyn std::error::Error>> {
    let first = solve(&CORR, N, SparseBlockMatrix::new(4), &LAMBDAS, &params(), false)?;
    let second = solve(&CORR, N, SparseBlockMatrix::new(4), &LAMBDAS, &params(), false)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn active_set_does_not_shrink_by_more_than_a_small_tolerance() -> Result<(), Box<dyn std::error::Error>> {
    let snapshots = solve(&CORR, N, SparseBlockMatrix::new(4), &LAMBDAS, &params(), false)?;
    let counts: Vec<usize> = snapshots.iter().map(|s| s.columns.iter().map(Vec::len).sum()).collect();
    for w in counts.windows(2) {
        assert!(w[1] as i64 >= w[0] as i64 - 1, "active set shrank sharply: {counts:?}");
    }
    Ok(())
}
