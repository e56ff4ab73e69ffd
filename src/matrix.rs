//! Submodule providing [`SparseBlockMatrix`], the mirrored sparse-block
//! storage for Φ and ρ.

use crate::errors::MatrixError;

/// Values with absolute magnitude at or below this threshold are treated
/// as exactly zero, though they may still occupy a storage slot until
/// the next block update reaps them.
pub const ZERO_THRESH: f64 = 1e-12;

/// Symmetric-sparsity block storage for the p×p weight matrix Φ and the
/// length-p variance vector ρ (called `sigma` here, matching the storage
/// field name rather than the paper's Greek letter).
///
/// For each column `j`, `rows[j]` lists the row indices `i` of every
/// block touching `j` — whether or not the currently-active direction
/// of that block is `i → j` — and `sibling[j][k]` gives the position
/// within `rows[i]` / `vals[i]` of the mirror entry, so that both sides
/// of a block are reachable in O(1) regardless of which one is queried.
///
/// # Invariants
///
/// * `rows[j]` never contains `j` itself (no self-loops).
/// * For any unordered pair `{i, j}`, at most one of Φ[i,j], Φ[j,i] is
///   nonzero (the block invariant); the other slot physically exists
///   but holds a value at or below [`ZERO_THRESH`].
/// * Sibling indices round-trip: following `sibling[j][k]` into column
///   `i = rows[j][k]` and then `sibling[i][...]` back lands on `k`.
#[derive(Debug, Clone)]
pub struct SparseBlockMatrix {
    p: usize,
    rows: Vec<Vec<usize>>,
    vals: Vec<Vec<f64>>,
    sibling: Vec<Vec<usize>>,
    sigma: Vec<f64>,
    blocks: Vec<(usize, usize)>,
}

impl SparseBlockMatrix {
    /// Constructs an empty p×p matrix: no edges, ρ initialized to zero.
    pub fn new(p: usize) -> Self {
        Self {
            p,
            rows: vec![Vec::new(); p],
            vals: vec![Vec::new(); p],
            sibling: vec![Vec::new(); p],
            sigma: vec![0.0; p],
            blocks: Vec::new(),
        }
    }

    /// Number of variables, `p`.
    pub fn dim(&self) -> usize {
        self.p
    }

    /// Number of stored entries (active or not) in column `j`.
    pub fn row_count(&self, j: usize) -> usize {
        self.rows[j].len()
    }

    /// The row index at position `k` of column `j`.
    pub fn row(&self, j: usize, k: usize) -> usize {
        self.rows[j][k]
    }

    /// Φ\[`row(j, k)`, `j`\], the value stored at position `k` of column `j`.
    pub fn value(&self, j: usize, k: usize) -> f64 {
        self.vals[j][k]
    }

    /// Overwrites the value at position `k` of column `j` in place,
    /// without touching its mirror entry. Used only by
    /// [`crate::solver::compute_edge_loss`] to temporarily zero an edge.
    pub fn set_value(&mut self, j: usize, k: usize, v: f64) {
        self.vals[j][k] = v;
    }

    /// ρ_j.
    pub fn sigma(&self, j: usize) -> f64 {
        self.sigma[j]
    }

    /// Sets ρ_j.
    pub fn set_sigma(&mut self, j: usize, s: f64) {
        self.sigma[j] = s;
    }

    /// Φ\[`j`, `row(j, k)`\], the mirror of `value(j, k)`, fetched in O(1)
    /// via the precomputed sibling index.
    pub fn sibling_value(&self, j: usize, k: usize) -> f64 {
        let i = self.rows[j][k];
        let sib = self.sibling[j][k];
        self.vals[i][sib]
    }

    /// Locates the position `k` such that `row(j, k) == i`, or `None` if
    /// no block exists for `{i, j}`.
    ///
    /// O(`row_count(j)`); callers on the hot path (`concaveCD`,
    /// `concaveCDInit`'s main loop) avoid this by threading the position
    /// through instead of re-searching.
    pub fn find(&self, i: usize, j: usize) -> Option<usize> {
        self.rows[j].iter().position(|&r| r == i)
    }

    /// Inserts a mirrored pair for the unordered block `{i, j}`: column
    /// `j` gets row `i` with value `v_ij` (Φ\[i,j\]), column `i` gets row
    /// `j` with value `v_ji` (Φ\[j,i\]).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError`] if a block for `{i, j}` already exists.
    ///
    /// Returns the two element-wise absolute changes from zero,
    /// `(|v_ij|, |v_ji|)`, for the caller's error accumulator.
    pub fn add_block(
        &mut self,
        i: usize,
        j: usize,
        v_ij: f64,
        v_ji: f64,
    ) -> Result<(f64, f64), MatrixError> {
        if self.find(i, j).is_some() {
            return Err(MatrixError(i, j));
        }
        let k_j = self.rows[j].len();
        let k_i = self.rows[i].len();
        self.rows[j].push(i);
        self.vals[j].push(v_ij);
        self.sibling[j].push(k_i);
        self.rows[i].push(j);
        self.vals[i].push(v_ji);
        self.sibling[i].push(k_j);
        self.blocks.push((i, j));
        Ok((v_ij.abs(), v_ji.abs()))
    }

    /// Overwrites both mirror entries of the block at column `j`,
    /// position `k` in-place: O(1) regardless of list length.
    ///
    /// Returns the two element-wise absolute changes `(|new_ij - old_ij|,
    /// |new_ji - old_ji|)` for the caller's error accumulator. If both
    /// new values fall at or below [`ZERO_THRESH`] the block becomes
    /// logically zero but its slot is not reclaimed; garbage collection
    /// is left for a later pass, matching the reference.
    pub fn update_block(&mut self, j: usize, k: usize, new_ij: f64, new_ji: f64) -> (f64, f64) {
        let i = self.rows[j][k];
        let sib = self.sibling[j][k];
        let old_ij = self.vals[j][k];
        let old_ji = self.vals[i][sib];
        self.vals[j][k] = new_ij;
        self.vals[i][sib] = new_ji;
        ((new_ij - old_ij).abs(), (new_ji - old_ji).abs())
    }

    /// Number of directed edges with `|Φ[i,j]| > ZERO_THRESH`, via a
    /// linear scan over all columns.
    pub fn active_set_size(&self) -> usize {
        self.vals.iter().flat_map(|col| col.iter()).filter(|v| v.abs() > ZERO_THRESH).count()
    }

    /// Diagnostic full recount of [`Self::active_set_size`], optionally
    /// re-verifying the sibling round-trip invariant on every stored
    /// block. Intended for the verbose grid-driver log line and for
    /// tests; not on any hot path.
    ///
    /// # Panics
    ///
    /// Panics if `verify_blocks` is true and a sibling index fails to
    /// round-trip — this indicates a solver bug, not a caller error.
    pub fn recompute_active_set_size(&self, verify_blocks: bool) -> usize {
        if verify_blocks {
            for j in 0..self.p {
                for k in 0..self.rows[j].len() {
                    let i = self.rows[j][k];
                    assert_ne!(i, j, "column {j} stores a self-loop at position {k}");
                    let sib = self.sibling[j][k];
                    assert_eq!(
                        self.rows[i][sib], j,
                        "sibling index for column {j} position {k} does not point back to {j}"
                    );
                }
            }
        }
        self.active_set_size()
    }

    /// The flat list of unordered pairs `{i, j}` with a stored block,
    /// in insertion order. Maintained only while a single λ is being
    /// solved; see [`Self::clear_blocks`].
    pub fn blocks(&self) -> &[(usize, usize)] {
        &self.blocks
    }

    /// Drops the auxiliary `blocks` enumeration after a λ has been
    /// solved and snapshotted, to save memory across a long grid.
    pub fn clear_blocks(&mut self) {
        self.blocks.clear();
    }
}
