//! Submodule providing [`CorrelationVector`], a view over the flat
//! lower-triangular Gram/correlation array.

use crate::errors::DimensionError;

/// A read-only view over a flat lower-triangular correlation (or Gram)
/// array of length `p(p+1)/2`, indexed so that `⟨x_r, x_s⟩` with `r ≤ s`
/// sits at `r + s(s+1)/2`. Accesses symmetrize automatically.
///
/// # Examples
///
/// ```
/// use ccdr_core::correlation::CorrelationVector;
///
/// // p = 2: [<x0,x0>, <x0,x1>, <x1,x1>]
/// let corr = CorrelationVector::new(&[100.0, 90.0, 100.0], 2).unwrap();
/// assert_eq!(corr.get(0, 1), 90.0);
/// assert_eq!(corr.get(1, 0), 90.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CorrelationVector<'a> {
    data: &'a [f64],
}

impl<'a> CorrelationVector<'a> {
    /// Wraps `data` as the correlation vector for `p` variables.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] if `data.len() != p(p+1)/2`.
    pub fn new(data: &'a [f64], p: usize) -> Result<Self, DimensionError> {
        let expected = p * (p + 1) / 2;
        if data.len() != expected {
            return Err(DimensionError { p, expected, actual: data.len() });
        }
        Ok(Self { data })
    }

    /// Returns `⟨x_r, x_s⟩`, symmetrizing `r` and `s` as needed.
    pub fn get(&self, r: usize, s: usize) -> f64 {
        let (lo, hi) = if r <= s { (r, s) } else { (s, r) };
        self.data[lo + hi * (hi + 1) / 2]
    }
}
