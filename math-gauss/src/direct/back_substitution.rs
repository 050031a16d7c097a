//! Back substitution on a unit upper-triangular system

use super::echelon::EchelonForm;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solves the triangular system left behind by [`super::RowEchelonReducer`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BackSubstitutionSolver;

impl BackSubstitutionSolver {
    /// Compute `x` with `A x = b` for a reduced system
    pub fn solve<T: RealField>(&self, form: &EchelonForm<T>) -> Array1<T> {
        back_substitute(form.matrix(), form.rhs())
    }
}

/// Solve `A x = b` for unit upper-triangular `A`, from the last row upward:
///
/// `x[i] = b[i] - sum_{k > i} A[i][k] * x[k]`
///
/// Nothing here checks that `A` really is unit upper-triangular. Entries
/// below the diagonal are ignored and the diagonal is assumed to be one, so
/// any other input gives a defined but meaningless result.
///
/// # Panics
/// Panics if `a` has fewer than `b.len()` rows or columns.
pub fn back_substitute<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Array1<T> {
    let n = b.len();
    let mut x = Array1::zeros(n);

    for i in (0..n).rev() {
        let mut sum = T::zero();
        for k in (i + 1)..n {
            sum += a[[i, k]] * x[k];
        }
        x[i] = b[i] - sum;
    }

    x
}
