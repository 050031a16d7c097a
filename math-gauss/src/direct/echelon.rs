//! Forward elimination to row-echelon form
//!
//! Reduces an augmented system `[A | b]` to upper-triangular form with a unit
//! diagonal. For each pivot column `i`:
//! 1. pick a pivot row (swapping a row from below into position `i` if needed)
//! 2. divide row `i` by the pivot so `A[i][i] == 1`
//! 3. subtract multiples of row `i` from every row below to clear column `i`

use crate::error::GaussError;
use crate::row_ops::AugmentedSystem;
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Rule used to choose the pivot row for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotStrategy {
    /// Keep the diagonal entry unless it is zero, otherwise swap in the
    /// first row below with a non-zero entry in the pivot column.
    #[default]
    FirstNonZero,
    /// Always swap in the row with the largest magnitude entry on or below
    /// the diagonal (standard partial pivoting). Produces a different swap
    /// trace than [`PivotStrategy::FirstNonZero`].
    LargestMagnitude,
}

/// Upper-triangular, unit-diagonal system produced by [`RowEchelonReducer`]
#[derive(Debug, Clone)]
pub struct EchelonForm<T: RealField> {
    system: AugmentedSystem<T>,
    row_swaps: Vec<(usize, usize)>,
    pivots: Vec<T>,
}

impl<T: RealField> EchelonForm<T> {
    /// Triangularized coefficient matrix
    pub fn matrix(&self) -> &Array2<T> {
        self.system.matrix()
    }

    /// Right-hand side after the same row operations
    pub fn rhs(&self) -> &Array1<T> {
        self.system.rhs()
    }

    /// Number of unknowns
    pub fn dim(&self) -> usize {
        self.system.dim()
    }

    /// Row swaps in the order they were performed
    pub fn row_swaps(&self) -> &[(usize, usize)] {
        &self.row_swaps
    }

    /// Pivot values before normalization, one per column
    pub fn pivots(&self) -> &[T] {
        &self.pivots
    }

    /// Determinant of the original matrix: `(-1)^swaps * prod(pivots)`
    pub fn determinant(&self) -> T {
        let product = self.pivots.iter().fold(T::one(), |acc, &p| acc * p);
        if self.row_swaps.len() % 2 == 1 {
            -product
        } else {
            product
        }
    }

    /// Give back the reduced matrix and right-hand side
    pub fn into_parts(self) -> (Array2<T>, Array1<T>) {
        self.system.into_parts()
    }
}

/// Forward pass of Gaussian elimination
#[derive(Debug, Clone)]
pub struct RowEchelonReducer<T: RealField> {
    pivoting: PivotStrategy,
    tolerance: T,
}

impl<T: RealField> Default for RowEchelonReducer<T> {
    fn default() -> Self {
        Self::new(PivotStrategy::default(), T::zero())
    }
}

impl<T: RealField> RowEchelonReducer<T> {
    /// Create a reducer.
    ///
    /// A candidate pivot `p` with `|p| <= tolerance` counts as zero; the
    /// default tolerance of zero means an exact comparison.
    pub fn new(pivoting: PivotStrategy, tolerance: T) -> Self {
        Self {
            pivoting,
            tolerance,
        }
    }

    /// Pivot selection rule in use
    pub fn pivoting(&self) -> PivotStrategy {
        self.pivoting
    }

    /// Reduce `system` to row-echelon form.
    ///
    /// Takes ownership of the system. On failure the partially reduced
    /// system is dropped.
    ///
    /// # Errors
    /// [`GaussError::ZeroPivot`] when no usable pivot exists in a column.
    pub fn reduce(&self, mut system: AugmentedSystem<T>) -> Result<EchelonForm<T>, GaussError> {
        let n = system.dim();
        let mut row_swaps = Vec::new();
        let mut pivots = Vec::with_capacity(n);

        for i in 0..n {
            let pivot_row = self
                .select_pivot(&system, i)
                .ok_or(GaussError::ZeroPivot { column: i })?;
            if pivot_row != i {
                log::debug!("Zero pivot in column {i}: swapping rows {i} and {pivot_row}");
                system.swap_rows(i, pivot_row);
                row_swaps.push((i, pivot_row));
            }

            // R_i = R_i / pivot
            let pivot = system.coeff(i, i);
            log::trace!("Column {i}: pivot {pivot}");
            system.divide_row(i, pivot);
            pivots.push(pivot);

            // R_j = R_j - A[j][i] * R_i
            for j in (i + 1)..n {
                let factor = system.coeff(j, i);
                if factor != T::zero() {
                    system.subtract_scaled_row(j, i, factor);
                }
            }
        }

        Ok(EchelonForm {
            system,
            row_swaps,
            pivots,
        })
    }

    /// Row to use as pivot for column `i`, or `None` if the column has no
    /// usable entry on or below the diagonal.
    fn select_pivot(&self, system: &AugmentedSystem<T>, i: usize) -> Option<usize> {
        let n = system.dim();
        match self.pivoting {
            PivotStrategy::FirstNonZero => (i..n)
                .find(|&j| !system.coeff(j, i).is_zero_within(self.tolerance)),
            PivotStrategy::LargestMagnitude => {
                let mut best = i;
                let mut best_val = system.coeff(i, i).abs();
                for j in (i + 1)..n {
                    let val = system.coeff(j, i).abs();
                    if val > best_val {
                        best = j;
                        best_val = val;
                    }
                }
                (!best_val.is_zero_within(self.tolerance)).then_some(best)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn system(a: Array2<f64>, b: Array1<f64>) -> AugmentedSystem<f64> {
        AugmentedSystem::new(a, b).expect("square system")
    }

    fn assert_unit_upper_triangular(a: &Array2<f64>) {
        let n = a.nrows();
        for i in 0..n {
            assert_relative_eq!(a[[i, i]], 1.0, epsilon = 1e-12);
            for j in 0..i {
                assert_eq!(a[[i, j]], 0.0, "entry ({i}, {j}) should be eliminated");
            }
        }
    }

    #[test]
    fn test_reduce_2x2() {
        let reducer = RowEchelonReducer::default();
        let form = reducer
            .reduce(system(array![[1.0, 1.0], [1.0, -1.0]], array![5.0, 1.0]))
            .unwrap();

        assert_unit_upper_triangular(form.matrix());
        assert_eq!(form.matrix(), &array![[1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(form.rhs(), &array![5.0, 2.0]);
        assert!(form.row_swaps().is_empty());
        assert_eq!(form.pivots(), &[1.0, -2.0]);
    }

    #[test]
    fn test_zero_pivot_swaps_first_nonzero_row() {
        let reducer = RowEchelonReducer::default();
        let form = reducer
            .reduce(system(array![[0.0, 1.0], [1.0, 0.0]], array![1.0, 2.0]))
            .unwrap();

        assert_eq!(form.row_swaps(), &[(0, 1)]);
        assert_eq!(form.matrix(), &array![[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(form.rhs(), &array![2.0, 1.0]);
        assert_relative_eq!(form.determinant(), -1.0);
    }

    #[test]
    fn test_swap_in_later_column() {
        // After clearing column 0 the second diagonal entry is zero, so rows
        // 1 and 2 trade places.
        let reducer = RowEchelonReducer::default();
        let form = reducer
            .reduce(system(
                array![[1.0, 2.0, 3.0], [2.0, 4.0, 5.0], [1.0, 3.0, 7.0]],
                array![1.0, 2.0, 3.0],
            ))
            .unwrap();

        assert_eq!(form.row_swaps(), &[(1, 2)]);
        assert_unit_upper_triangular(form.matrix());
        assert_relative_eq!(form.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_first_nonzero_skips_zero_rows() {
        let reducer = RowEchelonReducer::default();
        let form = reducer
            .reduce(system(
                array![[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [2.0, 0.0, 0.0]],
                array![1.0, 2.0, 3.0],
            ))
            .unwrap();

        assert_eq!(form.row_swaps()[0], (0, 2));
        assert_unit_upper_triangular(form.matrix());
    }

    #[test]
    fn test_singular_first_column() {
        let reducer = RowEchelonReducer::default();
        let err = reducer
            .reduce(system(array![[0.0, 0.0], [0.0, 1.0]], array![1.0, 1.0]))
            .unwrap_err();

        assert_eq!(err, GaussError::ZeroPivot { column: 0 });
        assert!(err.is_singular());
    }

    #[test]
    fn test_singular_last_column() {
        let reducer = RowEchelonReducer::default();
        let err = reducer
            .reduce(system(array![[1.0, 2.0], [2.0, 4.0]], array![1.0, 2.0]))
            .unwrap_err();

        assert_eq!(err, GaussError::ZeroPivot { column: 1 });
    }

    #[test]
    fn test_largest_magnitude_pivoting() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![5.0, 6.0];

        let first = RowEchelonReducer::new(PivotStrategy::FirstNonZero, 0.0)
            .reduce(system(a.clone(), b.clone()))
            .unwrap();
        let largest = RowEchelonReducer::new(PivotStrategy::LargestMagnitude, 0.0)
            .reduce(system(a, b))
            .unwrap();

        assert!(first.row_swaps().is_empty());
        assert_eq!(largest.row_swaps(), &[(0, 1)]);
        assert_relative_eq!(first.determinant(), -2.0, epsilon = 1e-12);
        assert_relative_eq!(largest.determinant(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pivot_tolerance() {
        let a = array![[1e-20, 1.0], [1.0, 1.0]];
        let b = array![1.0, 2.0];

        let exact = RowEchelonReducer::new(PivotStrategy::FirstNonZero, 0.0)
            .reduce(system(a.clone(), b.clone()))
            .unwrap();
        assert!(exact.row_swaps().is_empty());

        let tolerant = RowEchelonReducer::new(PivotStrategy::FirstNonZero, 1e-12)
            .reduce(system(a, b))
            .unwrap();
        assert_eq!(tolerant.row_swaps(), &[(0, 1)]);
    }

    #[test]
    fn test_into_parts_returns_reduced_system() {
        let reducer = RowEchelonReducer::new(PivotStrategy::LargestMagnitude, 0.0);
        assert_eq!(reducer.pivoting(), PivotStrategy::LargestMagnitude);
        assert_eq!(RowEchelonReducer::<f64>::default().pivoting(), PivotStrategy::FirstNonZero);

        let form = reducer
            .reduce(system(array![[1.0, 2.0], [4.0, 4.0]], array![3.0, 8.0]))
            .unwrap();
        let (a, b) = form.into_parts();
        assert_eq!(a, array![[1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(b, array![2.0, 1.0]);
    }

    #[test]
    fn test_empty_system() {
        let form = RowEchelonReducer::<f64>::default()
            .reduce(system(Array2::zeros((0, 0)), Array1::zeros(0)))
            .unwrap();
        assert_eq!(form.dim(), 0);
        assert_relative_eq!(form.determinant(), 1.0);
    }
}
