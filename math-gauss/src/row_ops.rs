//! Row operations on an augmented system `[A | b]`
//!
//! Every operation here acts on a row of `A` and the matching entry of `b`
//! together, so the system keeps its solution set. Rows are never touched
//! one side at a time.

use crate::error::GaussError;
use crate::traits::RealField;
use crate::validate::{check_finite, check_shape};
use ndarray::{Array1, Array2};

/// Square matrix `A` and right-hand side `b`, owned together.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedSystem<T: RealField> {
    a: Array2<T>,
    b: Array1<T>,
}

impl<T: RealField> AugmentedSystem<T> {
    /// Take ownership of `a` and `b`.
    ///
    /// Rejects non-square or mismatched shapes and NaN or infinite entries,
    /// so elimination never compares against a non-finite pivot.
    ///
    /// The arrays are consumed: any later row operation mutates them. Use
    /// [`AugmentedSystem::from_views`] to work on private copies instead.
    pub fn new(a: Array2<T>, b: Array1<T>) -> Result<Self, GaussError> {
        check_shape(&a, &b)?;
        check_finite(&a, &b)?;
        Ok(Self { a, b })
    }

    /// Build a system from private copies of `a` and `b`
    pub fn from_views(a: &Array2<T>, b: &Array1<T>) -> Result<Self, GaussError> {
        check_shape(a, b)?;
        check_finite(a, b)?;
        Ok(Self {
            a: a.clone(),
            b: b.clone(),
        })
    }

    /// Number of equations (and unknowns)
    #[inline]
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Coefficient matrix
    pub fn matrix(&self) -> &Array2<T> {
        &self.a
    }

    /// Right-hand side
    pub fn rhs(&self) -> &Array1<T> {
        &self.b
    }

    /// Entry `A[row][col]`
    #[inline]
    pub fn coeff(&self, row: usize, col: usize) -> T {
        self.a[[row, col]]
    }

    /// Give the arrays back to the caller
    pub fn into_parts(self) -> (Array2<T>, Array1<T>) {
        (self.a, self.b)
    }

    /// Swap whole rows `i` and `j` of `A` and entries `i` and `j` of `b`
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for col in 0..self.a.ncols() {
            self.a.swap([i, col], [j, col]);
        }
        self.b.swap(i, j);
    }

    /// Row operation `R_i = R_i / divisor`
    ///
    /// The caller guarantees `divisor` is non-zero.
    pub fn divide_row(&mut self, i: usize, divisor: T) {
        for col in 0..self.a.ncols() {
            self.a[[i, col]] /= divisor;
        }
        self.b[i] /= divisor;
    }

    /// Row operation `R_dst = R_dst - factor * R_src` (axpy on rows)
    pub fn subtract_scaled_row(&mut self, dst: usize, src: usize, factor: T) {
        debug_assert_ne!(dst, src, "Row combination needs two distinct rows");
        for col in 0..self.a.ncols() {
            let update = factor * self.a[[src, col]];
            self.a[[dst, col]] -= update;
        }
        let update = factor * self.b[src];
        self.b[dst] -= update;
    }
}

/// Max-norm residual `||A x - b||_inf`
///
/// # Panics
/// Panics if the dimensions of `a`, `x` and `b` do not agree.
pub fn residual_max_norm<T: RealField>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> T {
    assert_eq!(a.ncols(), x.len(), "Matrix columns must match solution length");
    assert_eq!(a.nrows(), b.len(), "Matrix rows must match right-hand side length");
    let mut max = T::zero();
    for (row, &bi) in a.outer_iter().zip(b.iter()) {
        let mut ax = T::zero();
        for (&aij, &xj) in row.iter().zip(x.iter()) {
            ax += aij * xj;
        }
        max = max.max((ax - bi).abs());
    }
    max
}
