//! Input validation for dense systems
//!
//! Checks run before elimination starts, so a rejected system never reaches
//! the core and caller data is never partially mutated:
//! - shape conformance (square `A`, `b` of matching length)
//! - finite entries
//! - optional determinant-based singularity check

use crate::direct::{PivotStrategy, RowEchelonReducer, SingularityCheck};
use crate::error::GaussError;
use crate::row_ops::AugmentedSystem;
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use num_traits::ToPrimitive;

/// Check that `a` is square and that `b` has one entry per row.
///
/// Returns the system dimension.
pub fn check_shape<T>(a: &Array2<T>, b: &Array1<T>) -> Result<usize, GaussError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(GaussError::NotSquare { rows, cols });
    }
    if b.len() != rows {
        return Err(GaussError::DimensionMismatch {
            expected: rows,
            got: b.len(),
        });
    }
    Ok(rows)
}

/// Reject NaN and infinite entries in `a` or `b`
pub fn check_finite<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<(), GaussError> {
    for ((row, col), value) in a.indexed_iter() {
        if !value.is_finite() {
            return Err(GaussError::NonFiniteEntry {
                row,
                col: Some(col),
            });
        }
    }
    for (row, value) in b.iter().enumerate() {
        if !value.is_finite() {
            return Err(GaussError::NonFiniteEntry { row, col: None });
        }
    }
    Ok(())
}

/// Determinant of a square matrix, computed by elimination on a copy.
///
/// A column without a usable pivot gives a determinant of exactly zero.
pub fn determinant<T: RealField>(a: &Array2<T>) -> Result<T, GaussError> {
    let n = a.nrows();
    let system = AugmentedSystem::new(a.clone(), Array1::zeros(n))?;
    let reducer = RowEchelonReducer::new(PivotStrategy::FirstNonZero, T::zero());
    match reducer.reduce(system) {
        Ok(form) => Ok(form.determinant()),
        Err(GaussError::ZeroPivot { .. }) => Ok(T::zero()),
        Err(e) => Err(e),
    }
}

/// Validator run in front of the elimination core
#[derive(Debug, Clone)]
pub struct InputValidator<T: RealField> {
    singularity_check: SingularityCheck,
    tolerance: T,
}

impl<T: RealField> Default for InputValidator<T> {
    fn default() -> Self {
        Self::new(SingularityCheck::default(), T::zero())
    }
}

impl<T: RealField> InputValidator<T> {
    /// Create a validator.
    ///
    /// With [`SingularityCheck::Determinant`] a matrix whose determinant is
    /// within `tolerance` of zero is rejected.
    pub fn new(singularity_check: SingularityCheck, tolerance: T) -> Self {
        Self {
            singularity_check,
            tolerance,
        }
    }

    /// Validate borrowed inputs without copying them
    pub fn check(&self, a: &Array2<T>, b: &Array1<T>) -> Result<(), GaussError> {
        check_shape(a, b)?;
        check_finite(a, b)?;
        if self.singularity_check == SingularityCheck::Determinant {
            let det = determinant(a)?;
            if det.is_zero_within(self.tolerance) {
                log::debug!("Rejecting matrix with determinant {det}");
                return Err(GaussError::SingularMatrix);
            }
        }
        Ok(())
    }

    /// Validate owned inputs and hand them back unchanged.
    ///
    /// Validating an already sanitized system is a no-op.
    pub fn validate(
        &self,
        a: Array2<T>,
        b: Array1<T>,
    ) -> Result<(Array2<T>, Array1<T>), GaussError> {
        self.check(&a, &b)?;
        Ok((a, b))
    }

    /// Convert rows of any numeric type (e.g. integer literals) into a float
    /// system and validate it.
    pub fn sanitize_rows<S: ToPrimitive>(
        &self,
        rows: &[Vec<S>],
        rhs: &[S],
    ) -> Result<(Array2<T>, Array1<T>), GaussError> {
        let n = rows.len();
        let mut a = Array2::zeros((n, n));
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(GaussError::RaggedRow {
                    row: i,
                    expected: n,
                    got: row.len(),
                });
            }
            for (j, value) in row.iter().enumerate() {
                a[[i, j]] = to_float(value).ok_or(GaussError::InvalidEntry {
                    row: i,
                    col: Some(j),
                })?;
            }
        }

        if rhs.len() != n {
            return Err(GaussError::DimensionMismatch {
                expected: n,
                got: rhs.len(),
            });
        }
        let b = rhs
            .iter()
            .enumerate()
            .map(|(i, value)| to_float(value).ok_or(GaussError::InvalidEntry { row: i, col: None }))
            .collect::<Result<Array1<T>, _>>()?;

        self.validate(a, b)
    }
}

fn to_float<S: ToPrimitive, T: RealField>(value: &S) -> Option<T> {
    value.to_f64().and_then(T::from_f64)
}
