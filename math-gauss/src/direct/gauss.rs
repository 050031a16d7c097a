//! Gaussian elimination solver
//!
//! Chains the three stages of a direct dense solve:
//! validation, forward elimination ([`RowEchelonReducer`]) and
//! [`BackSubstitutionSolver`]. The caller's `A` and `b` are never mutated:
//! elimination runs on private copies.

use super::back_substitution::BackSubstitutionSolver;
use super::echelon::{PivotStrategy, RowEchelonReducer};
use crate::error::GaussError;
use crate::row_ops::{AugmentedSystem, residual_max_norm};
use crate::traits::RealField;
use crate::validate::InputValidator;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// How singular matrices are detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingularityCheck {
    /// Rely on elimination: a column without a usable pivot is reported as
    /// [`GaussError::ZeroPivot`].
    #[default]
    PivotOnly,
    /// Compute the determinant up front and reject the matrix with
    /// [`GaussError::SingularMatrix`] before elimination starts. Costs one
    /// extra elimination pass.
    Determinant,
}

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "R: RealField + Deserialize<'de>"))]
pub struct GaussConfig<R> {
    /// Pivot row selection rule
    pub pivoting: PivotStrategy,
    /// Singularity detection
    pub singularity_check: SingularityCheck,
    /// Pivots (and determinants) with magnitude at or below this count as zero
    pub pivot_tolerance: R,
    /// Verbosity level (0 = quiet, 1 = summary)
    pub verbosity: usize,
}

impl<R: RealField> Default for GaussConfig<R> {
    fn default() -> Self {
        Self {
            pivoting: PivotStrategy::FirstNonZero,
            singularity_check: SingularityCheck::PivotOnly,
            pivot_tolerance: R::zero(),
            verbosity: 0,
        }
    }
}

/// Solution of a dense system
#[derive(Debug, Clone)]
pub struct GaussSolution<T: RealField> {
    /// Solution vector
    pub x: Array1<T>,
    /// Row swaps performed during elimination
    pub row_swaps: Vec<(usize, usize)>,
    /// Determinant of the original matrix
    pub determinant: T,
    /// `||A x - b||_inf` against the original system
    pub residual: T,
}

/// Dense direct solver
#[derive(Debug, Clone)]
pub struct GaussSolver<T: RealField> {
    config: GaussConfig<T>,
}

impl<T: RealField> Default for GaussSolver<T> {
    fn default() -> Self {
        Self::new(GaussConfig::default())
    }
}

impl<T: RealField> GaussSolver<T> {
    pub fn new(config: GaussConfig<T>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GaussConfig<T> {
        &self.config
    }

    /// Validator matching this solver's configuration
    pub fn validator(&self) -> InputValidator<T> {
        InputValidator::new(self.config.singularity_check, self.config.pivot_tolerance)
    }

    /// Forward-elimination stage matching this solver's configuration
    pub fn reducer(&self) -> RowEchelonReducer<T> {
        RowEchelonReducer::new(self.config.pivoting, self.config.pivot_tolerance)
    }

    /// Solve `A x = b`.
    ///
    /// # Errors
    /// - shape errors when `a` is not square or `b` does not match
    /// - [`GaussError::NonFiniteEntry`] for NaN or infinite inputs
    /// - [`GaussError::SingularMatrix`] / [`GaussError::ZeroPivot`] for
    ///   singular matrices
    pub fn solve(&self, a: &Array2<T>, b: &Array1<T>) -> Result<GaussSolution<T>, GaussError> {
        let start = Instant::now();
        self.validator().check(a, b)?;

        let system = AugmentedSystem::from_views(a, b)?;
        let form = self.reducer().reduce(system)?;
        let x = BackSubstitutionSolver.solve(&form);
        let residual = residual_max_norm(a, &x, b);

        if self.config.verbosity > 0 {
            log::info!(
                "Gaussian elimination: n={}, {} row swaps, residual={:.3e}, time={:?}",
                x.len(),
                form.row_swaps().len(),
                residual.to_f64().unwrap_or(f64::NAN),
                start.elapsed()
            );
        }

        Ok(GaussSolution {
            determinant: form.determinant(),
            row_swaps: form.row_swaps().to_vec(),
            x,
            residual,
        })
    }
}

/// Solve `A x = b` by Gaussian elimination with the default configuration.
///
/// This is a convenience function around [`GaussSolver`].
pub fn gauss_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>, GaussError> {
    GaussSolver::default().solve(a, b).map(|solution| solution.x)
}
