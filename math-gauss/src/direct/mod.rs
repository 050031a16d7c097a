//! Direct solvers for dense linear systems
//!
//! This module provides Gaussian elimination in three stages:
//! - [`RowEchelonReducer`]: forward elimination with pivoting
//! - [`BackSubstitutionSolver`]: solve of the unit upper-triangular result
//! - [`GaussSolver`] / [`gauss_solve`]: validation plus both stages

mod back_substitution;
mod echelon;
mod gauss;

pub use back_substitution::{BackSubstitutionSolver, back_substitute};
pub use echelon::{EchelonForm, PivotStrategy, RowEchelonReducer};
pub use gauss::{GaussConfig, GaussSolution, GaussSolver, SingularityCheck, gauss_solve};
