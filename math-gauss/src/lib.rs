//! Dense linear system solver
//!
//! This crate solves `A x = b` for small to moderate dense square systems by
//! Gaussian elimination with pivoting followed by back substitution.
//!
//! # Features
//!
//! - **Forward elimination**: reduction to unit upper-triangular form, with
//!   first-non-zero (default) or largest-magnitude pivot selection
//! - **Back substitution**: division-free solve of the reduced system
//! - **Validation**: shape, finiteness and optional determinant checks
//! - **Generic Scalar Types**: Works with f64 and f32
//!
//! # Example
//!
//! ```
//! use math_gauss::gauss_solve;
//! use ndarray::array;
//!
//! let a = array![[1.0, 1.0], [1.0, -1.0]];
//! let b = array![5.0, 1.0];
//!
//! let x = gauss_solve(&a, &b)?;
//! assert_eq!(x, array![3.0, 2.0]);
//! # Ok::<(), math_gauss::GaussError>(())
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod row_ops;
pub mod traits;
pub mod validate;

// Re-export main types
pub use error::GaussError;
pub use row_ops::AugmentedSystem;
pub use traits::RealField;

// Re-export direct solvers
pub use direct::{
    BackSubstitutionSolver, EchelonForm, GaussConfig, GaussSolution, GaussSolver, PivotStrategy,
    RowEchelonReducer, SingularityCheck, back_substitute, gauss_solve,
};

pub use config::{ConfigError, SystemFile};
pub use validate::InputValidator;
