//! JSON description of a linear system
//!
//! ```json
//! {
//!   "a": [[1.0, 1.0], [1.0, -1.0]],
//!   "b": [5.0, 1.0],
//!   "solver": { "pivoting": "first_non_zero" }
//! }
//! ```
//!
//! `b` may also be written as an `n x 1` column: `[[5.0], [1.0]]`.

use crate::direct::{GaussConfig, SingularityCheck};
use crate::error::GaussError;
use crate::validate::InputValidator;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors reading or writing a system file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access system file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid system file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Right-hand side as a flat vector or as a single-column matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RhsInput {
    Flat(Vec<f64>),
    Column(Vec<[f64; 1]>),
}

impl RhsInput {
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            RhsInput::Flat(values) => values.clone(),
            RhsInput::Column(values) => values.iter().map(|[v]| *v).collect(),
        }
    }
}

/// Complete system description loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemFile {
    /// Coefficient matrix, one inner list per row
    pub a: Vec<Vec<f64>>,
    /// Right-hand side
    pub b: RhsInput,
    /// Solver configuration
    #[serde(default)]
    pub solver: GaussConfig<f64>,
}

impl SystemFile {
    pub fn new(a: Vec<Vec<f64>>, b: Vec<f64>) -> Self {
        Self {
            a,
            b: RhsInput::Flat(b),
            solver: GaussConfig::default(),
        }
    }

    /// Load from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Sanitized arrays with shape and finiteness checked.
    ///
    /// Singularity is left to the solver built from `self.solver`, so the
    /// determinant is never computed twice.
    pub fn to_arrays(&self) -> Result<(Array2<f64>, Array1<f64>), GaussError> {
        let validator = InputValidator::new(SingularityCheck::PivotOnly, 0.0);
        validator.sanitize_rows(&self.a, &self.b.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::{GaussSolver, PivotStrategy};
    use ndarray::array;

    #[test]
    fn test_flat_rhs() {
        let file = SystemFile::from_json_str(r#"{"a": [[1, 1], [1, -1]], "b": [5, 1]}"#).unwrap();

        assert_eq!(file.solver, GaussConfig::default());
        let (a, b) = file.to_arrays().unwrap();
        assert_eq!(a, array![[1.0, 1.0], [1.0, -1.0]]);
        assert_eq!(b, array![5.0, 1.0]);
    }

    #[test]
    fn test_column_rhs() {
        let file = SystemFile::from_json_str(
            r#"{"a": [[0.0, 1.0], [1.0, 0.0]], "b": [[1.0], [2.0]]}"#,
        )
        .unwrap();

        assert_eq!(file.b, RhsInput::Column(vec![[1.0], [2.0]]));
        let (_, b) = file.to_arrays().unwrap();
        assert_eq!(b, array![1.0, 2.0]);
    }

    #[test]
    fn test_solver_section() {
        let file = SystemFile::from_json_str(
            r#"{
                "a": [[1.0, 2.0], [2.0, 4.0]],
                "b": [1.0, 2.0],
                "solver": {"singularity_check": "determinant", "pivoting": "largest_magnitude"}
            }"#,
        )
        .unwrap();

        assert_eq!(file.solver.pivoting, PivotStrategy::LargestMagnitude);
        assert_eq!(file.solver.singularity_check, SingularityCheck::Determinant);

        // Loading only sanitizes; the configured solver rejects the matrix
        let (a, b) = file.to_arrays().unwrap();
        let err = GaussSolver::new(file.solver.clone()).solve(&a, &b).unwrap_err();
        assert_eq!(err, GaussError::SingularMatrix);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let file = SystemFile::new(vec![vec![1.0, 2.0], vec![3.0]], vec![1.0, 2.0]);
        assert!(file.to_arrays().unwrap_err().is_shape_error());
    }

    #[test]
    fn test_invalid_json() {
        let err = SystemFile::from_json_str(r#"{"a": [[1.0]]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("math-gauss-system-{}.json", std::process::id()));
        let file = SystemFile::new(vec![vec![2.0, 0.0], vec![0.0, 4.0]], vec![1.0, 1.0]);

        file.to_file(&path).unwrap();
        let loaded = SystemFile::from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, file);
    }
}
