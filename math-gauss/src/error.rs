//! Error types for the dense solver

use thiserror::Error;

/// Errors that can occur while validating, reducing or solving a system
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaussError {
    #[error("Matrix is not square: {rows} rows, {cols} columns")]
    NotSquare { rows: usize, cols: usize },
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("Non-finite entry at {}", location(.row, .col))]
    NonFiniteEntry { row: usize, col: Option<usize> },
    #[error("Entry at {} is not representable as a float", location(.row, .col))]
    InvalidEntry { row: usize, col: Option<usize> },
    #[error("Matrix is singular (zero determinant)")]
    SingularMatrix,
    #[error("Matrix is singular: no non-zero pivot in column {column}")]
    ZeroPivot { column: usize },
}

/// `col == None` addresses the right-hand side
fn location(row: &usize, col: &Option<usize>) -> String {
    match col {
        Some(c) => format!("row {row}, column {c}"),
        None => format!("row {row} of the right-hand side"),
    }
}

impl GaussError {
    /// True for errors caused by the shape of the input
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            GaussError::NotSquare { .. }
                | GaussError::DimensionMismatch { .. }
                | GaussError::RaggedRow { .. }
        )
    }

    /// True for errors meaning the system has no unique solution
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            GaussError::SingularMatrix | GaussError::ZeroPivot { .. }
        )
    }
}
