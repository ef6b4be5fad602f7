// src/processing/linalg.rs
//! Dense LU factorisation with partial pivoting
//!
//! Factorisation and substitution are delegated to `nalgebra`. The
//! autocorrelation matrix is symmetric but is factorised as a general dense
//! matrix; no symmetric or Toeplitz shortcut is taken.

use nalgebra::{linalg::LU, DMatrix, DVector, Dyn};
use ndarray::{Array1, Array2};

use crate::error::{ProcessingStage, WienerError, WienerResult};
use crate::error_context;

/// LU factors of a square matrix, `P·A = L·U`
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    lu: LU<f64, Dyn, Dyn>,
    order: usize,
}

impl LuDecomposition {
    /// Factorise `matrix`
    ///
    /// A diagonal entry of U whose magnitude is at or below
    /// `tolerance × max|a_ij|` marks the matrix singular. A zero matrix is
    /// always singular. Non-finite entries are rejected outright.
    pub fn new(matrix: &Array2<f64>, tolerance: f64) -> WienerResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(WienerError::InvalidArgument {
                reason: format!("matrix must be square, got {}x{}", rows, cols),
                context: error_context!(ProcessingStage::Solve, "lu_decompose"),
            });
        }
        if let Some(bad) = matrix.iter().find(|v| !v.is_finite()) {
            return Err(WienerError::InvalidArgument {
                reason: format!("matrix holds non-finite entry {}", bad),
                context: error_context!(ProcessingStage::Solve, "lu_decompose"),
            });
        }

        let n = rows;
        let scale = matrix.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        let threshold = tolerance * scale;

        let singular = |column: usize, pivot: f64| WienerError::SingularMatrix {
            order: n,
            column,
            pivot,
            context: error_context!(ProcessingStage::Solve, "lu_decompose")
                .add_info("tolerance", tolerance)
                .add_info("scale", scale),
        };

        if scale == 0.0 {
            return Err(singular(0, 0.0));
        }

        let lu = DMatrix::from_fn(n, n, |i, j| matrix[[i, j]]).lu();
        if let Some((column, &pivot)) = lu
            .u()
            .diagonal()
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || p.abs() <= threshold)
        {
            return Err(singular(column, pivot));
        }

        Ok(Self { lu, order: n })
    }

    /// Dimension of the factored matrix
    pub fn dim(&self) -> usize {
        self.order
    }

    /// Solve `A·x = rhs` with the stored factors
    pub fn solve(&self, rhs: &Array1<f64>) -> WienerResult<Array1<f64>> {
        let n = self.dim();
        if rhs.len() != n {
            return Err(WienerError::LengthMismatch {
                input: n,
                desired: rhs.len(),
                context: error_context!(ProcessingStage::Solve, "lu_solve")
                    .add_info("reason", "right-hand side length differs from matrix order"),
            });
        }

        let b = DVector::from_iterator(n, rhs.iter().copied());
        let x = self.lu.solve(&b).ok_or_else(|| WienerError::SingularMatrix {
            order: n,
            column: n.saturating_sub(1),
            pivot: 0.0,
            context: error_context!(ProcessingStage::Solve, "lu_solve"),
        })?;

        Ok(x.iter().copied().collect())
    }
}

/// Factorise and solve `matrix · x = rhs` in one call
pub fn solve_linear_system(
    matrix: &Array2<f64>,
    rhs: &Array1<f64>,
    tolerance: f64,
) -> WienerResult<Array1<f64>> {
    LuDecomposition::new(matrix, tolerance)?.solve(rhs)
}
