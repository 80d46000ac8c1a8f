use super::SYM_TOL;
use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};

/// Holds a symmetric 3x3 stress tensor
///
/// The components are validated on construction: every component must be
/// finite and the matrix must be symmetric within [SYM_TOL] (absolute).
/// Instances are immutable; scaling returns a new tensor.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct StressTensor {
    sig: [[f64; 3]; 3],
}

impl StressTensor {
    /// Allocates a new instance from the full 3x3 components
    ///
    /// Returns an error if any component is not finite or if the matrix
    /// is not symmetric within [SYM_TOL].
    pub fn new(sig: [[f64; 3]; 3]) -> Result<Self, StrError> {
        for i in 0..3 {
            for j in 0..3 {
                if !sig[i][j].is_finite() {
                    return Err("stress tensor components must be finite");
                }
            }
        }
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            if f64::abs(sig[i][j] - sig[j][i]) > SYM_TOL {
                return Err("stress tensor must be symmetric");
            }
        }
        Ok(StressTensor { sig })
    }

    /// Allocates a diagonal tensor with the given normal components
    pub fn diagonal(sxx: f64, syy: f64, szz: f64) -> Result<Self, StrError> {
        StressTensor::new([[sxx, 0.0, 0.0], [0.0, syy, 0.0], [0.0, 0.0, szz]])
    }

    /// Returns the (i,j) component
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.sig[i][j]
    }

    /// Returns a new tensor with every component multiplied by a factor
    ///
    /// The factor may be negative or a unit-conversion constant such as
    /// 0.001 (MPa to GPa). Returns an error if the factor is not finite
    /// or if the multiplication overflows.
    pub fn scaled(&self, factor: f64) -> Result<Self, StrError> {
        if !factor.is_finite() {
            return Err("scaling factor must be finite");
        }
        let mut sig = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                sig[i][j] = self.sig[i][j] * factor;
            }
        }
        StressTensor::new(sig)
    }

    /// Returns a copy of the components as a russell Matrix
    pub fn as_matrix(&self) -> Matrix {
        Matrix::from(&self.sig)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
