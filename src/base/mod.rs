//! Implements the base structures: stress tensors, Gauss-point samples, and file paths

mod constants;
mod filepath;
mod gauss_point;
mod stress_tensor;
pub use crate::base::constants::*;
pub use crate::base::filepath::*;
pub use crate::base::gauss_point::*;
pub use crate::base::stress_tensor::*;
