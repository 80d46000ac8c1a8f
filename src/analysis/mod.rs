//! Implements the averaging and principal-stress analysis of Gauss-point stresses

mod averaging;
mod mohr_circle;
mod principal_stresses;
pub use crate::analysis::averaging::*;
pub use crate::analysis::mohr_circle::*;
pub use crate::analysis::principal_stresses::*;
