//! Mohrcirc implements a small post-processing pipeline for Gauss-point
//! stress states: read stress tensors and volumes from text files, scale
//! them (e.g., MPa to GPa), average them (volume-weighted or arithmetic),
//! compute the principal stresses, and plot the corresponding Mohr's circles.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analysis;
pub mod base;
pub mod prelude;
pub mod util;
