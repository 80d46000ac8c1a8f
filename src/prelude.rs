//! Makes available common structures needed to post-process stress states
//!
//! You may write `use mohrcirc::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analysis::{average_stress, AvgMethod, MohrCircle, PrincipalStresses};
pub use crate::base::{FilePath, GaussPointSample, StressTensor, DEFAULT_OUT_DIR, SYM_TOL};
pub use crate::util::MohrPlot;
pub use crate::StrError;
