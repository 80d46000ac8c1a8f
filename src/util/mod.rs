//! Contains utility structures to render figures

mod mohr_plot;
pub use crate::util::mohr_plot::*;
