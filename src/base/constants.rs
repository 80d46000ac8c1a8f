/// Defines the directory where figures and result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/mohrcirc";

/// Defines the absolute tolerance to accept a stress tensor as symmetric
pub const SYM_TOL: f64 = 1e-9;
