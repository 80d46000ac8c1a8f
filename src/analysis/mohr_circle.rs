use serde::{Deserialize, Serialize};

/// Holds the center and radius of one Mohr's circle
///
/// The circle is centered on the normal-stress axis at `(σa + σb)/2` with
/// radius `(σa - σb)/2`, where σa ≥ σb are two principal stresses.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct MohrCircle {
    /// Center on the normal-stress axis: (σa + σb) / 2
    pub center: f64,

    /// Radius (maximum shear between the two principal directions): (σa - σb) / 2
    pub radius: f64,
}

impl MohrCircle {
    /// Allocates a new instance from two principal stresses with σa ≥ σb
    pub fn new(sig_a: f64, sig_b: f64) -> Self {
        MohrCircle {
            center: 0.5 * (sig_a + sig_b),
            radius: 0.5 * (sig_a - sig_b),
        }
    }

    /// Tells whether the circle collapses to a point (equal principal stresses)
    pub fn is_degenerate(&self, tol: f64) -> bool {
        self.radius <= tol
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
