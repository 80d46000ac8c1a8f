use crate::base::{GaussPointSample, StressTensor};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Specifies the method to average Gauss-point stresses
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum AvgMethod {
    /// Weights every tensor by the volume of its Gauss point
    VolumeWeighted,

    /// Weights every tensor equally (all volumes set to one)
    Arithmetic,
}

/// Averages the stress tensors of a collection of Gauss points
///
/// With [AvgMethod::VolumeWeighted], computes (componentwise):
///
/// ```text
///          Σ σᵢ Vᵢ
/// σavg = ─────────
///           Σ Vᵢ
/// ```
///
/// With [AvgMethod::Arithmetic], the same routine runs with every volume
/// replaced by one, i.e., the arithmetic mean is a special case of the
/// volume-weighted mean and shares its implementation.
pub fn average_stress(samples: &[GaussPointSample], method: AvgMethod) -> Result<StressTensor, StrError> {
    if samples.is_empty() {
        return Err("sample collection must not be empty");
    }
    match method {
        AvgMethod::Arithmetic => {
            let unit: Vec<GaussPointSample> = samples.iter().map(|s| s.with_unit_volume()).collect();
            average_stress(&unit, AvgMethod::VolumeWeighted)
        }
        AvgMethod::VolumeWeighted => {
            let mut sum = [[0.0; 3]; 3];
            let mut total_volume = 0.0;
            for sample in samples {
                for i in 0..3 {
                    for j in 0..3 {
                        sum[i][j] += sample.stress().get(i, j) * sample.volume();
                    }
                }
                total_volume += sample.volume();
            }
            // volumes are positive by construction; guard anyway
            if total_volume <= 0.0 {
                return Err("total volume must be positive");
            }
            for i in 0..3 {
                for j in 0..3 {
                    sum[i][j] /= total_volume;
                }
            }
            StressTensor::new(sum)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
