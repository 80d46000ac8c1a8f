use super::StressTensor;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Holds the stress tensor and volume of one Gauss point
///
/// The volume acts as the weight of this sample in volumetric averaging
/// and must be positive; this is validated on construction so that the
/// averaging routines can rely on it.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct GaussPointSample {
    stress: StressTensor,
    volume: f64,
}

impl GaussPointSample {
    /// Allocates a new instance
    pub fn new(stress: StressTensor, volume: f64) -> Result<Self, StrError> {
        if !volume.is_finite() || volume <= 0.0 {
            return Err("volume must be positive");
        }
        Ok(GaussPointSample { stress, volume })
    }

    /// Reads the stress tensor and volume from a text file
    ///
    /// # File format
    ///
    /// ```text
    /// Vol: 2.5
    /// 10.0  0.0  0.0
    ///  0.0 20.0  0.0
    ///  0.0  0.0 30.0
    /// ```
    ///
    /// The first line holds a label, a colon, and the (positive) volume.
    /// The next three lines hold the rows of the symmetric stress tensor
    /// with three whitespace-separated values each. Blank lines are
    /// ignored; any other content is an error.
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn from_text_file<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let mut volume = None;
        let mut sig = [[0.0; 3]; 3];
        let mut nrow = 0;
        for line in reader.lines() {
            let line = line.map_err(|_| "cannot read line")?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if volume.is_none() {
                let (_, value) = trimmed
                    .split_once(':')
                    .ok_or("header must contain a label, a colon, and the volume")?;
                let vol: f64 = value
                    .trim()
                    .parse()
                    .map_err(|_| "volume must be a number")?;
                if !vol.is_finite() || vol <= 0.0 {
                    return Err("volume must be positive");
                }
                volume = Some(vol);
                continue;
            }
            if nrow == 3 {
                return Err("file must contain exactly three tensor rows");
            }
            let mut ncol = 0;
            for token in trimmed.split_whitespace() {
                if ncol == 3 {
                    return Err("tensor row must contain exactly three values");
                }
                sig[nrow][ncol] = token.parse().map_err(|_| "tensor component must be a number")?;
                ncol += 1;
            }
            if ncol != 3 {
                return Err("tensor row must contain exactly three values");
            }
            nrow += 1;
        }
        let volume = match volume {
            Some(v) => v,
            None => return Err("file must contain a header line with the volume"),
        };
        if nrow != 3 {
            return Err("file must contain exactly three tensor rows");
        }
        let stress = StressTensor::new(sig)?;
        GaussPointSample::new(stress, volume)
    }

    /// Returns the stress tensor
    pub fn stress(&self) -> &StressTensor {
        &self.stress
    }

    /// Returns the volume
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Returns a copy of this sample with the volume replaced by one
    ///
    /// Used to perform arithmetic averaging with the volume-weighted
    /// routine (every weight equal to one).
    pub fn with_unit_volume(&self) -> Self {
        GaussPointSample {
            stress: self.stress,
            volume: 1.0,
        }
    }

    /// Returns a copy of this sample with the stress scaled by a factor
    ///
    /// The volume is kept as-is since unit conversion of the stress does
    /// not change the weight of the Gauss point.
    pub fn scaled(&self, factor: f64) -> Result<Self, StrError> {
        Ok(GaussPointSample {
            stress: self.stress.scaled(factor)?,
            volume: self.volume,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
