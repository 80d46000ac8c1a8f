use super::MohrCircle;
use crate::base::{StressTensor, SYM_TOL};
use crate::StrError;
use russell_lab::{mat_eigen_sym_jacobi, Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the principal stresses (eigenvalues) of a stress tensor, sorted descending
///
/// The eigenvalues of a symmetric tensor are real; they are sorted such
/// that `s1 ≥ s2 ≥ s3`. Repeated eigenvalues are allowed and make the
/// corresponding Mohr's circle degenerate to a point (zero radius).
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct PrincipalStresses {
    /// Largest principal stress
    pub s1: f64,

    /// Intermediate principal stress
    pub s2: f64,

    /// Smallest principal stress
    pub s3: f64,
}

impl PrincipalStresses {
    /// Computes the principal stresses of a stress tensor
    ///
    /// Solves the symmetric eigenproblem with Jacobi rotations and sorts
    /// the eigenvalues in descending order.
    pub fn new(stress: &StressTensor) -> Result<Self, StrError> {
        // the tensor is symmetric by construction; re-check nonetheless
        // since the eigenvalues are only guaranteed real for symmetric input
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            if f64::abs(stress.get(i, j) - stress.get(j, i)) > SYM_TOL {
                return Err("stress tensor must be symmetric");
            }
        }
        let mut a = stress.as_matrix();
        let mut l = Vector::new(3);
        let mut v = Matrix::new(3, 3);
        mat_eigen_sym_jacobi(&mut l, &mut v, &mut a).map_err(|_| "eigenvalue computation did not converge")?;
        let mut eig = [l[0], l[1], l[2]];
        eig.sort_by(|a, b| b.total_cmp(a));
        Ok(PrincipalStresses {
            s1: eig[0],
            s2: eig[1],
            s3: eig[2],
        })
    }

    /// Returns the major Mohr's circle, spanned by s1 and s3
    ///
    /// Its radius (s1 - s3)/2 is the maximum shear stress and is never
    /// smaller than the radius of either minor circle.
    pub fn major_circle(&self) -> MohrCircle {
        MohrCircle::new(self.s1, self.s3)
    }

    /// Returns the three Mohr's circles: (s1,s3), (s1,s2), and (s2,s3)
    ///
    /// The major circle comes first.
    pub fn circles(&self) -> [MohrCircle; 3] {
        [
            MohrCircle::new(self.s1, self.s3),
            MohrCircle::new(self.s1, self.s2),
            MohrCircle::new(self.s2, self.s3),
        ]
    }

    /// Reads a JSON file containing the principal stresses
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn from_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let stresses = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(stresses)
    }

    /// Writes a JSON file with the principal stresses
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
