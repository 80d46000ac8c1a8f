use super::DEFAULT_OUT_DIR;
use std::path::{Path, PathBuf};

pub struct FilePath {}

impl FilePath {
    /// Returns the filepath of a Gauss-point data file
    ///
    /// The filename is `<prefix><index>.<ext>`, e.g., `Gr1_MatPt3.dat`
    ///
    /// # Input
    ///
    /// * `prefix` -- the filename prefix, e.g., `Gr1_MatPt`
    /// * `index` -- the 1-based Gauss-point index
    /// * `ext` -- the extension without the dot, e.g., `dat`
    /// * `use_tmp_dir` -- use "/tmp/mohrcirc" instead of local "data/stress" directory
    pub fn gauss_data(prefix: &str, index: usize, ext: &str, use_tmp_dir: bool) -> PathBuf {
        let filename = format!("{}{}.{}", prefix, index, ext);
        if use_tmp_dir {
            Path::new(DEFAULT_OUT_DIR).join(filename)
        } else {
            Path::new("data").join("stress").join(filename)
        }
    }

    /// Returns the filepath of a figure (.png) file
    ///
    /// # Input
    ///
    /// * `filename_key` -- the filename without path and extension; ".png" will be added
    /// * `use_tmp_dir` -- use "/tmp/mohrcirc" instead of local "data/figures" directory
    pub fn png(filename_key: &str, use_tmp_dir: bool) -> PathBuf {
        let mut filename = String::from(filename_key);
        filename.push_str(".png");
        if use_tmp_dir {
            Path::new(DEFAULT_OUT_DIR).join(filename)
        } else {
            Path::new("data").join("figures").join(filename)
        }
    }

    /// Returns the filepath of a results (.json) file
    ///
    /// # Input
    ///
    /// * `filename_key` -- the filename without path and extension; ".json" will be added
    /// * `use_tmp_dir` -- use "/tmp/mohrcirc" instead of local "data/results" directory
    pub fn json(filename_key: &str, use_tmp_dir: bool) -> PathBuf {
        let mut filename = String::from(filename_key);
        filename.push_str(".json");
        if use_tmp_dir {
            Path::new(DEFAULT_OUT_DIR).join(filename)
        } else {
            Path::new("data").join("results").join(filename)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
