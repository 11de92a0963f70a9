// src/datasets.rs

use std::path::{Path, PathBuf};

use crate::error::{NoiseReportError, Result};

/// Directory holding the recorded Noise vs. Exposure exports.
pub const DEFAULT_DATA_ROOT: &str = "/afs/psi.ch/project/EssentialMed/Images/NoiseVsExposure";

/// Known recordings, in catalog order.
pub const DEFAULT_DATA_FILES: [&str; 7] = [
    "AR0130_Navitar_10_100_3_16.txt",
    "AR0130_Navitar_10_500_3_16.txt",
    "AR0130_Navitar_20_200_3_12.txt",
    "AR0130_Navitar_20_200_4_16.txt",
    "AR0130_Navitar_20_200_6_16.txt",
    "AR0130_Navitar_20_500_5_16.txt",
    "AR0130_Navitar_50_100_1_10.txt",
];

/// Entry loaded when no index is given.
pub const DEFAULT_DATASET_INDEX: usize = 6;

/// A root directory plus the file names of the recordings stored in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetCatalog {
    root: PathBuf,
    files: Vec<String>,
}

impl Default for DatasetCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_DATA_ROOT,
            DEFAULT_DATA_FILES.iter().map(|f| f.to_string()).collect(),
        )
    }
}

impl DatasetCatalog {
    pub fn new(root: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            root: root.into(),
            files,
        }
    }

    /// Same file list, different root directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Full path of the recording at `index`.
    pub fn select(&self, index: usize) -> Result<PathBuf> {
        self.files
            .get(index)
            .map(|name| self.root.join(name))
            .ok_or(NoiseReportError::DatasetIndexOutOfRange {
                index,
                len: self.files.len(),
            })
    }
}


// src/datasets.rs
