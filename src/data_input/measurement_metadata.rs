// src/data_input/measurement_metadata.rs

use std::path::Path;

use crate::error::{NoiseReportError, Result};

/// Number of '_'-separated tokens in a measurement file name.
pub const FILENAME_TOKEN_COUNT: usize = 6;

/// Acquisition settings encoded in the file name:
/// `<Sensor>_<Lens>_<FramesPerSample>_<MaxExposureMs>_<Decades>_<SamplesPerDecade>.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementMetadata {
    pub sensor: String,
    pub lens: String,
    pub frames_per_sample: String,
    pub max_exposure_ms: String,
    pub decades: String,
    pub samples_per_decade: String,
}

impl MeasurementMetadata {
    /// Parse the metadata from the file stem of `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_stem(&stem)
    }

    /// Parse the metadata from a base name without extension.
    pub fn from_stem(stem: &str) -> Result<Self> {
        let tokens: Vec<&str> = stem.split('_').collect();
        if tokens.len() != FILENAME_TOKEN_COUNT {
            return Err(NoiseReportError::MalformedFilename {
                name: stem.to_string(),
                found: tokens.len(),
            });
        }
        Ok(Self {
            sensor: tokens[0].to_string(),
            lens: tokens[1].to_string(),
            frames_per_sample: tokens[2].to_string(),
            max_exposure_ms: tokens[3].to_string(),
            decades: tokens[4].to_string(),
            samples_per_decade: tokens[5].to_string(),
        })
    }

    /// The six tokens in file-name order.
    pub fn tokens(&self) -> [&str; FILENAME_TOKEN_COUNT] {
        [
            self.sensor.as_str(),
            self.lens.as_str(),
            self.frames_per_sample.as_str(),
            self.max_exposure_ms.as_str(),
            self.decades.as_str(),
            self.samples_per_decade.as_str(),
        ]
    }

    /// Title pieces; the figure title joins all of them, each panel shows a slice.
    fn title_parts(&self) -> [&str; 10] {
        [
            self.sensor.as_str(),
            self.lens.as_str(),
            self.frames_per_sample.as_str(),
            "Frames per Sample",
            self.max_exposure_ms.as_str(),
            "ms Maximum Exposure",
            self.decades.as_str(),
            "Decades",
            self.samples_per_decade.as_str(),
            "Samples/Decade",
        ]
    }

    pub fn figure_title(&self) -> String {
        self.title_parts().join(" ")
    }

    /// Sensor and lens, shown above the signal panel.
    pub fn signal_title(&self) -> String {
        self.title_parts()[..2].join(" ")
    }

    /// Frames per sample and maximum exposure, shown above the FPN panel.
    pub fn fpn_title(&self) -> String {
        self.title_parts()[2..6].join(" ")
    }

    /// Decades and samples per decade, shown above the temporal noise panel.
    pub fn dyn_title(&self) -> String {
        self.title_parts()[6..].join(" ")
    }

    /// Human readable summary of the acquisition settings.
    pub fn description(&self) -> String {
        format!(
            "We are showing the data from the {} CMOS with the {} lens. \
             The analysis was done with {} frames per sample, {} ms maximum exposure \
             over {} decades with {} samples per decade. \
             If the exposure has not been recorded in \"log scale\", the \"Decades\" \
             correspond to the \"minimal exposure\" and the \"samples per decade\" \
             correspond to the \"numbers of samples\".",
            self.sensor,
            self.lens,
            self.frames_per_sample,
            self.max_exposure_ms,
            self.decades,
            self.samples_per_decade,
        )
    }
}


// src/data_input/measurement_metadata.rs
