// src/data_input/report.rs

use std::path::{Path, PathBuf};

use ndarray::{Array2, ArrayView1};

use crate::column_names::{COLUMN_COUNT, COL_EXPOSURE};
use crate::data_input::measurement_metadata::MeasurementMetadata;

/// A fully parsed Noise vs. Exposure report.
///
/// Built once by the loader and handed to the renderer; there are no mutators.
#[derive(Debug, Clone)]
pub struct ParsedReport {
    source_path: PathBuf,
    metadata: MeasurementMetadata,
    full_range: i64,
    table: Array2<f64>, // rows x COLUMN_COUNT, file order
}

impl ParsedReport {
    /// Callers must pass a table with exactly `COLUMN_COUNT` columns.
    pub(crate) fn new(
        source_path: PathBuf,
        metadata: MeasurementMetadata,
        full_range: i64,
        table: Array2<f64>,
    ) -> Self {
        debug_assert_eq!(table.ncols(), COLUMN_COUNT);
        Self {
            source_path,
            metadata,
            full_range,
            table,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn metadata(&self) -> &MeasurementMetadata {
        &self.metadata
    }

    /// Full-scale signal value from the first header line.
    pub fn full_range(&self) -> i64 {
        self.full_range
    }

    pub fn table(&self) -> &Array2<f64> {
        &self.table
    }

    pub fn row_count(&self) -> usize {
        self.table.nrows()
    }

    /// One column of the table.
    ///
    /// # Panics
    /// Panics if `index >= COLUMN_COUNT`.
    pub fn column(&self, index: usize) -> ArrayView1<'_, f64> {
        self.table.column(index)
    }

    /// `(exposure, value)` pairs for a column, in file order.
    pub fn series(&self, index: usize) -> Vec<(f64, f64)> {
        self.column(COL_EXPOSURE)
            .iter()
            .zip(self.column(index).iter())
            .map(|(&x, &y)| (x, y))
            .collect()
    }

    /// True when the exposure column never decreases from one row to the next.
    pub fn exposure_is_ascending(&self) -> bool {
        let exposure = self.column(COL_EXPOSURE);
        exposure
            .iter()
            .zip(exposure.iter().skip(1))
            .all(|(prev, next)| next >= prev)
    }
}


// src/data_input/report.rs
