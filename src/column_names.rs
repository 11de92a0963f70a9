//! Centralized column naming for the Noise vs. Exposure table
//!
//! The DevWare export always carries nine columns in a fixed order. Plot
//! functions and the parser refer to them through these constants.

/// Number of columns in a measurement table
pub const COLUMN_COUNT: usize = 9;

pub const COL_EXPOSURE: usize = 0;
pub const COL_SIGNAL: usize = 1;
pub const COL_RMS_DYN: usize = 2;
pub const COL_AVG_DYN: usize = 3;
pub const COL_FPN: usize = 4;
pub const COL_COL_FPN: usize = 5;
pub const COL_ROW_FPN: usize = 6;
pub const COL_COL_DYN: usize = 7;
pub const COL_ROW_DYN: usize = 8;

/// Fixed-pattern noise columns, in legend order
pub const FPN_COLUMNS: [usize; 3] = [COL_FPN, COL_COL_FPN, COL_ROW_FPN];

/// Temporal noise columns, in legend order
pub const DYN_COLUMNS: [usize; 4] = [COL_RMS_DYN, COL_AVG_DYN, COL_COL_DYN, COL_ROW_DYN];

/// Axis and legend labels, indexed by column
pub const COLUMN_LABELS: [&str; COLUMN_COUNT] = [
    "Exposure time [ms]",
    "Signal",
    "RMS Dyn (temporal noise)",
    "Avg Dyn (temporal noise)",
    "FPN (fixed pattern noise)",
    "columnwise FPN",
    "rowwise FPN",
    "columnwise temporal noise",
    "rowwise temporal noise",
];

/// Get the label for a given column index
///
/// # Panics
/// Panics if index is not a valid column (0..9)
pub fn column_label(index: usize) -> &'static str {
    match COLUMN_LABELS.get(index) {
        Some(label) => label,
        None => panic!(
            "Invalid column index: {}. Expected 0..{}",
            index, COLUMN_COUNT
        ),
    }
}

/// Legend entry for a column: its index followed by its label, e.g. "4 FPN (fixed pattern noise)"
pub fn legend_label(index: usize) -> String {
    format!("{} {}", index, column_label(index))
}
