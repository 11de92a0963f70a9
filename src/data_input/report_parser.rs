// src/data_input/report_parser.rs

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use log::{debug, info, warn};
use ndarray::Array2;

use crate::column_names::COLUMN_COUNT;
use crate::data_input::measurement_metadata::MeasurementMetadata;
use crate::data_input::report::ParsedReport;
use crate::error::{NoiseReportError, Result};

/// Lines before the numeric table: the `label=<full range>` line and two header lines.
pub const HEADER_LINES: usize = 3;

/// Parses a Noise vs. Exposure export.
///
/// The file name gives the acquisition settings, the first line the full-scale
/// signal value and everything after the third line the 9-column table.
pub fn load_report(input_file_path: &Path) -> Result<ParsedReport> {
    let metadata = MeasurementMetadata::from_path(input_file_path)?;

    let mut raw_bytes: Vec<u8> = Vec::new();
    {
        let file = File::open(input_file_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => NoiseReportError::FileNotFound(input_file_path.to_path_buf()),
            _ => NoiseReportError::Io {
                path: input_file_path.to_path_buf(),
                source: e,
            },
        })?;
        BufReader::new(file)
            .read_to_end(&mut raw_bytes)
            .map_err(|e| NoiseReportError::Io {
                path: input_file_path.to_path_buf(),
                source: e,
            })?;
    } // File handle is dropped here

    // Header lines may carry Latin-1 units (e.g. "µs"); only the numbers matter.
    let content = String::from_utf8_lossy(&raw_bytes);

    let first_line = content.lines().next().unwrap_or("");
    let full_range = parse_full_range(first_line)?;
    debug!("Full range from header: {full_range}");

    let table = parse_table(&content)?;
    info!(
        "Read {} exposure samples from '{}'",
        table.nrows(),
        input_file_path.display()
    );

    let report = ParsedReport::new(input_file_path.to_path_buf(), metadata, full_range, table);
    if !report.exposure_is_ascending() {
        warn!("Exposure column is not ascending; lines are drawn in file order");
    }
    Ok(report)
}

/// Reads the full-scale value from a `label=<integer>` line.
pub fn parse_full_range(line: &str) -> Result<i64> {
    let value = line
        .split('=')
        .nth(1)
        .ok_or_else(|| NoiseReportError::MalformedHeader {
            line: line.to_string(),
            reason: "missing '='".to_string(),
        })?;
    value
        .trim()
        .parse::<i64>()
        .map_err(|e| NoiseReportError::MalformedHeader {
            line: line.to_string(),
            reason: format!("'{}' is not an integer: {}", value.trim(), e),
        })
}

/// Parses the numeric table of a whole report, skipping the header lines.
///
/// Rows are whitespace-delimited. Anything after a `#` is a comment, and
/// blank lines are ignored. Every row must hold exactly `COLUMN_COUNT` numbers.
pub fn parse_table(content: &str) -> Result<Array2<f64>> {
    let mut values: Vec<f64> = Vec::new();
    let mut row_count = 0usize;

    for (line_index, line) in content.lines().enumerate().skip(HEADER_LINES) {
        let line_number = line_index + 1;
        let data = line.split('#').next().unwrap_or("").trim();
        if data.is_empty() {
            continue;
        }

        let fields: Vec<&str> = data.split_whitespace().collect();
        if fields.len() != COLUMN_COUNT {
            return Err(NoiseReportError::MalformedTable {
                line: line_number,
                reason: format!("expected {} columns, found {}", COLUMN_COUNT, fields.len()),
            });
        }

        for field in fields {
            let value = field
                .parse::<f64>()
                .map_err(|_| NoiseReportError::MalformedTable {
                    line: line_number,
                    reason: format!("'{field}' is not a number"),
                })?;
            values.push(value);
        }
        row_count += 1;
    }

    if row_count == 0 {
        return Err(NoiseReportError::MalformedTable {
            line: HEADER_LINES + 1,
            reason: "no data rows".to_string(),
        });
    }

    Array2::from_shape_vec((row_count, COLUMN_COUNT), values).map_err(|e| {
        NoiseReportError::MalformedTable {
            line: HEADER_LINES + 1,
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Full Range=16383\nExposure\tSignal\tRMS Dyn\tAvg Dyn\tFPN\tCol FPN\tRow FPN\tCol Dyn\tRow Dyn\n-----\n";

    #[test]
    fn test_parse_full_range() {
        assert_eq!(parse_full_range("label=12345").unwrap(), 12345);
        assert_eq!(parse_full_range("Full Range = 4095 ").unwrap(), 4095);
    }

    #[test]
    fn test_parse_full_range_missing_equals() {
        match parse_full_range("label 12345") {
            Err(NoiseReportError::MalformedHeader { reason, .. }) => assert!(reason.contains("'='")),
            other => panic!("expected MalformedHeader, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_full_range_not_integer() {
        assert!(matches!(
            parse_full_range("label=16383.5"),
            Err(NoiseReportError::MalformedHeader { .. })
        ));
        assert!(matches!(
            parse_full_range("label="),
            Err(NoiseReportError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_parse_table_shape_and_values() {
        let content = format!(
            "{HEADER}0.1\t100\t1.5\t1.25\t2\t0.5\t0.75\t0.125\t0.0625\n\
             1.0\t1000\t2.5\t2.25\t3\t1.5\t1.75\t1.125\t1.0625\n\
             \n\
             10.0\t10000\t3.5\t3.25\t4\t2.5\t2.75\t2.125\t2.0625\n"
        );
        let table = parse_table(&content).unwrap();
        assert_eq!(table.dim(), (3, COLUMN_COUNT));
        assert_eq!(table[[0, 0]], 0.1);
        assert_eq!(table[[1, 1]], 1000.0);
        assert_eq!(table[[2, 8]], 2.0625);
        assert_eq!(table.row(0).to_vec(), vec![0.1, 100.0, 1.5, 1.25, 2.0, 0.5, 0.75, 0.125, 0.0625]);
    }

    #[test]
    fn test_parse_table_accepts_mixed_whitespace() {
        let content = format!("{HEADER}  0.1 100\t1  1 1 1\t\t1 1 1  \n");
        let table = parse_table(&content).unwrap();
        assert_eq!(table.dim(), (1, COLUMN_COUNT));
    }

    #[test]
    fn test_parse_table_jagged_row() {
        let content = format!(
            "{HEADER}0.1 100 1 1 1 1 1 1 1\n0.2 200 1 1 1 1 1 1\n"
        );
        match parse_table(&content) {
            Err(NoiseReportError::MalformedTable { line, reason }) => {
                assert_eq!(line, 5);
                assert!(reason.contains("expected 9 columns, found 8"), "{reason}");
            }
            other => panic!("expected MalformedTable, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_table_consistent_but_wrong_width() {
        let content = format!("{HEADER}0.1 100 1 1 1 1 1 1\n0.2 200 1 1 1 1 1 1\n");
        assert!(matches!(
            parse_table(&content),
            Err(NoiseReportError::MalformedTable { line: 4, .. })
        ));
    }

    #[test]
    fn test_parse_table_non_numeric_field() {
        let content = format!("{HEADER}0.1 100 1 1 abc 1 1 1 1\n");
        match parse_table(&content) {
            Err(NoiseReportError::MalformedTable { reason, .. }) => assert!(reason.contains("'abc'")),
            other => panic!("expected MalformedTable, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_table_strips_inline_comments() {
        let content = format!(
            "{HEADER}# first sweep\n0.1 100 1 1 1 1 1 1 1 # saturated below\n1.0 900 2 2 2 2 2 2 2\n"
        );
        let table = parse_table(&content).unwrap();
        assert_eq!(table.dim(), (2, COLUMN_COUNT));
        assert_eq!(table[[0, 8]], 1.0);
    }

    #[test]
    fn test_parse_table_without_rows() {
        assert!(matches!(
            parse_table(HEADER),
            Err(NoiseReportError::MalformedTable { .. })
        ));
    }
}

// src/data_input/report_parser.rs
