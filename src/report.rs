//! Theoretical range/time report: build the text, overwrite the report file,
//! then load it back and echo it to the log.

use crate::debug_report;
use crate::error::ReportError;
use crate::kinematics::{theoretical_flight_time, theoretical_range};
use log::{info, warn};
use std::fs;
use std::path::Path;

/// One computed row of the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    pub index: usize, // 1-based
    pub angle_deg: f32,
    pub range: f32,
    pub time: f32,
}

impl ReportRow {
    pub fn new(index: usize, angle_deg: f32) -> Self {
        ReportRow {
            index,
            angle_deg,
            range: theoretical_range(angle_deg),
            time: theoretical_flight_time(angle_deg),
        }
    }

    pub fn to_line(&self) -> String {
        format!(
            "Range {n}: {range:.6} units, Time {n}: {time:.6} seconds.\n",
            n = self.index,
            range = self.range,
            time = self.time
        )
    }
}

/// Computes one row per angle, in table order.
pub fn compute_rows(angles: &[f32]) -> Vec<ReportRow> {
    angles
        .iter()
        .enumerate()
        .map(|(i, &angle)| ReportRow::new(i + 1, angle))
        .collect()
}

/// Concatenates the formatted lines for every angle into one buffer.
pub fn build_report(angles: &[f32]) -> String {
    let mut buffer = String::new();
    for row in compute_rows(angles) {
        debug_report!("Row {}: {} deg", row.index, row.angle_deg);
        buffer.push_str(&row.to_line());
    }
    buffer
}

/// Writes the report, replacing whatever the file held before.
pub fn write_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_report(path: &Path) -> Result<String, ReportError> {
    fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs the report phase. Failures are logged and never stop the program.
/// Returns the reloaded text when the read succeeds.
pub fn run(path: &Path, angles: &[f32]) -> Option<String> {
    let buffer = build_report(angles);
    debug_report!("Built report: {} lines, {} bytes", angles.len(), buffer.len());

    if let Err(e) = write_report(path, &buffer) {
        warn!("{}", e);
    }

    match read_report(path) {
        Ok(contents) => {
            info!("File data: {}", contents);
            Some(contents)
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}
