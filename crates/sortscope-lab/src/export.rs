//! Report export: CSV, plain-text table and JSON.
//!
//! ## Purpose
//!
//! Turns a [`BenchmarkReport`] into files a human or a spreadsheet can read.
//! Every writer comes in two forms: one over any `io::Write`, and one taking
//! an explicit file path.
//!
//! ## Key concepts
//!
//! * **CSV**: header `algorithm,n,time_seconds,comparisons,swaps`, one row per
//!   contender and size. Absent averages are empty cells. Names containing
//!   a comma, quote or line break are quoted with embedded quotes doubled.
//! * **Table**: contenders as rows, sizes as columns, seconds with three
//!   decimals, `-` for absent times.
//!
//! ## Non-goals
//!
//! * Writers never create directories; callers pass paths that can be opened.

// External dependencies
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// Internal dependencies
use crate::errors::LabError;
use crate::harness::BenchmarkReport;

/// Column names of the CSV export.
pub const CSV_HEADER: &str = "algorithm,n,time_seconds,comparisons,swaps";

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Quote a text field when it would otherwise break the row.
pub fn csv_field(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

// ============================================================================
// CSV
// ============================================================================

/// Write `report` as CSV to `out`.
pub fn write_csv<W: Write>(report: &BenchmarkReport, mut out: W) -> Result<(), LabError> {
    writeln!(out, "{CSV_HEADER}")?;
    for row in &report.rows {
        for point in &row.points {
            writeln!(
                out,
                "{},{},{},{},{}",
                csv_field(&row.algorithm),
                point.n,
                cell(point.time_seconds),
                cell(point.comparisons),
                cell(point.swaps)
            )?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write `report` as CSV to the file at `path`.
pub fn save_csv(report: &BenchmarkReport, path: impl AsRef<Path>) -> Result<(), LabError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|err| LabError::io(path, err))?;
    write_csv(report, BufWriter::new(file))
}

// ============================================================================
// Text Table
// ============================================================================

/// Render `report` as an aligned plain-text table of average times.
pub fn render_table(report: &BenchmarkReport) -> String {
    let name_width = report
        .rows
        .iter()
        .map(|row| row.algorithm.len())
        .chain(std::iter::once("algorithm".len()))
        .max()
        .unwrap_or(0);

    let mut table = String::new();
    let _ = write!(table, "{:<name_width$}", "algorithm");
    for n in &report.sizes {
        let _ = write!(table, "  {:>10}", format!("n={n}"));
    }
    table.push('\n');

    let rule_width = name_width + report.sizes.len() * 12;
    table.push_str(&"-".repeat(rule_width));
    table.push('\n');

    for row in &report.rows {
        let _ = write!(table, "{:<name_width$}", row.algorithm);
        for n in &report.sizes {
            let time = row
                .point(*n)
                .and_then(|point| point.time_seconds)
                .map(|seconds| format!("{seconds:.3}"))
                .unwrap_or_else(|| "-".to_string());
            let _ = write!(table, "  {time:>10}");
        }
        table.push('\n');
    }

    table
}

/// Write the text table to the file at `path`.
pub fn save_table(report: &BenchmarkReport, path: impl AsRef<Path>) -> Result<(), LabError> {
    let path = path.as_ref();
    std::fs::write(path, render_table(report)).map_err(|err| LabError::io(path, err))
}

// ============================================================================
// JSON
// ============================================================================

/// Serialize `report` as pretty-printed JSON.
pub fn to_json(report: &BenchmarkReport) -> Result<String, LabError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the JSON report to the file at `path`.
pub fn save_json(report: &BenchmarkReport, path: impl AsRef<Path>) -> Result<(), LabError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|err| LabError::io(path, err))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, report)?;
    out.flush().map_err(|err| LabError::io(path, err))
}
