//! Tests for report export and plotting.
//!
//! ## Test Organization
//!
//! 1. **CSV** - Header, rows, empty cells and quoted names
//! 2. **Table** - Layout and absent values
//! 3. **JSON** - Round trip through serde_json
//! 4. **Plot** - Reference curves and SVG output

use approx::assert_relative_eq;
use sortscope_lab::export::csv_field;
use sortscope_lab::prelude::*;
use tempfile::tempdir;

/// Small hand-built report with one missing point.
fn sample_report() -> BenchmarkReport {
    BenchmarkReport {
        sizes: vec![100, 200],
        rows: vec![
            AlgorithmResults {
                algorithm: "merge".into(),
                points: vec![
                    SizePoint {
                        n: 100,
                        trials: 3,
                        time_seconds: Some(0.25),
                        comparisons: Some(540.0),
                        swaps: Some(672.0),
                    },
                    SizePoint {
                        n: 200,
                        trials: 3,
                        time_seconds: Some(0.5),
                        comparisons: Some(1280.5),
                        swaps: Some(1544.0),
                    },
                ],
            },
            AlgorithmResults {
                algorithm: "bubble".into(),
                points: vec![
                    SizePoint {
                        n: 100,
                        trials: 3,
                        time_seconds: Some(1.5),
                        comparisons: Some(4950.0),
                        swaps: Some(2500.0),
                    },
                    SizePoint {
                        n: 200,
                        trials: 0,
                        time_seconds: None,
                        comparisons: None,
                        swaps: None,
                    },
                ],
            },
        ],
    }
}

// ============================================================================
// CSV Tests
// ============================================================================

/// Test the exact CSV produced for the sample report.
#[test]
fn test_csv_content() {
    let mut out = Vec::new();
    write_csv(&sample_report(), &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();

    assert_eq!(
        csv,
        "algorithm,n,time_seconds,comparisons,swaps\n\
         merge,100,0.25,540,672\n\
         merge,200,0.5,1280.5,1544\n\
         bubble,100,1.5,4950,2500\n\
         bubble,200,,,\n"
    );
}

/// Test that names with separators or quotes stay in one field.
#[test]
fn test_csv_quotes_names() {
    let mut report = sample_report();
    report.rows[0].algorithm = "merge, top-down".into();
    report.rows[1].algorithm = "say \"hi\"".into();

    let mut out = Vec::new();
    write_csv(&report, &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[1], "\"merge, top-down\",100,0.25,540,672");
    assert_eq!(lines[3], "\"say \"\"hi\"\"\",100,1.5,4950,2500");
    assert_eq!(csv_field("plain"), "plain");
    assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
}

/// Test that a contender registered with a comma exports five columns.
#[test]
fn test_csv_contender_with_comma() {
    let report = Benchmark::builder()
        .sizes([4])
        .trials(1)
        .contender("merge, top-down", sort_fn(Algorithm::Merge))
        .build()
        .unwrap()
        .run();

    let mut out = Vec::new();
    write_csv(&report, &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();
    let row = csv.lines().nth(1).unwrap();

    assert!(row.starts_with("\"merge, top-down\",4,"));
    assert_eq!(row.trim_start_matches("\"merge, top-down\"").matches(',').count(), 4);
}

/// Test writing the CSV to a file.
#[test]
fn test_save_csv_to_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.csv");

    save_csv(&sample_report(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.starts_with(CSV_HEADER));
    assert_eq!(content.lines().count(), 5);
}

/// Test that writing into a missing directory reports the path.
#[test]
fn test_save_csv_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("results.csv");

    let err = save_csv(&sample_report(), &path).unwrap_err();
    assert!(matches!(err, LabError::Io { .. }));
    assert!(err.to_string().contains("results.csv"));
}

// ============================================================================
// Table Tests
// ============================================================================

/// Test the table header, rows and placeholder.
#[test]
fn test_render_table() {
    let table = render_table(&sample_report());
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("algorithm"));
    assert!(lines[0].contains("n=100"));
    assert!(lines[0].contains("n=200"));
    assert!(lines[1].chars().all(|c| c == '-'));
    assert!(lines[2].starts_with("merge"));
    assert!(lines[2].contains("0.250"));
    assert!(lines[2].contains("0.500"));
    assert!(lines[3].starts_with("bubble"));
    assert!(lines[3].contains("1.500"));
    assert!(lines[3].trim_end().ends_with('-'));
}

/// Test saving the table.
#[test]
fn test_save_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.txt");

    save_table(&sample_report(), &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), render_table(&sample_report()));
}

// ============================================================================
// JSON Tests
// ============================================================================

/// Test that the JSON report parses back to the same report.
#[test]
fn test_json_round_trip() {
    let report = sample_report();
    let json = to_json(&report).unwrap();
    let parsed: BenchmarkReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, report);
    assert!(json.contains("\"time_seconds\": null"));
}

/// Test saving the JSON report.
#[test]
fn test_save_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");

    save_json(&sample_report(), &path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["sizes"], serde_json::json!([100, 200]));
    assert_eq!(value["rows"][0]["algorithm"], "merge");
}

// ============================================================================
// Plot Tests
// ============================================================================

/// Test that the guides are anchored on the fastest time at the largest size.
#[test]
fn test_reference_curves_anchor() {
    let report = sample_report();
    assert_relative_eq!(reference_time(&report), 0.5);

    let curves = reference_curves(&report);
    assert_eq!(curves.len(), 3);
    assert!(curves.iter().all(|curve| curve.values.len() == report.sizes.len()));

    let linearithmic = curves
        .iter()
        .find(|curve| curve.complexity == Complexity::Linearithmic)
        .unwrap();
    assert_relative_eq!(linearithmic.values[1], 0.5, epsilon = 1e-12);

    let scale = 0.5 / (200.0 * 200f64.log2());
    let linear = &curves[0];
    assert_relative_eq!(linear.values[0], 100.0 * scale, epsilon = 1e-12);
    let quadratic = &curves[2];
    assert_relative_eq!(quadratic.values[1], 40_000.0 * scale, epsilon = 1e-12);
}

/// Test the fallback reference time when nothing was measured.
#[test]
fn test_reference_time_fallback() {
    let mut report = sample_report();
    for row in &mut report.rows {
        for point in &mut row.points {
            point.time_seconds = None;
        }
    }
    assert_relative_eq!(reference_time(&report), 1.0);

    let zero = BenchmarkReport {
        sizes: vec![10],
        rows: vec![AlgorithmResults {
            algorithm: "instant".into(),
            points: vec![SizePoint {
                n: 10,
                trials: 1,
                time_seconds: Some(0.0),
                comparisons: Some(0.0),
                swaps: Some(0.0),
            }],
        }],
    };
    assert_relative_eq!(reference_time(&zero), 1.0);
}

/// Test the SVG document structure.
#[test]
fn test_render_svg() {
    let svg = render_svg(&sample_report());

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("merge"));
    assert!(svg.contains("bubble"));
    assert!(svg.contains("O(n log n)"));
    assert_eq!(svg.matches("stroke-dasharray").count(), 3);
    // merge has one segment, bubble one single-point segment.
    assert_eq!(svg.matches("stroke-width=\"2\"").count(), 2);
}

/// Test that legend names are escaped as XML text.
#[test]
fn test_render_svg_escapes_names() {
    let mut report = sample_report();
    report.rows[0].algorithm = "a<b & c>".into();

    let svg = render_svg(&report);
    assert!(svg.contains("a&lt;b &amp; c&gt;"));
    assert!(!svg.contains("a<b"));
}

/// Test saving the SVG.
#[test]
fn test_save_svg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plot.svg");

    save_svg(&sample_report(), &path).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("</svg>"));
}
