//! Runtime plot with complexity reference curves.
//!
//! ## Purpose
//!
//! Draws the average time of every contender against input size as an SVG
//! line chart, together with dashed O(n), O(n log n) and O(n²) guides.
//!
//! ## Key concepts
//!
//! * **Anchoring**: the guides are scaled so that the O(n log n) curve passes
//!   through the reference time at the largest size. The reference time is the
//!   fastest average observed there, or `1.0` when none is usable.
//! * **Gaps**: points without a time are skipped, which splits the polyline.
//!
//! ## Invariants
//!
//! * Every reference curve has exactly one value per benchmark size.

// External dependencies
use std::fmt::Write as _;
use std::path::Path;

// Internal dependencies
use crate::errors::LabError;
use crate::harness::BenchmarkReport;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN: f64 = 60.0;

const PALETTE: [&str; 6] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b"];

// ============================================================================
// Reference Curves
// ============================================================================

/// Asymptotic growth classes drawn as guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    /// O(n)
    Linear,
    /// O(n log₂ n)
    Linearithmic,
    /// O(n²)
    Quadratic,
}

impl Complexity {
    /// Every guide, in drawing order.
    pub const ALL: [Complexity; 3] = [Self::Linear, Self::Linearithmic, Self::Quadratic];

    /// Unscaled growth at size `n`.
    pub fn growth(&self, n: usize) -> f64 {
        let n = n as f64;
        match self {
            Self::Linear => n,
            Self::Linearithmic => {
                if n > 1.0 {
                    n * n.log2()
                } else {
                    0.0
                }
            }
            Self::Quadratic => n * n,
        }
    }

    /// Legend label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n^2)",
        }
    }
}

/// One scaled guide.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurve {
    /// Growth class.
    pub complexity: Complexity,

    /// One value per benchmark size.
    pub values: Vec<f64>,
}

/// Reference time used to anchor the guides.
pub fn reference_time(report: &BenchmarkReport) -> f64 {
    report
        .largest_size()
        .and_then(|n| report.fastest_time_at(n))
        .filter(|time| time.is_finite() && *time > 0.0)
        .unwrap_or(1.0)
}

/// Guides for every benchmark size, anchored on the O(n log n) curve.
pub fn reference_curves(report: &BenchmarkReport) -> Vec<ReferenceCurve> {
    let anchor_growth = report
        .largest_size()
        .map(|n| Complexity::Linearithmic.growth(n))
        .unwrap_or(0.0);
    let scale = if anchor_growth > 0.0 {
        reference_time(report) / anchor_growth
    } else {
        0.0
    };

    Complexity::ALL
        .iter()
        .map(|&complexity| ReferenceCurve {
            complexity,
            values: report
                .sizes
                .iter()
                .map(|&n| complexity.growth(n) * scale)
                .collect(),
        })
        .collect()
}

// ============================================================================
// SVG
// ============================================================================

/// Maps data coordinates into the plotting area.
struct Axes {
    max_n: f64,
    max_time: f64,
}

impl Axes {
    fn x(&self, n: usize) -> f64 {
        MARGIN + (n as f64 / self.max_n) * (WIDTH - 2.0 * MARGIN)
    }

    fn y(&self, time: f64) -> f64 {
        HEIGHT - MARGIN - (time / self.max_time) * (HEIGHT - 2.0 * MARGIN)
    }
}

/// Render `report` as a standalone SVG document.
pub fn render_svg(report: &BenchmarkReport) -> String {
    let observed_max = report
        .rows
        .iter()
        .flat_map(|row| row.points.iter().filter_map(|point| point.time_seconds))
        .fold(0.0_f64, f64::max);

    // Guides are clipped to the observed range.
    let max_time = if observed_max > 0.0 { observed_max * 1.1 } else { 1.0 };
    let axes = Axes {
        max_n: report.largest_size().unwrap_or(1).max(1) as f64,
        max_time,
    };

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="30" text-anchor="middle" font-family="sans-serif" font-size="18">Sorting Algorithm Runtime Comparison</text>"#,
        WIDTH / 2.0
    );

    // Axes and labels.
    let _ = writeln!(
        svg,
        r#"<line x1="{MARGIN}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
        HEIGHT - MARGIN,
        WIDTH - MARGIN,
        HEIGHT - MARGIN
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{MARGIN}" y1="{MARGIN}" x2="{MARGIN}" y2="{}" stroke="black"/>"#,
        HEIGHT - MARGIN
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="12">Input size (n)</text>"#,
        WIDTH / 2.0,
        HEIGHT - 15.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="15" y="{}" text-anchor="middle" font-family="sans-serif" font-size="12" transform="rotate(-90 15 {})">Time (seconds)</text>"#,
        HEIGHT / 2.0,
        HEIGHT / 2.0
    );
    for &n in &report.sizes {
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="10">{n}</text>"#,
            axes.x(n),
            HEIGHT - MARGIN + 15.0
        );
    }

    // Reference guides.
    for curve in reference_curves(report) {
        let points: Vec<String> = report
            .sizes
            .iter()
            .zip(&curve.values)
            .map(|(&n, &value)| format!("{:.1},{:.1}", axes.x(n), axes.y(value.min(max_time))))
            .collect();
        let _ = writeln!(
            svg,
            r#"<polyline points="{}" fill="none" stroke="gray" stroke-dasharray="6,4"><title>{}</title></polyline>"#,
            points.join(" "),
            curve.complexity.label()
        );
    }

    // Observed series, split at missing points.
    for (index, row) in report.rows.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        let mut segment: Vec<String> = Vec::new();
        let mut segments: Vec<Vec<String>> = Vec::new();

        for point in &row.points {
            match point.time_seconds {
                Some(time) => segment.push(format!("{:.1},{:.1}", axes.x(point.n), axes.y(time))),
                None if !segment.is_empty() => segments.push(std::mem::take(&mut segment)),
                None => {}
            }
        }
        if !segment.is_empty() {
            segments.push(segment);
        }

        for segment in &segments {
            let _ = writeln!(
                svg,
                r#"<polyline points="{}" fill="none" stroke="{color}" stroke-width="2"/>"#,
                segment.join(" ")
            );
        }

        let legend_y = MARGIN + 18.0 * index as f64;
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{legend_y}" font-family="sans-serif" font-size="12" fill="{color}">{}</text>"#,
            WIDTH - MARGIN - 100.0,
            xml_escape(&row.algorithm)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Write the SVG plot to the file at `path`.
pub fn save_svg(report: &BenchmarkReport, path: impl AsRef<Path>) -> Result<(), LabError> {
    let path = path.as_ref();
    std::fs::write(path, render_svg(report)).map_err(|err| LabError::io(path, err))
}
