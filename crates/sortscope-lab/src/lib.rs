//! # sortscope-lab - Benchmarks and animations for sortscope
//!
//! Everything around the instrumented sorts that touches the outside world:
//! reproducible inputs, a benchmark harness, CSV/table/JSON/SVG export,
//! terminal and text animation sinks, TOML configuration and logging.
//!
//! ## Quick Start
//!
//! ```rust
//! use sortscope_lab::prelude::*;
//!
//! let report = Benchmark::builder()
//!     .sizes([16, 32])
//!     .trials(2)
//!     .seed(7)
//!     .algorithms([Algorithm::Insertion, Algorithm::Merge])
//!     .build()?
//!     .run();
//!
//! assert_eq!(report.rows.len(), 2);
//! assert_eq!(report.row("merge").unwrap().points.len(), 2);
//!
//! let mut csv = Vec::new();
//! write_csv(&report, &mut csv)?;
//! assert!(String::from_utf8(csv).unwrap().starts_with(CSV_HEADER));
//! # Result::<(), LabError>::Ok(())
//! ```
//!
//! ## Layout
//!
//! ```text
//! config   → LabConfig, Validator
//! input    → random_inputs, shuffled_range
//! harness  → Benchmark, BenchmarkReport
//! export   → CSV, text table, JSON
//! plot     → reference curves, SVG
//! render   → TerminalSink, TextSink
//! ```

// Configuration and validation.
pub mod config;

// Error types.
pub mod errors;

// Report export.
pub mod export;

// Benchmark harness.
pub mod harness;

// Reproducible inputs.
pub mod input;

// Runtime plot.
pub mod plot;

// Animation sinks.
pub mod render;

// Logging setup.
pub mod telemetry;

// Standard sortscope-lab prelude.
pub mod prelude {
    pub use crate::config::LabConfig;
    pub use crate::errors::LabError;
    pub use crate::export::{render_table, save_csv, save_json, save_table, to_json, write_csv, CSV_HEADER};
    pub use crate::harness::{sort_fn, AlgorithmResults, Benchmark, BenchmarkReport, SizePoint, SortFn};
    pub use crate::input::{random_inputs, shuffled_range};
    pub use crate::plot::{reference_curves, reference_time, render_svg, save_svg, Complexity};
    pub use crate::render::{TerminalSink, TextSink};
    pub use sortscope::prelude::*;
}
