//! Error types for the lab.
//!
//! ## Purpose
//!
//! [`LabError`] covers everything that can go wrong around the sorts: bad
//! configuration, filesystem access, config parsing, report serialization and
//! terminal rendering. The sorts themselves never fail.
//!
//! ## Design notes
//!
//! * **Source chaining**: I/O, TOML and JSON failures keep their underlying
//!   error as `source()`.
//! * **Context**: I/O errors carry the path they were about.

// External dependencies
use std::io;
use std::path::PathBuf;
use thiserror::Error;

// Export dependencies from sortscope crate
use sortscope::prelude::SortError;

/// Error type for lab operations.
#[derive(Debug, Error)]
pub enum LabError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An algorithm name could not be resolved.
    #[error(transparent)]
    Algorithm(#[from] SortError),

    /// Reading or writing a file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Writing to an in-memory or stream target failed.
    #[error("write failed: {0}")]
    Write(#[from] io::Error),

    /// The configuration file is not valid TOML for [`LabConfig`](crate::config::LabConfig).
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// The report could not be serialized.
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The terminal backend failed while drawing a frame.
    #[error("render failed: {0}")]
    Render(String),
}

impl LabError {
    /// Attach `path` to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
