//! Lab configuration.
//!
//! ## Purpose
//!
//! [`LabConfig`] gathers every knob of a benchmark or animation run. It can be
//! loaded from a TOML file, built in code, or overridden field by field from
//! the command line.
//!
//! ## Design notes
//!
//! * **Partial files**: every field has a default, so a TOML file only needs
//!   the keys it changes.
//! * **Fail-fast validation**: [`Validator`] checks one rule at a time and
//!   reports the first violation.
//!
//! ## Invariants
//!
//! * A validated config has at least one size, all sizes positive, at least one
//!   trial, `min_value <= max_value`, at least one algorithm and `fps >= 1`.

// External dependencies
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Export dependencies from sortscope crate
use sortscope::prelude::{Algorithm, DEFAULT_FPS};

// Internal dependencies
use crate::errors::LabError;

/// Default benchmark sizes.
pub const DEFAULT_SIZES: [usize; 5] = [100, 200, 500, 1000, 2000];

/// Default number of trials per size.
pub const DEFAULT_TRIALS: usize = 3;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Default inclusive value range for random inputs.
pub const DEFAULT_VALUE_RANGE: (i64, i64) = (-10_000, 10_000);

/// Default length of the animated input.
pub const DEFAULT_ANIMATION_LEN: usize = 30;

// ============================================================================
// Configuration
// ============================================================================

/// Settings for benchmark and animation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabConfig {
    /// Input sizes to benchmark, in report order.
    pub sizes: Vec<usize>,

    /// Trials averaged per algorithm and size.
    pub trials: usize,

    /// Seed for every random input.
    pub seed: u64,

    /// Smallest random value (inclusive).
    pub min_value: i64,

    /// Largest random value (inclusive).
    pub max_value: i64,

    /// Algorithms to benchmark.
    pub algorithms: Vec<Algorithm>,

    /// Directory receiving reports and plots.
    pub output_dir: PathBuf,

    /// Animation frame rate.
    pub fps: u32,

    /// Number of elements in an animation.
    pub animation_len: usize,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
            min_value: DEFAULT_VALUE_RANGE.0,
            max_value: DEFAULT_VALUE_RANGE.1,
            algorithms: Algorithm::ALL.to_vec(),
            output_dir: PathBuf::from("output"),
            fps: DEFAULT_FPS,
            animation_len: DEFAULT_ANIMATION_LEN,
        }
    }
}

impl LabConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(source: &str) -> Result<Self, LabError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the TOML file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LabError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| LabError::io(path, err))?;
        Self::from_toml_str(&source)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, LabError> {
        toml::to_string_pretty(self).map_err(|err| LabError::InvalidConfig(err.to_string()))
    }

    /// Check every rule, failing on the first violation.
    pub fn validate(&self) -> Result<(), LabError> {
        Validator::validate_sizes(&self.sizes)?;
        Validator::validate_trials(self.trials)?;
        Validator::validate_range(self.min_value, self.max_value)?;
        Validator::validate_algorithms(&self.algorithms)?;
        Validator::validate_fps(self.fps)?;
        Validator::validate_animation_len(self.animation_len)?;
        Ok(())
    }

    /// Inclusive value range as a tuple.
    pub fn value_range(&self) -> (i64, i64) {
        (self.min_value, self.max_value)
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Validation rules shared by [`LabConfig`] and the benchmark builder.
pub struct Validator;

impl Validator {
    /// Sizes must be non-empty and positive.
    pub fn validate_sizes(sizes: &[usize]) -> Result<(), LabError> {
        if sizes.is_empty() {
            return Err(LabError::InvalidConfig("at least one size is required".into()));
        }
        if sizes.contains(&0) {
            return Err(LabError::InvalidConfig("sizes must be positive".into()));
        }
        Ok(())
    }

    /// At least one trial per size.
    pub fn validate_trials(trials: usize) -> Result<(), LabError> {
        if trials == 0 {
            return Err(LabError::InvalidConfig("trials must be at least 1".into()));
        }
        Ok(())
    }

    /// The value range must not be inverted.
    pub fn validate_range(min: i64, max: i64) -> Result<(), LabError> {
        if min > max {
            return Err(LabError::InvalidConfig(format!(
                "min_value {min} is greater than max_value {max}"
            )));
        }
        Ok(())
    }

    /// At least one algorithm, none repeated.
    pub fn validate_algorithms(algorithms: &[Algorithm]) -> Result<(), LabError> {
        if algorithms.is_empty() {
            return Err(LabError::InvalidConfig("at least one algorithm is required".into()));
        }
        for (i, algorithm) in algorithms.iter().enumerate() {
            if algorithms[..i].contains(algorithm) {
                return Err(LabError::InvalidConfig(format!(
                    "algorithm `{algorithm}` is listed twice"
                )));
            }
        }
        Ok(())
    }

    /// At least one frame per second.
    pub fn validate_fps(fps: u32) -> Result<(), LabError> {
        if fps == 0 {
            return Err(LabError::InvalidConfig("fps must be at least 1".into()));
        }
        Ok(())
    }

    /// Animations need something to sort.
    pub fn validate_animation_len(len: usize) -> Result<(), LabError> {
        if len == 0 {
            return Err(LabError::InvalidConfig("animation_len must be at least 1".into()));
        }
        Ok(())
    }
}
