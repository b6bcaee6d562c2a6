//! Configuration and error types for the comparison pipeline.
//!
//! This module defines the public configuration surface for the statistical
//! layer. It is intentionally free of any I/O or environment-dependent
//! behavior so that a comparison is a pure function of `(samples, config)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for a batch goodness-of-fit comparison.
///
/// `CompareConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs or written out alongside a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareConfig {
    /// Configuration schema version.
    pub version: u32,
    /// Smallest per-cell count a truncated list may contain.
    ///
    /// Chi-square is unreliable when expected cell counts get small; every
    /// compared list is cut at the first position where any sample drops
    /// below this value. The classic rule of thumb is 10.
    #[serde(default = "CompareConfig::default_min_expected_count")]
    pub min_expected_count: u64,
}

impl CompareConfig {
    pub(crate) fn default_min_expected_count() -> u64 {
        10
    }

    /// Validate the configuration for a single batch.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.version == 0 {
            return Err(StatsError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.min_expected_count == 0 {
            return Err(StatsError::InvalidConfig(
                "min_expected_count must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            version: 1,
            min_expected_count: Self::default_min_expected_count(),
        }
    }
}

/// Errors returned by the statistical pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("cannot build a distribution from an empty token sequence")]
    EmptySample,

    #[error("comparison requires at least one sample")]
    NoSamples,

    #[error("observed and expected lists differ in length ({observed} vs {expected})")]
    LengthMismatch { observed: usize, expected: usize },

    #[error("observed and expected totals differ ({observed} vs {expected})")]
    TotalMismatch { observed: u64, expected: u64 },

    #[error("expected count at position {index} is zero")]
    ZeroExpectedCell { index: usize },

    #[error("rounding correction drove the largest expected cell negative")]
    DegenerateExpected,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },
}
