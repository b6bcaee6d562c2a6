//! Batch goodness-of-fit comparison.
//!
//! Ties the stages together: zero-guard the named collection, pool the
//! truncated lists into one common distribution, then test every sample
//! against its own rescaled expectation. Single pass, no state machine;
//! inputs are read-only and the same batch run twice produces identical
//! results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chi_square::{GoodnessOfFit, chi_square_test};
use crate::config::{CompareConfig, StatsError};
use crate::expected::{common_list, expected_list};
use crate::truncate::zero_guard;

/// Per-name outcome of a batch comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The test ran; statistic and p-value are meaningful.
    Fit(GoodnessOfFit),
    /// Zero-guard truncation left nothing to test for this name.
    InsufficientData,
}

/// One named sample's result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Result of one batch run, with enough metadata to reproduce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub comparisons: Vec<Comparison>,
    /// Shared truncation point every list was cut to.
    pub cutoff: usize,
    /// Threshold the zero guard enforced.
    pub min_expected_count: u64,
}

/// Compare a named collection of dense word-length lists.
///
/// Applies zero-guard truncation, pools the truncated lists into a common
/// distribution, and runs one chi-square goodness-of-fit test per name.
/// Because every list is cut to the same point, an empty truncation hits
/// the whole batch: each name is then reported as [`Outcome::InsufficientData`]
/// rather than failing the call.
pub fn compare_distributions(
    samples: &BTreeMap<String, Vec<u64>>,
    cfg: &CompareConfig,
) -> Result<ComparisonReport, StatsError> {
    cfg.validate()?;
    if samples.is_empty() {
        return Err(StatsError::NoSamples);
    }

    let (truncated, cutoff) = zero_guard(samples, cfg.min_expected_count);
    if cutoff == 0 {
        warn!(
            names = samples.len(),
            threshold = cfg.min_expected_count,
            "zero_guard_empty"
        );
        let comparisons = samples
            .keys()
            .map(|name| Comparison {
                name: name.clone(),
                outcome: Outcome::InsufficientData,
            })
            .collect();
        return Ok(ComparisonReport {
            comparisons,
            cutoff,
            min_expected_count: cfg.min_expected_count,
        });
    }

    let lists: Vec<&[u64]> = truncated.values().map(Vec::as_slice).collect();
    let common = common_list(&lists);

    let mut comparisons = Vec::with_capacity(truncated.len());
    for (name, list) in &truncated {
        let expected = expected_list(list, &common)?;
        let gof = chi_square_test(list, &expected)?;
        comparisons.push(Comparison {
            name: name.clone(),
            outcome: Outcome::Fit(gof),
        });
    }

    Ok(ComparisonReport {
        comparisons,
        cutoff,
        min_expected_count: cfg.min_expected_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(entries: &[(&str, &[u64])]) -> BTreeMap<String, Vec<u64>> {
        entries
            .iter()
            .map(|(name, list)| (name.to_string(), list.to_vec()))
            .collect()
    }

    #[test]
    fn identical_samples_fit_perfectly() {
        let samples = collection(&[("a", &[20, 20, 20]), ("b", &[20, 20, 20])]);
        let report =
            compare_distributions(&samples, &CompareConfig::default()).expect("batch runs");

        assert_eq!(report.cutoff, 3);
        for cmp in &report.comparisons {
            match cmp.outcome {
                Outcome::Fit(gof) => {
                    assert_eq!(gof.statistic, 0.0);
                    assert_eq!(gof.p_value, 1.0);
                }
                Outcome::InsufficientData => panic!("unexpected insufficient data"),
            }
        }
    }

    #[test]
    fn thin_samples_are_flagged_not_crashed() {
        let samples = collection(&[("thin", &[5, 5, 5]), ("other", &[50, 50, 50])]);
        let report =
            compare_distributions(&samples, &CompareConfig::default()).expect("batch runs");

        assert_eq!(report.cutoff, 0);
        assert!(
            report
                .comparisons
                .iter()
                .all(|c| c.outcome == Outcome::InsufficientData)
        );
    }

    #[test]
    fn batch_is_idempotent() {
        let samples = collection(&[
            ("a", &[30, 20, 10]),
            ("b", &[10, 10, 10]),
            ("c", &[25, 18, 12]),
        ]);
        let cfg = CompareConfig::default();

        let first = compare_distributions(&samples, &cfg).expect("first run");
        let second = compare_distributions(&samples, &cfg).expect("second run");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_batch_rejected() {
        let samples = BTreeMap::new();
        assert!(matches!(
            compare_distributions(&samples, &CompareConfig::default()),
            Err(StatsError::NoSamples)
        ));
    }

    #[test]
    fn invalid_config_rejected() {
        let samples = collection(&[("a", &[20, 20])]);
        let cfg = CompareConfig {
            min_expected_count: 0,
            ..CompareConfig::default()
        };
        assert!(matches!(
            compare_distributions(&samples, &cfg),
            Err(StatsError::InvalidConfig(_))
        ));
    }
}
