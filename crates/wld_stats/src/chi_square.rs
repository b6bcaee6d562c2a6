//! Chi-square goodness-of-fit test.

use serde::{Deserialize, Serialize};

use crate::config::StatsError;
use crate::gamma::gamma_q;

/// Result of a single goodness-of-fit test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoodnessOfFit {
    /// The chi-square statistic `Σ (observed - expected)² / expected`.
    pub statistic: f64,
    /// Upper-tail probability of the statistic under `cells - 1` degrees
    /// of freedom.
    pub p_value: f64,
}

/// Run a chi-square goodness-of-fit test of `observed` against `expected`.
///
/// Both lists must have the same length and the same total; the estimator
/// in [`crate::expected`] produces exactly such pairs. Expected cells must
/// be nonzero (guaranteed by zero-guard truncation upstream).
///
/// Degrees of freedom are `cells - 1`. A single-cell pair is degenerate:
/// the equal-totals precondition forces observed == expected there, so the
/// statistic is 0 and the test reports p = 1.
pub fn chi_square_test(observed: &[u64], expected: &[u64]) -> Result<GoodnessOfFit, StatsError> {
    if observed.len() != expected.len() {
        return Err(StatsError::LengthMismatch {
            observed: observed.len(),
            expected: expected.len(),
        });
    }
    if observed.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let observed_total: u64 = observed.iter().sum();
    let expected_total: u64 = expected.iter().sum();
    if observed_total != expected_total {
        return Err(StatsError::TotalMismatch {
            observed: observed_total,
            expected: expected_total,
        });
    }
    if let Some(index) = expected.iter().position(|&e| e == 0) {
        return Err(StatsError::ZeroExpectedCell { index });
    }

    let statistic: f64 = observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| {
            let diff = o as f64 - e as f64;
            diff * diff / e as f64
        })
        .sum();

    let df = observed.len() - 1;
    let p_value = if df == 0 {
        1.0
    } else {
        gamma_q(df as f64 / 2.0, statistic / 2.0)
    };

    Ok(GoodnessOfFit { statistic, p_value })
}
