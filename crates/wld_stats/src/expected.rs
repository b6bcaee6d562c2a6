//! Common (pooled) distributions and per-sample expected lists.
//!
//! The null hypothesis for every goodness-of-fit test in a batch is the
//! same: "this sample was drawn from the distribution all samples share".
//! That shared distribution is the index-wise sum of the zero-guarded
//! lists; each sample then gets the pooled list rescaled to its own total
//! so observed and expected totals match exactly.

use crate::config::StatsError;

/// Sum a set of dense word-length lists index-wise into a pooled list.
///
/// Lists are expected to share a length after zero-guard truncation; if
/// they differ, alignment is kept well-defined by summing only up to the
/// shortest list's length.
pub fn common_list<L>(lists: &[L]) -> Vec<u64>
where
    L: AsRef<[u64]>,
{
    let shortest = lists.iter().map(|l| l.as_ref().len()).min().unwrap_or(0);

    (0..shortest)
        .map(|i| lists.iter().map(|l| l.as_ref()[i]).sum())
        .collect()
}

/// Rescale the pooled list to one sample's total observation count.
///
/// The pooled list is truncated to the sample's length, scaled by
/// `sum(sample) / sum(common)`, and rounded per cell. Rounding drift is
/// absorbed by the first cell holding the largest rounded count, so the
/// guarantee `sum(expected) == sum(sample)` holds exactly; without it the
/// chi-square statistic is not well-defined.
///
/// Assumes zero-guarded input: every cell of `sample` is positive. A
/// correction that would drive the largest cell negative only arises for
/// degenerate inputs that bypassed the guard, and is reported as an error.
pub fn expected_list(sample: &[u64], common: &[u64]) -> Result<Vec<u64>, StatsError> {
    let common = &common[..common.len().min(sample.len())];

    let sample_total: u64 = sample.iter().sum();
    let common_total: u64 = common.iter().sum();
    if sample_total == 0 {
        return Err(StatsError::EmptySample);
    }
    if common_total == 0 {
        return Err(StatsError::ZeroExpectedCell { index: 0 });
    }

    let multiplier = sample_total as f64 / common_total as f64;
    let mut expected: Vec<i64> = common
        .iter()
        .map(|&count| (count as f64 * multiplier).round() as i64)
        .collect();

    // First index holding the largest rounded count takes the drift.
    let drift = sample_total as i64 - expected.iter().sum::<i64>();
    let mut peak = 0;
    for (i, &cell) in expected.iter().enumerate() {
        if cell > expected[peak] {
            peak = i;
        }
    }
    expected[peak] += drift;

    if expected[peak] < 0 {
        return Err(StatsError::DegenerateExpected);
    }

    Ok(expected.into_iter().map(|c| c as u64).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_list_sums_index_wise() {
        let lists = [vec![30, 20, 10], vec![10, 10, 10]];
        assert_eq!(common_list(&lists), vec![40, 30, 20]);
    }

    #[test]
    fn common_list_aligns_to_shortest() {
        let lists = [vec![5, 5], vec![1, 2, 3, 4]];
        assert_eq!(common_list(&lists), vec![6, 7]);
    }

    #[test]
    fn expected_matches_sample_total_without_drift() {
        // common = [40, 30, 20] (total 90); sample total 30, multiplier 1/3.
        let expected = expected_list(&[10, 10, 10], &[40, 30, 20]).expect("valid input");
        assert_eq!(expected, vec![13, 10, 7]);
        assert_eq!(expected.iter().sum::<u64>(), 30);
    }

    #[test]
    fn rounding_drift_lands_on_first_largest_cell() {
        // multiplier 25/30: every cell rounds to 8, total 24, drift +1.
        let expected = expected_list(&[10, 10, 5], &[10, 10, 10]).expect("valid input");
        assert_eq!(expected.iter().sum::<u64>(), 25);
        assert_eq!(expected, vec![9, 8, 8]);
    }

    #[test]
    fn expected_total_equals_sample_total_exactly() {
        let common = [173, 91, 57, 33, 12];
        for sample in [
            vec![40, 30, 25, 14, 11],
            vec![99, 51, 20, 17, 10],
            vec![13, 12, 11, 10, 10],
        ] {
            let expected = expected_list(&sample, &common).expect("valid input");
            assert_eq!(
                expected.iter().sum::<u64>(),
                sample.iter().sum::<u64>(),
                "totals must match for sample {sample:?}"
            );
        }
    }

    #[test]
    fn common_longer_than_sample_is_cut() {
        let expected = expected_list(&[10, 10], &[20, 20, 50]).expect("valid input");
        assert_eq!(expected.len(), 2);
        assert_eq!(expected.iter().sum::<u64>(), 20);
    }

    #[test]
    fn zero_sample_total_rejected() {
        assert!(matches!(
            expected_list(&[], &[10, 10]),
            Err(StatsError::EmptySample)
        ));
    }
}
