//! Word-length distribution construction.
//!
//! A [`WordLengthDistribution`] is a histogram of token lengths for one
//! sample (a book, or all books of an author pooled together). It is built
//! once per comparison from the sample's token stream and converted to a
//! dense list for the downstream truncation and goodness-of-fit stages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::StatsError;

/// Histogram of token lengths, keyed by length in Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLengthDistribution {
    counts: BTreeMap<usize, u64>,
    total: u64,
}

impl WordLengthDistribution {
    /// Build a distribution by counting token lengths.
    ///
    /// An empty token sequence is rejected: a distribution with no
    /// observations has no meaningful total and would poison the
    /// rescaling division downstream.
    pub fn from_tokens<S>(tokens: &[S]) -> Result<Self, StatsError>
    where
        S: AsRef<str>,
    {
        Self::from_lengths(tokens.iter().map(|t| t.as_ref().chars().count()))
    }

    /// Build a distribution from pre-computed token lengths.
    pub fn from_lengths<I>(lengths: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut counts: BTreeMap<usize, u64> = BTreeMap::new();
        let mut total = 0u64;
        for length in lengths {
            *counts.entry(length).or_insert(0) += 1;
            total += 1;
        }
        if total == 0 {
            return Err(StatsError::EmptySample);
        }
        Ok(Self { counts, total })
    }

    /// Number of tokens observed with exactly this length.
    pub fn count(&self, length: usize) -> u64 {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    /// Total number of tokens observed.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Longest observed token length.
    pub fn max_length(&self) -> usize {
        self.counts.keys().next_back().copied().unwrap_or(0)
    }

    /// Distinct lengths observed, ascending.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.keys().copied()
    }

    /// Relative frequency of a length (count / total).
    pub fn frequency(&self, length: usize) -> f64 {
        self.count(length) as f64 / self.total as f64
    }

    /// Densify into a list ordered from length 1 up to the maximum observed
    /// length, with 0 for lengths that never occurred. Index `i` holds the
    /// count for length `i + 1`.
    pub fn to_list(&self) -> Vec<u64> {
        (1..=self.max_length()).map(|len| self.count(len)).collect()
    }
}
