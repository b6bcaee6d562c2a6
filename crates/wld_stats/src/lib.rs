//! # Word-length distribution statistics
//!
//! Statistical core for comparing word-length distributions (WLDs) across
//! texts and authors with a chi-square goodness-of-fit test. The pipeline
//! is deliberately small and fully deterministic:
//!
//! 1. [`distribution`]: count token lengths into a histogram and densify
//!    it into a list indexed from length 1.
//! 2. [`truncate`]: cut every compared list at a shared point so no cell
//!    falls below the configured minimum count (chi-square validity).
//! 3. [`expected`]: pool the truncated lists into a common distribution
//!    and rescale it to each sample's total, drift-corrected so totals
//!    match exactly.
//! 4. [`chi_square`] / [`compare`]: run the goodness-of-fit test per
//!    sample and collect per-name outcomes.
//!
//! Everything operates on values: no interior mutability, no caches, no
//! I/O. Comparisons over the same inputs are idempotent and safe to run
//! concurrently.

pub mod chi_square;
pub mod compare;
pub mod config;
pub mod distribution;
pub mod expected;
mod gamma;
pub mod truncate;

pub use chi_square::{GoodnessOfFit, chi_square_test};
pub use compare::{Comparison, ComparisonReport, Outcome, compare_distributions};
pub use config::{CompareConfig, StatsError};
pub use distribution::WordLengthDistribution;
pub use expected::{common_list, expected_list};
pub use truncate::{zero_guard, zero_guard_cutoff};
