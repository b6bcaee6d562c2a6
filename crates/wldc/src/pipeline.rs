//! Ties corpus, statistics, and plotting together.
//!
//! A comparison run resolves the requested subjects against the corpus,
//! builds one word-length distribution per name, and hands the dense
//! lists to the statistical batch. Names whose token streams are empty
//! never reach the batch: they are reported as insufficient data while
//! the rest of the names still produce results.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::warn;

use wld_corpus::{Corpus, CorpusError, Subject};
use wld_plot::PlotError;
use wld_stats::{
    CompareConfig, Comparison, ComparisonReport, Outcome, StatsError, WordLengthDistribution,
    compare_distributions,
};

/// Errors that can occur while running a comparison end to end.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("corpus failure: {0}")]
    Corpus(#[from] CorpusError),

    #[error("statistics failure: {0}")]
    Stats(#[from] StatsError),

    #[error("plot failure: {0}")]
    Plot(#[from] PlotError),
}

/// Everything one comparison produced: the per-name outcomes plus the
/// distributions behind them, kept around for plotting.
#[derive(Debug, Clone)]
pub struct CompareRun {
    pub subject: Subject,
    pub report: ComparisonReport,
    pub distributions: BTreeMap<String, WordLengthDistribution>,
}

/// Compare the named subjects (all subjects of the kind when `names` is
/// empty) against their pooled expectation.
pub fn run_compare(
    corpus: &Corpus,
    subject: Subject,
    names: &[String],
    cfg: &CompareConfig,
) -> Result<CompareRun, PipelineError> {
    let names: Vec<String> = if names.is_empty() {
        subject.default_names(corpus)
    } else {
        names.to_vec()
    };

    let mut distributions = BTreeMap::new();
    let mut empty_names: Vec<String> = Vec::new();
    for name in &names {
        let streams = subject.resolve(corpus, name)?;
        let lengths = streams
            .iter()
            .flat_map(|tokens| tokens.iter().map(|t| t.text.chars().count()));
        match WordLengthDistribution::from_lengths(lengths) {
            Ok(wld) => {
                distributions.insert(name.clone(), wld);
            }
            Err(StatsError::EmptySample) => {
                warn!(%subject, name = %name, "empty_sample");
                empty_names.push(name.clone());
            }
            Err(err) => return Err(err.into()),
        }
    }

    let samples: BTreeMap<String, Vec<u64>> = distributions
        .iter()
        .map(|(name, wld)| (name.clone(), wld.to_list()))
        .collect();

    let mut report = if samples.is_empty() {
        ComparisonReport {
            comparisons: Vec::new(),
            cutoff: 0,
            min_expected_count: cfg.min_expected_count,
        }
    } else {
        compare_distributions(&samples, cfg)?
    };

    // Zero-token names join the report as insufficient-data outcomes.
    for name in empty_names {
        report.comparisons.push(Comparison {
            name,
            outcome: Outcome::InsufficientData,
        });
    }
    report.comparisons.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(CompareRun {
        subject,
        report,
        distributions,
    })
}
