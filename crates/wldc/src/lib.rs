//! wldc: word-length distribution comparison.
//!
//! Command-line front end over the `wld_corpus` / `wld_stats` / `wld_plot`
//! crates: loads a corpus of `<title>-<author>.txt` files, compares the
//! word-length distributions of books or authors with a chi-square
//! goodness-of-fit test, and optionally renders the distribution curves
//! as an SVG line chart.

pub mod cli;
pub mod config;
pub mod pipeline;
pub mod report;

pub use config::{AppConfig, ConfigError};
pub use pipeline::{CompareRun, PipelineError, run_compare};
