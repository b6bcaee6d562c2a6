//! Visualization sink for word-length distributions.
//!
//! The statistical pipeline never renders anything itself; it hands named
//! frequency curves to a [`Visualizer`]. This crate defines that seam and
//! ships one implementation, [`SvgPlotter`], which writes the curves as a
//! self-contained SVG line chart (one curve per name, legend, frequency
//! on the y-axis, word-length on the x-axis).

use serde::Serialize;
use thiserror::Error;

use wld_stats::WordLengthDistribution;

mod svg;

pub use svg::SvgPlotter;

/// A named curve of (word-length, relative frequency) points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencySeries {
    pub name: String,
    pub points: Vec<(usize, f64)>,
}

impl FrequencySeries {
    /// Extract the frequency curve of one distribution, covering every
    /// length from 1 to the maximum observed (0.0 where a length never
    /// occurred).
    pub fn from_distribution(name: impl Into<String>, wld: &WordLengthDistribution) -> Self {
        let points = (1..=wld.max_length())
            .map(|len| (len, wld.frequency(len)))
            .collect();
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Errors a visualizer can produce.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("nothing to plot: no series given")]
    NoSeries,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render sink for a set of frequency curves.
pub trait Visualizer {
    fn plot(&self, series: &[FrequencySeries]) -> Result<(), PlotError>;
}
