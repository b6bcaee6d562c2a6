//! SVG line-plot rendering.
//!
//! Writes a self-contained SVG: light grid, integer x-axis ticks
//! (word-length), fractional y-axis ticks (relative frequency), one
//! polyline per series with a cycling palette, and a legend keyed by
//! series name. Output is fully deterministic for a given input.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::{FrequencySeries, PlotError, Visualizer};

/// Line colors, cycled per series.
const PALETTE: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
];

const MARGIN_LEFT: f64 = 62.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 46.0;

/// Renders frequency curves to an SVG file.
#[derive(Debug, Clone)]
pub struct SvgPlotter {
    path: PathBuf,
    width: f64,
    height: f64,
}

impl SvgPlotter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            width: 800.0,
            height: 500.0,
        }
    }

    pub fn with_size(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width: width as f64,
            height: height as f64,
        }
    }

    /// Render the chart markup without touching the filesystem.
    pub fn render(&self, series: &[FrequencySeries]) -> Result<String, PlotError> {
        if series.is_empty() || series.iter().all(|s| s.points.is_empty()) {
            return Err(PlotError::NoSeries);
        }

        let max_len = series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(len, _)| len))
            .max()
            .unwrap_or(1)
            .max(1);
        let max_freq = series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(_, freq)| freq))
            .fold(0.0f64, f64::max)
            .max(f64::MIN_POSITIVE);

        let plot_w = self.width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = self.height - MARGIN_TOP - MARGIN_BOTTOM;
        let x_span = (max_len - 1).max(1) as f64;
        let x_of = |len: usize| MARGIN_LEFT + len.saturating_sub(1) as f64 / x_span * plot_w;
        let y_of = |freq: f64| MARGIN_TOP + (1.0 - freq / max_freq) * plot_h;

        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\" font-family=\"sans-serif\" font-size=\"12\">\n",
            self.width, self.height, self.width, self.height
        ));
        out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

        self.render_grid(&mut out, max_len, max_freq, x_of, y_of);
        self.render_series(&mut out, series, x_of, y_of);
        self.render_legend(&mut out, series);

        out.push_str("</svg>\n");
        Ok(out)
    }

    fn render_grid(
        &self,
        out: &mut String,
        max_len: usize,
        max_freq: f64,
        x_of: impl Fn(usize) -> f64,
        y_of: impl Fn(f64) -> f64,
    ) {
        let x_step = (max_len / 12).max(1);
        let bottom = self.height - MARGIN_BOTTOM;

        for len in (1..=max_len).step_by(x_step) {
            let x = x_of(len);
            out.push_str(&format!(
                "<line x1=\"{x:.1}\" y1=\"{MARGIN_TOP}\" x2=\"{x:.1}\" y2=\"{bottom:.1}\" \
                 stroke=\"#dddddd\"/>\n"
            ));
            out.push_str(&format!(
                "<text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{len}</text>\n",
                bottom + 18.0
            ));
        }

        for tick in 0..=5 {
            let freq = max_freq * tick as f64 / 5.0;
            let y = y_of(freq);
            out.push_str(&format!(
                "<line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" \
                 stroke=\"#dddddd\"/>\n",
                self.width - MARGIN_RIGHT
            ));
            out.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{freq:.3}</text>\n",
                MARGIN_LEFT - 8.0,
                y + 4.0
            ));
        }

        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">word length</text>\n",
            MARGIN_LEFT + (self.width - MARGIN_LEFT - MARGIN_RIGHT) / 2.0,
            self.height - 8.0
        ));
        out.push_str(&format!(
            "<text x=\"14\" y=\"{:.1}\" text-anchor=\"middle\" \
             transform=\"rotate(-90 14 {:.1})\">frequency</text>\n",
            MARGIN_TOP + (self.height - MARGIN_TOP - MARGIN_BOTTOM) / 2.0,
            MARGIN_TOP + (self.height - MARGIN_TOP - MARGIN_BOTTOM) / 2.0
        ));
    }

    fn render_series(
        &self,
        out: &mut String,
        series: &[FrequencySeries],
        x_of: impl Fn(usize) -> f64,
        y_of: impl Fn(f64) -> f64,
    ) {
        for (i, s) in series.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            let points: Vec<String> = s
                .points
                .iter()
                .map(|&(len, freq)| format!("{:.1},{:.1}", x_of(len), y_of(freq)))
                .collect();
            out.push_str(&format!(
                "<polyline fill=\"none\" stroke=\"{color}\" stroke-width=\"1.5\" \
                 points=\"{}\"/>\n",
                points.join(" ")
            ));
        }
    }

    fn render_legend(&self, out: &mut String, series: &[FrequencySeries]) {
        let x = self.width - MARGIN_RIGHT - 160.0;
        for (i, s) in series.iter().enumerate() {
            let y = MARGIN_TOP + 10.0 + i as f64 * 18.0;
            let color = PALETTE[i % PALETTE.len()];
            out.push_str(&format!(
                "<line x1=\"{x:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" \
                 stroke=\"{color}\" stroke-width=\"2\"/>\n",
                x + 22.0
            ));
            out.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\">{}</text>\n",
                x + 28.0,
                y + 4.0,
                escape_text(&s.name)
            ));
        }
    }
}

impl Visualizer for SvgPlotter {
    fn plot(&self, series: &[FrequencySeries]) -> Result<(), PlotError> {
        let markup = self.render(series)?;
        fs::write(&self.path, markup)?;
        info!(path = %self.path.display(), series = series.len(), "plot_written");
        Ok(())
    }
}

/// Escape the XML-significant characters a series name can carry.
fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
