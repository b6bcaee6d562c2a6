//! Report formatting for comparison runs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use wld_stats::{ComparisonReport, Outcome};

use crate::pipeline::CompareRun;

/// Render the per-name result lines, one per compared subject.
pub fn render_text(report: &ComparisonReport) -> String {
    let mut out = String::new();
    for cmp in &report.comparisons {
        match cmp.outcome {
            Outcome::Fit(gof) => {
                out.push_str(&format!(
                    "{} chisq:{}, p:{}\n",
                    cmp.name, gof.statistic, gof.p_value
                ));
            }
            Outcome::InsufficientData => {
                out.push_str(&format!(
                    "{} insufficient data (no cell meets the minimum count {})\n",
                    cmp.name, report.min_expected_count
                ));
            }
        }
    }
    out
}

/// JSON envelope around one comparison run.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    subject: &'a str,
    #[serde(flatten)]
    report: &'a ComparisonReport,
}

/// Render the full run as a JSON document.
pub fn render_json(run: &CompareRun) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        generated_at: Utc::now(),
        subject: run.subject.as_str(),
        report: &run.report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wld_stats::{Comparison, GoodnessOfFit};

    fn report() -> ComparisonReport {
        ComparisonReport {
            comparisons: vec![
                Comparison {
                    name: "austen".into(),
                    outcome: Outcome::Fit(GoodnessOfFit {
                        statistic: 12.5,
                        p_value: 0.0625,
                    }),
                },
                Comparison {
                    name: "anon".into(),
                    outcome: Outcome::InsufficientData,
                },
            ],
            cutoff: 4,
            min_expected_count: 10,
        }
    }

    #[test]
    fn text_report_has_one_line_per_name() {
        let text = render_text(&report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "austen chisq:12.5, p:0.0625");
        assert!(lines[1].starts_with("anon insufficient data"));
    }

    #[test]
    fn json_report_carries_run_metadata() {
        let run = CompareRun {
            subject: "author".parse().expect("valid kind"),
            report: report(),
            distributions: Default::default(),
        };
        let json = render_json(&run).expect("serializes");
        assert!(json.contains("\"subject\": \"author\""));
        assert!(json.contains("\"generated_at\""));
        assert!(json.contains("\"cutoff\": 4"));
        assert!(json.contains("\"insufficient_data\""));
    }
}
