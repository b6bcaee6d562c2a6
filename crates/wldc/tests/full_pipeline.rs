use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use wld_corpus::{Corpus, CorpusConfig, Subject};
use wld_plot::{FrequencySeries, SvgPlotter, Visualizer};
use wld_stats::{CompareConfig, Outcome};
use wldc::pipeline::run_compare;
use wldc::report::render_text;

/// A paragraph with a healthy spread of word lengths, repeated until the
/// low-length cells comfortably clear the default threshold of 10.
fn body(repeats: usize) -> String {
    let unit = "it is a truth universally acknowledged that a single man in possession \
                of a good fortune must be in want of a wife";
    std::iter::repeat_n(unit, repeats).collect::<Vec<_>>().join(" ")
}

fn write_corpus(dir: &Path) {
    fs::write(dir.join("emma-austen.txt"), body(12)).expect("write emma");
    fs::write(dir.join("persuasion-austen.txt"), body(15)).expect("write persuasion");
    fs::write(dir.join("bleakhouse-dickens.txt"), body(18)).expect("write bleakhouse");
    fs::write(dir.join("hardtimes-dickens.txt"), body(11)).expect("write hardtimes");
}

fn load(dir: &Path) -> Corpus {
    Corpus::load(&CorpusConfig {
        dir: dir.to_path_buf(),
        ..Default::default()
    })
    .expect("corpus loads")
}

#[test]
fn corpus_to_report_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_corpus(dir.path());
    let corpus = load(dir.path());

    let run = run_compare(&corpus, Subject::Author, &[], &CompareConfig::default())
        .expect("comparison runs");

    assert_eq!(run.report.comparisons.len(), 2);
    assert!(run.report.cutoff > 0);
    for cmp in &run.report.comparisons {
        let Outcome::Fit(gof) = cmp.outcome else {
            panic!("{} lacked data unexpectedly", cmp.name);
        };
        assert!(gof.statistic >= 0.0);
        assert!(gof.p_value > 0.0 && gof.p_value <= 1.0);
    }

    let text = render_text(&run.report);
    assert!(text.lines().any(|l| l.starts_with("austen chisq:")));
    assert!(text.lines().any(|l| l.starts_with("dickens chisq:")));
}

#[test]
fn books_of_one_author_compare_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_corpus(dir.path());
    let corpus = load(dir.path());

    let names: Vec<String> = corpus
        .titles_by("austen")
        .expect("known author")
        .iter()
        .cloned()
        .collect();
    let run = run_compare(&corpus, Subject::Book, &names, &CompareConfig::default())
        .expect("comparison runs");

    let reported: Vec<&str> = run
        .report
        .comparisons
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(reported, vec!["emma", "persuasion"]);
}

#[test]
fn malformed_files_do_not_abort_the_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_corpus(dir.path());
    fs::write(dir.path().join("README.txt"), "not a corpus file").expect("write readme");
    fs::write(dir.path().join("badbytes-anon.txt"), [0xC3u8, 0x28]).expect("write bad utf8");

    let corpus = load(dir.path());
    assert_eq!(corpus.stats().loaded, 4);
    assert_eq!(corpus.stats().skipped.len(), 2);

    // The survivors still compare.
    let run = run_compare(&corpus, Subject::Author, &[], &CompareConfig::default())
        .expect("comparison runs");
    assert_eq!(run.report.comparisons.len(), 2);
}

#[test]
fn oversized_threshold_flags_every_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_corpus(dir.path());
    let corpus = load(dir.path());

    let strict = CompareConfig {
        min_expected_count: 1_000_000,
        ..CompareConfig::default()
    };
    let run = run_compare(&corpus, Subject::Author, &[], &strict).expect("comparison runs");

    assert_eq!(run.report.cutoff, 0);
    assert!(
        run.report
            .comparisons
            .iter()
            .all(|c| c.outcome == Outcome::InsufficientData)
    );

    let text = render_text(&run.report);
    assert!(text.contains("insufficient data"));
}

#[test]
fn distribution_curves_render_to_svg() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_corpus(dir.path());
    let corpus = load(dir.path());

    let run = run_compare(&corpus, Subject::Author, &[], &CompareConfig::default())
        .expect("comparison runs");
    let series: Vec<FrequencySeries> = run
        .distributions
        .iter()
        .map(|(name, wld)| FrequencySeries::from_distribution(name.clone(), wld))
        .collect();

    let path = dir.path().join("authors.svg");
    SvgPlotter::new(&path).plot(&series).expect("plot succeeds");

    let markup = fs::read_to_string(&path).expect("svg written");
    assert_eq!(markup.matches("<polyline").count(), 2);
    assert!(markup.contains(">austen</text>"));
    assert!(markup.contains(">dickens</text>"));
}

#[test]
fn statistics_are_stable_across_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_corpus(dir.path());

    let mut statistics: Vec<BTreeMap<String, String>> = Vec::new();
    for _ in 0..2 {
        let corpus = load(dir.path());
        let run = run_compare(&corpus, Subject::Book, &[], &CompareConfig::default())
            .expect("comparison runs");
        statistics.push(
            run.report
                .comparisons
                .iter()
                .map(|c| (c.name.clone(), format!("{:?}", c.outcome)))
                .collect(),
        );
    }
    assert_eq!(statistics[0], statistics[1]);
}
