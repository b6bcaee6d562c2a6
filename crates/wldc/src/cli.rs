//! CLI command definitions and handlers.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use wld_corpus::{Corpus, Subject};
use wld_plot::{FrequencySeries, SvgPlotter, Visualizer};

use crate::config::AppConfig;
use crate::pipeline::run_compare;
use crate::report::{render_json, render_text};

/// Compare word-length distributions across books and authors.
#[derive(Parser, Debug)]
#[command(name = "wldc")]
#[command(
    version,
    about = "Compare word-length distributions with a chi-square goodness-of-fit test",
    after_help = "\
Examples:
  wldc compare --kind author                 Compare every author in the corpus
  wldc compare --kind book emma persuasion   Compare two specific books
  wldc compare --kind book --by-author austen --plot austen.svg
  wldc --texts ./corpus list                 Show what a corpus directory holds"
)]
pub struct Cli {
    /// Directory of <title>-<author>.txt files
    #[arg(long, global = true)]
    pub texts: Option<PathBuf>,

    /// YAML config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Smallest count a distribution cell may hold before truncation
    #[arg(long, global = true)]
    pub threshold: Option<u64>,

    /// Tokenize corpus files in parallel
    #[arg(long, global = true)]
    pub parallel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the chi-square goodness-of-fit comparison
    Compare {
        /// What the names refer to: book or author
        #[arg(long, default_value = "author")]
        kind: String,

        /// Names to compare (default: every name of that kind)
        names: Vec<String>,

        /// With --kind book: compare every book by this author
        #[arg(long)]
        by_author: Option<String>,

        /// Write the distribution curves to this SVG file
        #[arg(long)]
        plot: Option<PathBuf>,

        /// Output format
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// List the titles and authors a corpus directory holds
    List,
}

pub fn run(cli: Cli) -> Result<()> {
    let app_config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };

    let corpus_cfg = app_config.corpus_config(cli.texts.as_deref(), cli.parallel);
    let corpus = Corpus::load(&corpus_cfg)
        .with_context(|| format!("loading corpus from {}", corpus_cfg.dir.display()))?;

    match cli.command {
        Commands::Compare {
            kind,
            names,
            by_author,
            plot,
            format,
        } => {
            let subject: Subject = kind.parse()?;
            let names = expand_names(&corpus, subject, names, by_author)?;
            let compare_cfg = app_config.compare_config(cli.threshold);

            let run = run_compare(&corpus, subject, &names, &compare_cfg)?;
            match format.as_str() {
                "json" => println!("{}", render_json(&run)?),
                _ => print!("{}", render_text(&run.report)),
            }

            if let Some(path) = plot {
                let series: Vec<FrequencySeries> = run
                    .distributions
                    .iter()
                    .map(|(name, wld)| FrequencySeries::from_distribution(name.clone(), wld))
                    .collect();
                SvgPlotter::new(&path).plot(&series)?;
            }
        }
        Commands::List => {
            for author in corpus.authors() {
                println!("{author}:");
                if let Some(titles) = corpus.titles_by(author) {
                    for title in titles {
                        println!("  {title}");
                    }
                }
            }
            let stats = corpus.stats();
            println!("{} book(s) loaded, {} skipped", stats.loaded, stats.skipped.len());
            for skip in &stats.skipped {
                println!("  skipped {}: {}", skip.filename, skip.reason);
            }
        }
    }

    Ok(())
}

/// Apply `--by-author` to the name list.
fn expand_names(
    corpus: &Corpus,
    subject: Subject,
    names: Vec<String>,
    by_author: Option<String>,
) -> Result<Vec<String>> {
    let Some(author) = by_author else {
        return Ok(names);
    };
    if subject != Subject::Book {
        bail!("--by-author only applies to --kind book");
    }
    if !names.is_empty() {
        bail!("--by-author cannot be combined with explicit names");
    }
    let titles = corpus
        .titles_by(&author)
        .ok_or_else(|| anyhow::anyhow!("unknown author {author:?}"))?;
    Ok(titles.iter().cloned().collect())
}
