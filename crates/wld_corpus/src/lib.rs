//! Corpus ingestion for word-length distribution analysis.
//!
//! Reads a directory of pre-cleaned plain-text files named
//! `<title>-<author>.txt`, tokenizes each one, and exposes the result as a
//! read-only [`Corpus`]: token streams keyed by title plus an author →
//! titles mapping. Files that break the naming convention or are not valid
//! UTF-8 are skipped with a structured warning; the load never aborts over
//! one bad file.
//!
//! The corpus is an explicitly constructed value, not a global store.
//! After [`Corpus::load`] returns, nothing mutates it, so any number of
//! comparisons can borrow it concurrently.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{Level, info, warn};

pub mod config;
pub mod filename;
pub mod subject;
pub mod tokenize;

pub use config::{CorpusConfig, CorpusError, TokenizeConfig};
pub use filename::{BookFile, parse_book_filename};
pub use subject::Subject;
pub use tokenize::{Token, tokenize};

/// One file the loader refused, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

/// What a load run did: how many files made it in, which did not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub loaded: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Tokenized texts keyed by title, with the author → titles mapping.
#[derive(Debug, Clone)]
pub struct Corpus {
    texts: BTreeMap<String, Vec<Token>>,
    books_by_author: BTreeMap<String, BTreeSet<String>>,
    stats: LoadStats,
}

impl Corpus {
    /// Load every well-formed `*.txt` file under the configured directory.
    pub fn load(cfg: &CorpusConfig) -> Result<Self, CorpusError> {
        cfg.validate()?;
        let start = Instant::now();
        let span = tracing::span!(Level::INFO, "wld_corpus.load", dir = %cfg.dir.display());
        let _guard = span.enter();

        let mut paths: Vec<PathBuf> = fs::read_dir(&cfg.dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(OsStr::to_str) == Some("txt")
            })
            .collect();
        paths.sort();

        let mut skipped = Vec::new();
        let mut seen_titles = BTreeSet::new();
        let mut pending: Vec<(BookFile, String)> = Vec::new();

        for path in paths {
            let Some(name) = path.file_name().and_then(OsStr::to_str) else {
                continue;
            };
            let filename = name.to_string();

            match read_book(&path, &filename, &mut seen_titles) {
                Ok(entry) => pending.push(entry),
                Err(err) => {
                    warn!(file = %filename, error = %err, "corpus_skip");
                    skipped.push(SkippedFile {
                        filename,
                        reason: err.to_string(),
                    });
                }
            }
        }

        let tokenizer = &cfg.tokenizer;
        let tokenized: Vec<(BookFile, Vec<Token>)> = if cfg.parallel {
            pending
                .into_par_iter()
                .map(|(book, text)| {
                    let tokens = tokenize(&text, tokenizer);
                    (book, tokens)
                })
                .collect()
        } else {
            pending
                .into_iter()
                .map(|(book, text)| {
                    let tokens = tokenize(&text, tokenizer);
                    (book, tokens)
                })
                .collect()
        };

        let mut corpus = Self {
            texts: BTreeMap::new(),
            books_by_author: BTreeMap::new(),
            stats: LoadStats {
                loaded: tokenized.len(),
                skipped,
            },
        };
        for (book, tokens) in tokenized {
            corpus
                .books_by_author
                .entry(book.author)
                .or_default()
                .insert(book.title.clone());
            corpus.texts.insert(book.title, tokens);
        }

        info!(
            loaded = corpus.stats.loaded,
            skipped = corpus.stats.skipped.len(),
            elapsed_micros = start.elapsed().as_micros(),
            "corpus_loaded"
        );
        Ok(corpus)
    }

    /// Build a corpus directly from `(title, author, tokens)` triples.
    /// Titles must be unique.
    pub fn from_books<I, S>(books: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = (S, S, Vec<Token>)>,
        S: Into<String>,
    {
        let mut corpus = Self {
            texts: BTreeMap::new(),
            books_by_author: BTreeMap::new(),
            stats: LoadStats::default(),
        };
        for (title, author, tokens) in books {
            let title = title.into();
            if corpus.texts.contains_key(&title) {
                return Err(CorpusError::DuplicateTitle { title });
            }
            corpus
                .books_by_author
                .entry(author.into())
                .or_default()
                .insert(title.clone());
            corpus.texts.insert(title, tokens);
            corpus.stats.loaded += 1;
        }
        Ok(corpus)
    }

    /// Titles in the corpus, ascending.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.texts.keys().map(String::as_str)
    }

    /// Authors in the corpus, ascending.
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.books_by_author.keys().map(String::as_str)
    }

    /// Token stream of one title.
    pub fn tokens(&self, title: &str) -> Option<&[Token]> {
        self.texts.get(title).map(Vec::as_slice)
    }

    /// Titles attributed to one author.
    pub fn titles_by(&self, author: &str) -> Option<&BTreeSet<String>> {
        self.books_by_author.get(author)
    }

    /// Number of books held.
    pub fn book_count(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// What the load run skipped and kept.
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }
}

/// Parse, read, and decode one candidate file.
fn read_book(
    path: &std::path::Path,
    filename: &str,
    seen_titles: &mut BTreeSet<String>,
) -> Result<(BookFile, String), CorpusError> {
    let book = parse_book_filename(filename)?;
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|err| CorpusError::Encoding {
        filename: filename.to_string(),
        detail: err.utf8_error().to_string(),
    })?;
    if !seen_titles.insert(book.title.clone()) {
        return Err(CorpusError::DuplicateTitle {
            title: book.title,
        });
    }
    Ok((book, text))
}
