//! Single-pass tokenizer.
//!
//! Scans the (optionally NFKC-normalized, optionally lowercased) text once
//! and emits tokens at whitespace boundaries. With `split_punctuation` on,
//! a run of punctuation is its own token rather than sticking to the word
//! it trails (`"end."` becomes `end` + `.`), which is what a length
//! histogram wants. Offsets are byte positions in the scanned text.

use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

use crate::config::TokenizeConfig;

/// A token with its UTF-8 byte offsets in the scanned text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize, // byte offset (inclusive)
    pub end: usize,   // byte offset (exclusive)
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// What kind of run the scanner is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Word,
    Punctuation,
}

/// Accumulates the scanned text and the token runs found in it.
struct Scanner {
    text: String,
    tokens: Vec<Token>,
    run_start: Option<usize>,
    run_kind: RunKind,
    split_punctuation: bool,
}

impl Scanner {
    fn new(capacity: usize, split_punctuation: bool) -> Self {
        Self {
            text: String::with_capacity(capacity),
            tokens: Vec::new(),
            run_start: None,
            run_kind: RunKind::Word,
            split_punctuation,
        }
    }

    fn push(&mut self, ch: char) {
        if ch.is_whitespace() {
            self.finish_run();
            return;
        }

        let kind = if self.split_punctuation && ch.is_punctuation() {
            RunKind::Punctuation
        } else {
            RunKind::Word
        };
        if self.run_start.is_some() && kind != self.run_kind {
            self.finish_run();
        }
        if self.run_start.is_none() {
            self.run_start = Some(self.text.len());
            self.run_kind = kind;
        }
        self.text.push(ch);
    }

    fn finish_run(&mut self) {
        if let Some(start) = self.run_start.take() {
            let end = self.text.len();
            self.tokens.push(Token {
                text: self.text[start..end].to_string(),
                start,
                end,
            });
        }
    }

    fn into_tokens(mut self) -> Vec<Token> {
        self.finish_run();
        self.tokens
    }
}

/// Tokenize raw text. An empty or all-whitespace input yields no tokens;
/// whether that is acceptable is the comparison layer's decision.
pub fn tokenize(input: &str, cfg: &TokenizeConfig) -> Vec<Token> {
    let mut scanner = Scanner::new(input.len(), cfg.split_punctuation);

    if cfg.normalize_unicode {
        scan_chars(input.nfkc(), cfg, &mut scanner);
    } else {
        scan_chars(input.chars(), cfg, &mut scanner);
    }

    scanner.into_tokens()
}

fn scan_chars<I>(iter: I, cfg: &TokenizeConfig, scanner: &mut Scanner)
where
    I: Iterator<Item = char>,
{
    for ch in iter {
        // Lowercasing can expand a single character (Turkish İ -> i̇).
        if cfg.lowercase {
            for lower in ch.to_lowercase() {
                scanner.push(lower);
            }
        } else {
            scanner.push(ch);
        }
    }
}
