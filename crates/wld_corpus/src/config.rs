//! Configuration and error types for corpus loading.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::subject::Subject;

/// Runtime configuration for corpus loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Configuration schema version.
    pub version: u32,
    /// Directory holding the `<title>-<author>.txt` files.
    pub dir: PathBuf,
    /// Tokenizer settings applied to every file.
    #[serde(default)]
    pub tokenizer: TokenizeConfig,
    /// Fan tokenization out over rayon. The resulting corpus is identical
    /// either way; this only changes load latency for large corpora.
    #[serde(default)]
    pub parallel: bool,
}

impl CorpusConfig {
    /// Validate the configuration before a load.
    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.version == 0 {
            return Err(CorpusError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        self.tokenizer.validate()
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            version: 1,
            dir: PathBuf::from("./texts"),
            tokenizer: TokenizeConfig::default(),
            parallel: false,
        }
    }
}

/// Settings for the single-pass tokenizer.
///
/// The tokenizer only feeds a length histogram, so the defaults keep
/// case untouched; lowercasing never changes a token's character count
/// but is available for callers that inspect the token stream itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizeConfig {
    /// Configuration schema version.
    pub version: u32,
    /// Apply Unicode NFKC normalization before scanning. Affects lengths:
    /// compatibility forms (ligatures, full-width letters) expand or fold.
    pub normalize_unicode: bool,
    /// Lowercase the text while scanning.
    pub lowercase: bool,
    /// Break punctuation runs out as their own tokens, so `"word,"`
    /// contributes lengths 4 and 1 instead of a single 5. Matches how
    /// off-the-shelf word tokenizers treat punctuation.
    pub split_punctuation: bool,
}

impl TokenizeConfig {
    pub(crate) fn validate(&self) -> Result<(), CorpusError> {
        if self.version == 0 {
            return Err(CorpusError::InvalidConfig(
                "tokenizer config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            lowercase: false,
            split_punctuation: true,
        }
    }
}

/// Errors surfaced by corpus loading and subject resolution.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed filename {filename:?}: {reason}")]
    MalformedFilename { filename: String, reason: String },

    #[error("file {filename:?} is not valid utf-8: {detail}")]
    Encoding { filename: String, detail: String },

    #[error("duplicate title {title:?}")]
    DuplicateTitle { title: String },

    #[error("kind must be 'book' or 'author', not {0:?}")]
    UnknownKind(String),

    #[error("unknown {kind} {name:?}")]
    UnknownName { kind: Subject, name: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
