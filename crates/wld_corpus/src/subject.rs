//! Subjects of a comparison: books or authors.
//!
//! The two kinds are a closed enum rather than a "kind" string, so a
//! comparison over the wrong kind cannot be constructed past the CLI
//! boundary. Each variant carries its own name-resolution logic: a book
//! resolves to one token stream, an author to the streams of every book
//! attributed to them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::CorpusError;
use crate::{Corpus, Token};

/// What a comparison's names refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Book,
    Author,
}

impl Subject {
    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Book => "book",
            Subject::Author => "author",
        }
    }

    /// Resolve a name to the token streams backing it.
    ///
    /// Returns borrowed slices into the corpus; the caller chains them
    /// when it wants the pooled stream.
    pub fn resolve<'c>(
        self,
        corpus: &'c Corpus,
        name: &str,
    ) -> Result<Vec<&'c [Token]>, CorpusError> {
        let unknown = || CorpusError::UnknownName {
            kind: self,
            name: name.to_string(),
        };

        match self {
            Subject::Book => {
                let tokens = corpus.tokens(name).ok_or_else(unknown)?;
                Ok(vec![tokens])
            }
            Subject::Author => {
                let titles = corpus.titles_by(name).ok_or_else(unknown)?;
                Ok(titles
                    .iter()
                    .filter_map(|title| corpus.tokens(title))
                    .collect())
            }
        }
    }

    /// Every name of this kind present in the corpus, in stable order.
    pub fn default_names(self, corpus: &Corpus) -> Vec<String> {
        match self {
            Subject::Book => corpus.titles().map(str::to_string).collect(),
            Subject::Author => corpus.authors().map(str::to_string).collect(),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "book" => Ok(Subject::Book),
            "author" => Ok(Subject::Author),
            _ => Err(CorpusError::UnknownKind(s.to_string())),
        }
    }
}
