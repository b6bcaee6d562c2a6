//! Filename convention parsing.
//!
//! Corpus files are named `<title>-<author>.txt` with exactly one hyphen.
//! Anything else is malformed input: the loader reports it and moves on,
//! it never guesses at which hyphen was meant as the separator.

use crate::config::CorpusError;

/// Title and author parsed from one corpus filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFile {
    pub title: String,
    pub author: String,
}

/// Parse `<title>-<author>.txt` from a bare filename.
pub fn parse_book_filename(filename: &str) -> Result<BookFile, CorpusError> {
    let malformed = |reason: &str| CorpusError::MalformedFilename {
        filename: filename.to_string(),
        reason: reason.to_string(),
    };

    let stem = filename
        .strip_suffix(".txt")
        .ok_or_else(|| malformed("expected a .txt extension"))?;

    let mut parts = stem.split('-');
    let title = parts.next().unwrap_or_default();
    let author = parts
        .next()
        .ok_or_else(|| malformed("expected one '-' between title and author"))?;
    if parts.next().is_some() {
        return Err(malformed("expected exactly one '-', found more"));
    }
    if title.is_empty() {
        return Err(malformed("title is empty"));
    }
    if author.is_empty() {
        return Err(malformed("author is empty"));
    }

    Ok(BookFile {
        title: title.to_string(),
        author: author.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_filename_parses() {
        let parsed = parse_book_filename("emma-austen.txt").expect("well-formed");
        assert_eq!(parsed.title, "emma");
        assert_eq!(parsed.author, "austen");
    }

    #[test]
    fn missing_hyphen_is_malformed() {
        let err = parse_book_filename("notes.txt").expect_err("no separator");
        assert!(matches!(err, CorpusError::MalformedFilename { .. }));
    }

    #[test]
    fn extra_hyphens_are_malformed() {
        let err = parse_book_filename("war-and-peace-tolstoy.txt").expect_err("ambiguous");
        assert!(matches!(err, CorpusError::MalformedFilename { .. }));
    }

    #[test]
    fn empty_title_or_author_is_malformed() {
        assert!(parse_book_filename("-austen.txt").is_err());
        assert!(parse_book_filename("emma-.txt").is_err());
    }

    #[test]
    fn wrong_extension_is_malformed() {
        assert!(parse_book_filename("emma-austen.text").is_err());
        assert!(parse_book_filename("emma-austen").is_err());
    }
}
