//! YAML configuration file support.
//!
//! Lets users keep corpus location, truncation threshold, and tokenizer
//! switches in a single file instead of repeating CLI flags:
//!
//! ```yaml
//! version: "1.0"
//! texts_dir: ./texts
//! min_expected_count: 10
//! parallel: false
//! tokenizer:
//!   version: 1
//!   normalize_unicode: true
//!   lowercase: false
//!   split_punctuation: true
//! ```
//!
//! Every field is optional; command-line flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wld_corpus::{CorpusConfig, TokenizeConfig};
use wld_stats::CompareConfig;

/// Errors that can occur when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Optional schema marker; only "1.0" is recognized today.
    pub version: Option<String>,
    /// Directory of `<title>-<author>.txt` files.
    pub texts_dir: Option<PathBuf>,
    /// Zero-guard threshold for the comparison batch.
    pub min_expected_count: Option<u64>,
    /// Tokenize corpus files in parallel.
    pub parallel: Option<bool>,
    /// Tokenizer switches.
    pub tokenizer: Option<TokenizeConfig>,
}

impl AppConfig {
    /// Load and validate a YAML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: AppConfig = serde_yaml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(version) = &self.version
            && version != "1.0"
        {
            return Err(ConfigError::Validation(format!(
                "unsupported config version: {version}"
            )));
        }
        if self.min_expected_count == Some(0) {
            return Err(ConfigError::Validation(
                "min_expected_count must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Corpus settings with CLI overrides folded in.
    pub fn corpus_config(&self, dir: Option<&Path>, parallel: bool) -> CorpusConfig {
        let mut cfg = CorpusConfig::default();
        if let Some(dir) = dir.map(Path::to_path_buf).or_else(|| self.texts_dir.clone()) {
            cfg.dir = dir;
        }
        if let Some(tokenizer) = &self.tokenizer {
            cfg.tokenizer = tokenizer.clone();
        }
        cfg.parallel = parallel || self.parallel.unwrap_or(cfg.parallel);
        cfg
    }

    /// Comparison settings with CLI overrides folded in.
    pub fn compare_config(&self, threshold: Option<u64>) -> CompareConfig {
        let mut cfg = CompareConfig::default();
        if let Some(threshold) = threshold.or(self.min_expected_count) {
            cfg.min_expected_count = threshold;
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp config");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn full_config_round_trips() {
        let file = write_config(
            "version: \"1.0\"\n\
             texts_dir: ./corpus\n\
             min_expected_count: 25\n\
             parallel: true\n\
             tokenizer:\n  \
               version: 1\n  \
               normalize_unicode: false\n  \
               lowercase: true\n  \
               split_punctuation: false\n",
        );
        let config = AppConfig::load(file.path()).expect("loads");

        let corpus = config.corpus_config(None, false);
        assert_eq!(corpus.dir, PathBuf::from("./corpus"));
        assert!(corpus.parallel);
        assert!(!corpus.tokenizer.normalize_unicode);

        let compare = config.compare_config(None);
        assert_eq!(compare.min_expected_count, 25);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let file = write_config("texts_dir: ./corpus\nmin_expected_count: 25\n");
        let config = AppConfig::load(file.path()).expect("loads");

        let corpus = config.corpus_config(Some(Path::new("/elsewhere")), false);
        assert_eq!(corpus.dir, PathBuf::from("/elsewhere"));
        assert_eq!(config.compare_config(Some(5)).min_expected_count, 5);
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.corpus_config(None, false), CorpusConfig::default());
        assert_eq!(config.compare_config(None), CompareConfig::default());
    }

    #[test]
    fn unsupported_version_rejected() {
        let file = write_config("version: \"2.0\"\n");
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn zero_threshold_rejected() {
        let file = write_config("min_expected_count: 0\n");
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn unknown_fields_rejected() {
        let file = write_config("texts_dire: typo\n");
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::YamlParse(_))
        ));
    }
}
