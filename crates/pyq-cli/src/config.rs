//! `pyq.toml` configuration.
//!
//! Every field has a default, so an absent file or an empty table is a valid
//! configuration.

use std::path::{Path, PathBuf};

use pyq_core::{BrowseOptions, SearchOptions};
use pyq_ingest::{DEFAULT_EXCLUDED_PARTITIONS, LoadOptions};
use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pyq.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub browse: BrowseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorpusConfig {
    /// CSV file or directory of CSV partitions.
    pub path: PathBuf,
    /// Rollup partitions to skip.
    pub exclude_partitions: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data"),
            exclude_partitions: DEFAULT_EXCLUDED_PARTITIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrowseConfig {
    pub page_size: usize,
    pub search_limit: usize,
    pub search_min_chars: usize,
    pub topic_label_chars: usize,
    pub exam_label: String,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        let defaults = BrowseOptions::default();
        Self {
            page_size: defaults.page_size,
            search_limit: defaults.search.limit,
            search_min_chars: defaults.search.min_chars,
            topic_label_chars: defaults.topic_label_chars,
            exam_label: defaults.exam_label,
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.clone(),
                source,
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.browse.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "browse.page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.browse.search_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "browse.search_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            exclude_partitions: self.corpus.exclude_partitions.clone(),
        }
    }

    pub fn browse_options(&self) -> BrowseOptions {
        BrowseOptions {
            page_size: self.browse.page_size,
            search: SearchOptions {
                min_chars: self.browse.search_min_chars,
                limit: self.browse.search_limit,
            },
            topic_label_chars: self.browse.topic_label_chars,
            exam_label: self.browse.exam_label.clone(),
        }
    }
}
