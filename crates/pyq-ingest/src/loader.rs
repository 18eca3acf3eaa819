//! Corpus assembly from CSV partitions.

use std::path::Path;

use pyq_model::Corpus;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::discovery::discover_partitions;
use crate::error::{IngestError, Result};
use crate::table::read_partition;

/// Partitions skipped by default: precomputed rollups that duplicate rows.
pub const DEFAULT_EXCLUDED_PARTITIONS: &[&str] = &["All PYQ"];

/// Options controlling corpus loading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Partition names to skip (trimmed, case-insensitive).
    pub exclude_partitions: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            exclude_partitions: DEFAULT_EXCLUDED_PARTITIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Loads and validates the corpus from a CSV file or a directory of CSV
/// partitions.
///
/// Rows are concatenated in partition order, then file order. The returned
/// corpus carries a SHA-256 fingerprint over partition names and bytes.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use pyq_ingest::{LoadOptions, load_corpus};
///
/// let corpus = load_corpus(Path::new("data"), &LoadOptions::default())?;
/// println!("{} questions", corpus.len());
/// ```
pub fn load_corpus(path: &Path, options: &LoadOptions) -> Result<Corpus> {
    let partitions = discover_partitions(path, &options.exclude_partitions)?;

    let mut hasher = Sha256::new();
    let mut corpus = Corpus::default();

    for partition in &partitions {
        let bytes = std::fs::read(&partition.path).map_err(|e| IngestError::FileRead {
            path: partition.path.clone(),
            source: e,
        })?;
        hasher.update(partition.name.as_bytes());
        hasher.update([0u8]);
        hasher.update(&bytes);

        for row in read_partition(&partition.path, &bytes, &partition.name)? {
            corpus
                .push(row.item)
                .map_err(|err| IngestError::InvalidRow {
                    path: partition.path.clone(),
                    line: row.line,
                    reason: err.to_string(),
                })?;
        }
    }

    let fingerprint = hex::encode(hasher.finalize());

    tracing::info!(
        path = %path.display(),
        partitions = partitions.len(),
        items = corpus.len(),
        fingerprint = %fingerprint,
        "Loaded corpus"
    );

    Ok(corpus.with_fingerprint(fingerprint))
}
