//! Partition discovery for corpus sources.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// One source table of the corpus (a sheet export).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// File stem, e.g. `Polity` for `Polity.csv`.
    pub name: String,
    pub path: PathBuf,
}

impl Partition {
    fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().trim().to_string())
            .unwrap_or_default();
        Self { name, path }
    }
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::PathNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Resolves a corpus path into the partitions to load.
///
/// A file is a single partition. A directory yields one partition per CSV
/// file, in filename order, minus those named in `exclude`.
pub fn discover_partitions(path: &Path, exclude: &[String]) -> Result<Vec<Partition>> {
    if path.is_file() {
        return Ok(vec![Partition::from_path(path.to_path_buf())]);
    }
    if !path.exists() {
        return Err(IngestError::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    let files = list_csv_files(path)?;
    if files.is_empty() {
        return Err(IngestError::NoCsvFiles {
            path: path.to_path_buf(),
        });
    }

    let mut partitions = Vec::with_capacity(files.len());
    for file in files {
        let partition = Partition::from_path(file);
        if is_excluded(&partition.name, exclude) {
            tracing::info!(partition = %partition.name, "Skipping rollup partition");
            continue;
        }
        partitions.push(partition);
    }
    Ok(partitions)
}

/// True when `name` matches an exclusion entry (trimmed, case-insensitive).
pub fn is_excluded(name: &str, exclude: &[String]) -> bool {
    let name = name.trim();
    exclude
        .iter()
        .any(|entry| entry.trim().eq_ignore_ascii_case(name))
}
