//! Question corpus ingestion.
//!
//! This crate turns tabular exports of the question bank into a validated
//! [`pyq_model::Corpus`].
//!
//! # Features
//!
//! - **Partition Discovery**: one CSV per source sheet, rollup sheets skipped
//! - **Header Resolution**: `Year` and `Answer` required, other columns optional
//! - **Coercion**: spreadsheet-style years (`2020.0`), lenient answer labels
//! - **Fingerprinting**: SHA-256 over the loaded sources

mod discovery;
mod error;
mod loader;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Reading ===
pub use table::{CorpusColumns, SourceRow, normalize_header, parse_year, read_partition};

// === Partition Discovery ===
pub use discovery::{Partition, discover_partitions, is_excluded, list_csv_files};

// === Loading ===
pub use loader::{DEFAULT_EXCLUDED_PARTITIONS, LoadOptions, load_corpus};
