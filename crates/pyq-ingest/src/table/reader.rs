//! Reads one CSV partition into unvalidated quiz rows.

use std::collections::BTreeMap;
use std::path::Path;

use pyq_model::NewQuizItem;

use crate::error::{IngestError, Result};

use super::header::CorpusColumns;

/// A parsed row and the 1-based line it came from.
#[derive(Debug, Clone)]
pub struct SourceRow {
    pub line: u64,
    pub item: NewQuizItem,
}

/// Parses CSV bytes for a single partition.
///
/// Entirely blank rows are skipped. The year must be an integer, or a float
/// with no fractional part as spreadsheet exports tend to write it.
pub fn read_partition(path: &Path, bytes: &[u8], partition: &str) -> Result<Vec<SourceRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let columns = CorpusColumns::resolve(&headers.iter().collect::<Vec<_>>(), path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, csv::Position::line);

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let get = |idx: usize| -> Option<String> {
            record
                .get(idx)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        };
        let invalid = |reason: String| IngestError::InvalidRow {
            path: path.to_path_buf(),
            line,
            reason,
        };

        let year_raw = get(columns.year).ok_or_else(|| invalid("missing year".to_string()))?;
        let year = parse_year(&year_raw)
            .ok_or_else(|| invalid(format!("year '{year_raw}' is not an integer")))?;

        let options: BTreeMap<_, _> = columns
            .options
            .iter()
            .filter_map(|(label, idx)| get(*idx).map(|text| (*label, text)))
            .collect();

        rows.push(SourceRow {
            line,
            item: NewQuizItem {
                partition: partition.to_string(),
                year,
                subject: columns.subject.and_then(get),
                broad_topic: columns.broad_topic.and_then(get),
                question_text: columns.question_text.and_then(get),
                options,
                answer: get(columns.answer).unwrap_or_default(),
            },
        });
    }

    tracing::debug!(
        path = %path.display(),
        partition,
        rows = rows.len(),
        "Read partition"
    );

    Ok(rows)
}

/// Coerces a year cell to an integer.
pub fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX) {
        // Range checked above.
        #[allow(clippy::cast_possible_truncation)]
        let year = value as i32;
        return Some(year);
    }
    None
}
