//! Header row resolution for question tables.

use std::path::Path;

use pyq_model::OptionLabel;

use crate::error::{IngestError, Result};

pub const YEAR_COLUMN: &str = "Year";
pub const SUBJECT_COLUMN: &str = "Subject";
pub const TOPIC_COLUMN: &str = "Broad Topic";
pub const QUESTION_COLUMN: &str = "Question Text";
pub const ANSWER_COLUMN: &str = "Answer";

/// Column positions of a question table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusColumns {
    pub year: usize,
    pub answer: usize,
    pub subject: Option<usize>,
    pub broad_topic: Option<usize>,
    pub question_text: Option<usize>,
    pub options: Vec<(OptionLabel, usize)>,
}

impl CorpusColumns {
    /// Locates the known columns; `Year` and `Answer` are required.
    pub fn resolve<S: AsRef<str>>(headers: &[S], path: &Path) -> Result<Self> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| normalize_header(h.as_ref()))
            .collect();
        let find = |name: &str| names.iter().position(|h| h.eq_ignore_ascii_case(name));
        let require = |name: &str| {
            find(name).ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })
        };

        Ok(Self {
            year: require(YEAR_COLUMN)?,
            answer: require(ANSWER_COLUMN)?,
            subject: find(SUBJECT_COLUMN),
            broad_topic: find(TOPIC_COLUMN),
            question_text: find(QUESTION_COLUMN),
            options: OptionLabel::ALL
                .into_iter()
                .filter_map(|label| find(label.column_name()).map(|idx| (label, idx)))
                .collect(),
        })
    }
}

/// Normalizes a header value: strips a UTF-8 BOM and trims whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}
