//! Question table reading.

mod header;
mod reader;

pub use header::{
    ANSWER_COLUMN, CorpusColumns, QUESTION_COLUMN, SUBJECT_COLUMN, TOPIC_COLUMN, YEAR_COLUMN,
    normalize_header,
};
pub use reader::{SourceRow, parse_year, read_partition};
