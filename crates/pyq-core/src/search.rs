//! Free-text search over question text and topics.

use pyq_model::{Corpus, QuizItem};
use serde::Deserialize;

/// Shortest query that triggers a search.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 3;
/// Most results returned for one query.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub min_chars: usize,
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_QUERY_CHARS,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl SearchOptions {
    /// Whether `query` is long enough to search for.
    pub fn accepts(&self, query: &str) -> bool {
        query.chars().count() >= self.min_chars
    }
}

/// First matches of `query` in corpus order.
///
/// Matches are case-insensitive substring hits in the question text or the
/// broad topic. Queries shorter than `options.min_chars` return nothing.
pub fn search<'a>(corpus: &'a Corpus, query: &str, options: &SearchOptions) -> Vec<&'a QuizItem> {
    if !options.accepts(query) {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    corpus
        .iter()
        .filter(|item| {
            contains(item.question_text(), &needle) || contains(item.broad_topic(), &needle)
        })
        .take(options.limit)
        .collect()
}

fn contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|text| text.to_lowercase().contains(needle))
}
