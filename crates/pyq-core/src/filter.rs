//! Corpus filtering and distinct-value listings for menus.

use std::collections::BTreeSet;

use pyq_model::{Corpus, QuizItem};

/// Conjunction of equality predicates. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub year: Option<i32>,
    pub subject: Option<String>,
    pub topic: Option<String>,
}

impl Criteria {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn by_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    pub fn by_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn matches(&self, item: &QuizItem) -> bool {
        self.year.is_none_or(|year| item.year() == year)
            && self
                .subject
                .as_deref()
                .is_none_or(|subject| item.subject() == Some(subject))
            && self
                .topic
                .as_deref()
                .is_none_or(|topic| item.broad_topic() == Some(topic))
    }
}

/// Items matching `criteria`, in corpus order.
pub fn filter<'a>(corpus: &'a Corpus, criteria: &Criteria) -> Vec<&'a QuizItem> {
    corpus.iter().filter(|item| criteria.matches(item)).collect()
}

/// A column that menus list the values of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Year,
    Subject,
    Topic,
}

/// Distinct values of `dimension` among items matching `parent`.
///
/// Years come most recent first; subjects and topics in ascending string
/// order. Missing values are left out.
pub fn list_distinct(corpus: &Corpus, dimension: Dimension, parent: &Criteria) -> Vec<String> {
    match dimension {
        Dimension::Year => distinct_years(corpus, parent)
            .into_iter()
            .map(|year| year.to_string())
            .collect(),
        Dimension::Subject => distinct_text(corpus, parent, QuizItem::subject),
        Dimension::Topic => distinct_text(corpus, parent, QuizItem::broad_topic),
    }
}

/// Distinct years among items matching `parent`, descending.
pub fn distinct_years(corpus: &Corpus, parent: &Criteria) -> Vec<i32> {
    let years: BTreeSet<i32> = corpus
        .iter()
        .filter(|item| parent.matches(item))
        .map(QuizItem::year)
        .collect();
    years.into_iter().rev().collect()
}

fn distinct_text<'a, F>(corpus: &'a Corpus, parent: &Criteria, field: F) -> Vec<String>
where
    F: Fn(&'a QuizItem) -> Option<&'a str>,
{
    let values: BTreeSet<&str> = corpus
        .iter()
        .filter(|item| parent.matches(item))
        .filter_map(field)
        .collect();
    values.into_iter().map(ToString::to_string).collect()
}
