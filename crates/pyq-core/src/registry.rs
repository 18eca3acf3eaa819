//! Topic name <-> compact code mapping.

use std::collections::HashMap;
use std::fmt;

use pyq_model::Corpus;
use serde::{Deserialize, Serialize};

/// Small integer standing in for a topic name inside navigation tokens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TopicCode(u32);

impl TopicCode {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TopicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bidirectional topic lookup built once per corpus snapshot.
///
/// Codes follow first-seen order of the `Broad Topic` column, starting at 0.
/// Missing and empty topics are not registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicRegistry {
    topics: Vec<String>,
    codes: HashMap<String, TopicCode>,
}

impl TopicRegistry {
    pub fn build(corpus: &Corpus) -> Self {
        let registry = Self::from_topics(corpus.iter().filter_map(|item| item.broad_topic()));
        if registry.is_empty() && !corpus.is_empty() {
            tracing::warn!(items = corpus.len(), "Corpus has no topics; topic menus will be empty");
        }
        registry
    }

    /// Registers topics in iteration order, skipping blanks and repeats.
    pub fn from_topics<I, S>(topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::default();
        for topic in topics {
            let topic = topic.as_ref().trim();
            if topic.is_empty() || registry.codes.contains_key(topic) {
                continue;
            }
            let Ok(next) = u32::try_from(registry.topics.len()) else {
                break;
            };
            registry.codes.insert(topic.to_string(), TopicCode(next));
            registry.topics.push(topic.to_string());
        }
        registry
    }

    pub fn code_of(&self, topic: &str) -> Option<TopicCode> {
        self.codes.get(topic).copied()
    }

    pub fn topic_of(&self, code: TopicCode) -> Option<&str> {
        usize::try_from(code.0)
            .ok()
            .and_then(|idx| self.topics.get(idx))
            .map(String::as_str)
    }

    pub fn contains(&self, code: TopicCode) -> bool {
        self.topic_of(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Topics in code order.
    pub fn iter(&self) -> impl Iterator<Item = (TopicCode, &str)> {
        self.topics
            .iter()
            .zip(0u32..)
            .map(|(topic, code)| (TopicCode(code), topic.as_str()))
    }
}
