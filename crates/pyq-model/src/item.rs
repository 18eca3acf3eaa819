#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Position of an item in corpus load order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ItemId(usize);

impl ItemId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Multiple-choice option label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Column header carrying this option in the source table.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::A => "Option A",
            Self::B => "Option B",
            Self::C => "Option C",
            Self::D => "Option D",
        }
    }

    /// Lenient parse for answer cells: accepts `b`, `B`, `(b)`, `b)` and
    /// `Option B`.
    pub fn parse_answer(raw: &str) -> Option<Self> {
        let mut value = raw.trim();
        if let Some(prefix) = value.get(..6)
            && prefix.eq_ignore_ascii_case("option")
        {
            value = value[6..].trim_start();
        }
        let value = value
            .trim_start_matches('(')
            .trim_end_matches([')', '.'])
            .trim();
        value.parse().ok()
    }
}

impl FromStr for OptionLabel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(ModelError::InvalidOptionLabel(s.to_string())),
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated row handed over by a loader.
#[derive(Debug, Clone, Default)]
pub struct NewQuizItem {
    pub partition: String,
    pub year: i32,
    pub subject: Option<String>,
    pub broad_topic: Option<String>,
    pub question_text: Option<String>,
    pub options: BTreeMap<OptionLabel, String>,
    pub answer: String,
}

/// One corpus row. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizItem {
    id: ItemId,
    partition: String,
    year: i32,
    subject: Option<String>,
    broad_topic: Option<String>,
    question_text: Option<String>,
    options: BTreeMap<OptionLabel, String>,
    answer: OptionLabel,
}

impl QuizItem {
    /// Validates a loader row.
    ///
    /// Text fields are trimmed and empty values become missing. The answer
    /// must name one of the options that is actually present.
    pub fn new(id: ItemId, draft: NewQuizItem) -> Result<Self> {
        let NewQuizItem {
            partition,
            year,
            subject,
            broad_topic,
            question_text,
            options,
            answer,
        } = draft;

        let answer_raw = answer.trim();
        if answer_raw.is_empty() {
            return Err(ModelError::EmptyAnswer);
        }
        let answer = OptionLabel::parse_answer(answer_raw)
            .ok_or_else(|| ModelError::InvalidAnswer(answer_raw.to_string()))?;

        let options: BTreeMap<OptionLabel, String> = options
            .into_iter()
            .filter_map(|(label, text)| non_empty(Some(text)).map(|text| (label, text)))
            .collect();
        if !options.contains_key(&answer) {
            return Err(ModelError::AnswerNotAnOption(answer));
        }

        Ok(Self {
            id,
            partition: partition.trim().to_string(),
            year,
            subject: non_empty(subject),
            broad_topic: non_empty(broad_topic),
            question_text: non_empty(question_text),
            options,
            answer,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn broad_topic(&self) -> Option<&str> {
        self.broad_topic.as_deref()
    }

    pub fn question_text(&self) -> Option<&str> {
        self.question_text.as_deref()
    }

    pub fn option(&self, label: OptionLabel) -> Option<&str> {
        self.options.get(&label).map(String::as_str)
    }

    /// Present options in label order.
    pub fn options(&self) -> impl Iterator<Item = (OptionLabel, &str)> {
        self.options
            .iter()
            .map(|(label, text)| (*label, text.as_str()))
    }

    pub fn answer(&self) -> OptionLabel {
        self.answer
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(answer: &str) -> NewQuizItem {
        let mut options = BTreeMap::new();
        options.insert(OptionLabel::A, "Lok Sabha".to_string());
        options.insert(OptionLabel::B, "Rajya Sabha".to_string());
        options.insert(OptionLabel::C, "   ".to_string());
        NewQuizItem {
            partition: "Polity".to_string(),
            year: 2020,
            subject: Some(" Polity ".to_string()),
            broad_topic: Some("Parliament".to_string()),
            question_text: Some("Which house is permanent?".to_string()),
            options,
            answer: answer.to_string(),
        }
    }

    #[test]
    fn parse_answer_accepts_common_forms() {
        assert_eq!(OptionLabel::parse_answer("b"), Some(OptionLabel::B));
        assert_eq!(OptionLabel::parse_answer(" (c) "), Some(OptionLabel::C));
        assert_eq!(OptionLabel::parse_answer("d)"), Some(OptionLabel::D));
        assert_eq!(OptionLabel::parse_answer("Option A"), Some(OptionLabel::A));
        assert_eq!(OptionLabel::parse_answer("E"), None);
        assert_eq!(OptionLabel::parse_answer("AB"), None);
    }

    #[test]
    fn new_item_normalizes_text() {
        let item = QuizItem::new(ItemId::new(0), draft("b")).unwrap();
        assert_eq!(item.subject(), Some("Polity"));
        assert_eq!(item.answer(), OptionLabel::B);
        // Blank option C is treated as absent.
        assert_eq!(item.option(OptionLabel::C), None);
        assert_eq!(item.options().count(), 2);
    }

    #[test]
    fn new_item_rejects_empty_answer() {
        let err = QuizItem::new(ItemId::new(0), draft("  ")).unwrap_err();
        assert!(matches!(err, ModelError::EmptyAnswer));
    }

    #[test]
    fn new_item_rejects_answer_for_missing_option() {
        let err = QuizItem::new(ItemId::new(0), draft("C")).unwrap_err();
        assert!(matches!(err, ModelError::AnswerNotAnOption(OptionLabel::C)));
    }

    #[test]
    fn new_item_rejects_non_label_answer() {
        let err = QuizItem::new(ItemId::new(0), draft("Both")).unwrap_err();
        assert_eq!(err.to_string(), "answer 'Both' is not an option label (expected A-D)");
    }
}
