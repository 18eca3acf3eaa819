//! Answer reveal.

use std::fmt;

use pyq_model::{ItemId, QuizItem};

/// The literal answer carried by `item`.
///
/// Only call this for an explicit reveal request; rendered question content
/// never includes it.
pub fn reveal_answer(item: &QuizItem) -> String {
    item.answer().to_string()
}

/// Transient answer shown in response to a reveal control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedAnswer {
    pub item: ItemId,
    pub answer: String,
}

impl RevealedAnswer {
    pub fn for_item(item: &QuizItem) -> Self {
        Self {
            item: item.id(),
            answer: reveal_answer(item),
        }
    }
}

impl fmt::Display for RevealedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Correct Answer: {}", self.answer)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pyq_model::{Corpus, NewQuizItem, OptionLabel};

    use super::*;

    fn corpus(answers: &[&str]) -> Corpus {
        Corpus::from_items(answers.iter().map(|answer| {
            let options = OptionLabel::ALL
                .into_iter()
                .map(|label| (label, format!("choice {label}")))
                .collect::<BTreeMap<_, _>>();
            NewQuizItem {
                partition: "Polity".to_string(),
                year: 2020,
                options,
                answer: (*answer).to_string(),
                ..NewQuizItem::default()
            }
        }))
        .unwrap()
    }

    #[test]
    fn reveal_answer_returns_normalized_label() {
        let corpus = corpus(&["c", "Option D", "(a)"]);
        let answers: Vec<String> = corpus.iter().map(reveal_answer).collect();
        assert_eq!(answers, vec!["C", "D", "A"]);
    }

    #[test]
    fn revealed_answer_is_keyed_by_item() {
        let corpus = corpus(&["A", "B"]);
        let revealed = RevealedAnswer::for_item(&corpus.items()[1]);
        assert_eq!(revealed.item, ItemId::new(1));
        assert_eq!(revealed.answer, reveal_answer(&corpus.items()[1]));
        assert_eq!(revealed.to_string(), "Correct Answer: B");
    }
}
