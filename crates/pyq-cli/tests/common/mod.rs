use std::collections::BTreeMap;

use pyq_core::Catalog;
use pyq_model::{Corpus, NewQuizItem, OptionLabel};

pub fn item(
    year: i32,
    subject: &str,
    topic: &str,
    question: &str,
    options: &[(OptionLabel, &str)],
    answer: &str,
) -> NewQuizItem {
    NewQuizItem {
        partition: subject.to_string(),
        year,
        subject: Some(subject.to_string()),
        broad_topic: Some(topic.to_string()),
        question_text: Some(question.to_string()),
        options: options
            .iter()
            .map(|(label, text)| (*label, (*text).to_string()))
            .collect::<BTreeMap<_, _>>(),
        answer: answer.to_string(),
    }
}

pub fn catalog() -> Catalog {
    let corpus = Corpus::from_items([
        item(
            2020,
            "Polity",
            "Parliament",
            "Who presides over a joint sitting?",
            &[(OptionLabel::A, "President"), (OptionLabel::B, "Speaker")],
            "B",
        ),
        item(
            2020,
            "Polity",
            "Parliament",
            "Money bills originate in?",
            &[(OptionLabel::A, "Lok Sabha"), (OptionLabel::B, "Rajya Sabha")],
            "A",
        ),
        item(
            2019,
            "Economy",
            "Banking",
            "Who sets the repo rate?",
            &[
                (OptionLabel::A, "RBI"),
                (OptionLabel::B, "SEBI"),
                (OptionLabel::C, "NITI Aayog"),
            ],
            "A",
        ),
    ])
    .expect("valid fixture corpus");
    Catalog::new(corpus)
}
