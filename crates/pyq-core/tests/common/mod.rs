//! Shared fixtures for pyq-core integration tests.

use std::collections::BTreeMap;

use pyq_model::{Corpus, NewQuizItem, OptionLabel};

pub struct Row<'a> {
    pub year: i32,
    pub subject: &'a str,
    pub topic: Option<&'a str>,
    pub question: &'a str,
    pub answer: &'a str,
}

pub fn row<'a>(year: i32, subject: &'a str, topic: &'a str, question: &'a str) -> Row<'a> {
    Row {
        year,
        subject,
        topic: Some(topic),
        question,
        answer: "A",
    }
}

pub fn corpus(rows: &[Row<'_>]) -> Corpus {
    Corpus::from_items(rows.iter().map(|row| {
        let mut options = BTreeMap::new();
        options.insert(OptionLabel::A, "First".to_string());
        options.insert(OptionLabel::B, "Second".to_string());
        NewQuizItem {
            partition: row.subject.to_string(),
            year: row.year,
            subject: Some(row.subject.to_string()),
            broad_topic: row.topic.map(str::to_string),
            question_text: Some(row.question.to_string()),
            options,
            answer: row.answer.to_string(),
        }
    }))
    .expect("valid fixture corpus")
}

/// Small corpus resembling a real question bank.
#[allow(dead_code)]
pub fn sample() -> Corpus {
    corpus(&[
        row(2020, "Polity", "Polity", "Which article abolishes untouchability?"),
        row(2021, "Economy", "Taxation Policy", "GST replaced which levy?"),
        row(2020, "Polity", "Polity", "Who appoints the CAG?"),
        row(2019, "Polity", "Polity", "Which house is permanent?"),
        row(2020, "Polity", "Polity", "Money bills originate in?"),
        row(2020, "Economy", "Banking", "Who sets the repo rate?"),
        row(2020, "Polity", "Polity", "Fundamental duties were added by?"),
        Row {
            year: 2018,
            subject: "Geography",
            topic: None,
            question: "Which river is called the sorrow of Bihar?",
            answer: "B",
        },
    ])
}
