//! Question cards: what a user sees for one item before revealing it.

use pyq_model::{ItemId, OptionLabel, QuizItem};

use crate::token::NavState;

const RULE: &str = "━━━━━━━━━━━━━━━";
const MISSING: &str = "-";

/// Display content of one question. Deliberately has no answer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCard {
    pub item: ItemId,
    pub year: i32,
    pub subject: String,
    pub topic: String,
    pub question: String,
    pub options: Vec<(OptionLabel, String)>,
    /// Token of the control that reveals this card's answer.
    pub reveal_token: String,
}

impl QuestionCard {
    /// Card for `item`, whose reveal control is bound to catalog `revision`.
    pub fn from_item(item: &QuizItem, revision: &str) -> Self {
        Self {
            item: item.id(),
            year: item.year(),
            subject: item.subject().unwrap_or(MISSING).to_string(),
            topic: item.broad_topic().unwrap_or(MISSING).to_string(),
            question: item.question_text().unwrap_or_default().to_string(),
            options: item
                .options()
                .map(|(label, text)| (label, text.to_string()))
                .collect(),
            reveal_token: NavState::Reveal {
                item: item.id(),
                revision: revision.to_string(),
            }
            .encode(),
        }
    }

    /// Plain-text body: header line, topic, rule, question, then options.
    pub fn render_text(&self, exam_label: &str) -> String {
        let mut out = format!(
            "{exam_label} {} | {}\n{}\n{RULE}\n\n{}",
            self.year, self.subject, self.topic, self.question
        );
        for (label, text) in &self.options {
            out.push_str(&format!("\n\n{label}) {text}"));
        }
        out
    }
}
