use thiserror::Error;

use crate::item::{ItemId, OptionLabel};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("answer is empty")]
    EmptyAnswer,
    #[error("answer '{0}' is not an option label (expected A-D)")]
    InvalidAnswer(String),
    #[error("answer {0} does not name a present option")]
    AnswerNotAnOption(OptionLabel),
    #[error("invalid option label: '{0}'")]
    InvalidOptionLabel(String),
    #[error("invalid item {id}: {source}")]
    InvalidItem {
        id: ItemId,
        #[source]
        source: Box<ModelError>,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
