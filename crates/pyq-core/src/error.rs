use pyq_model::ItemId;
use thiserror::Error;

use crate::registry::TopicCode;

/// Failure to decode a navigation token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Wrong shape, unknown prefix, or a field of the wrong type.
    #[error("malformed navigation token '{token}': {reason}")]
    Malformed { token: String, reason: String },
    /// Topic code absent from the current registry.
    #[error("navigation token references unknown topic code {code}")]
    UnknownTopic { code: TopicCode },
}

impl TokenError {
    pub(crate) fn malformed(token: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure to resolve an interaction into a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowseError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("question {id} is not in the current corpus")]
    UnknownItem { id: ItemId },
    /// Reveal control built from a catalog revision that has been replaced.
    #[error("answer control for question {id} is from an older corpus (revision {revision}); reopen the question")]
    StaleReveal { id: ItemId, revision: String },
}

pub type Result<T> = std::result::Result<T, BrowseError>;
