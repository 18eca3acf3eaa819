//! Data model for the PYQ question browser.
//!
//! Loaders build [`NewQuizItem`] rows and hand them to [`Corpus::from_items`],
//! which validates each row into an immutable [`QuizItem`]. Every item that
//! reaches the browsing core has an integer year and an answer naming one of
//! its present options.

pub mod corpus;
pub mod error;
pub mod item;

pub use corpus::Corpus;
pub use error::{ModelError, Result};
pub use item::{ItemId, NewQuizItem, OptionLabel, QuizItem};
