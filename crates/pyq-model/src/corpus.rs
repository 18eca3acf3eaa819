use crate::error::{ModelError, Result};
use crate::item::{ItemId, NewQuizItem, QuizItem};

/// The loaded question table, in load order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    items: Vec<QuizItem>,
    fingerprint: Option<String>,
}

impl Corpus {
    /// Validates every row and assigns ids in order.
    pub fn from_items<I>(drafts: I) -> Result<Self>
    where
        I: IntoIterator<Item = NewQuizItem>,
    {
        let mut corpus = Self::default();
        for draft in drafts {
            corpus.push(draft).map_err(|source| ModelError::InvalidItem {
                id: ItemId::new(corpus.len()),
                source: Box::new(source),
            })?;
        }
        Ok(corpus)
    }

    /// Validates one row and appends it under the next id.
    pub fn push(&mut self, draft: NewQuizItem) -> Result<ItemId> {
        let id = ItemId::new(self.items.len());
        self.items.push(QuizItem::new(id, draft)?);
        Ok(id)
    }

    /// Attaches a content hash of the source data.
    #[must_use]
    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&QuizItem> {
        self.items.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuizItem> {
        self.items.iter()
    }

    /// Distinct partition names in load order.
    pub fn partitions(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.partition()) {
                seen.push(item.partition());
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a QuizItem;
    type IntoIter = std::slice::Iter<'a, QuizItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
