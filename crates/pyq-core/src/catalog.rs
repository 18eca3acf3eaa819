//! Immutable corpus snapshots and their process-wide handle.

use std::sync::{Arc, PoisonError, RwLock};

use pyq_model::Corpus;
use sha2::{Digest, Sha256};

use crate::registry::TopicRegistry;
use crate::token::REVISION_CHARS;

/// A corpus together with the topic registry built from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    corpus: Corpus,
    registry: TopicRegistry,
    revision: String,
}

impl Catalog {
    pub fn new(corpus: Corpus) -> Self {
        let registry = TopicRegistry::build(&corpus);
        let revision = content_revision(&corpus);
        tracing::debug!(
            items = corpus.len(),
            topics = registry.len(),
            revision = %revision,
            "Built catalog"
        );
        Self {
            corpus,
            registry,
            revision,
        }
    }

    /// Short content hash of the corpus.
    ///
    /// Equal item sequences give equal revisions, so reloading unchanged data
    /// keeps outstanding reveal controls valid.
    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn registry(&self) -> &TopicRegistry {
        &self.registry
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Corpus::default())
    }
}

/// First [`REVISION_CHARS`] hex digits of a SHA-256 over every item's
/// content, in corpus order.
fn content_revision(corpus: &Corpus) -> String {
    let mut hasher = Sha256::new();
    for item in corpus {
        hasher.update(item.year().to_le_bytes());
        for field in [
            Some(item.partition()),
            item.subject(),
            item.broad_topic(),
            item.question_text(),
        ] {
            hasher.update(field.unwrap_or_default());
            hasher.update([0u8]);
        }
        for (label, text) in item.options() {
            hasher.update(label.as_str());
            hasher.update(text);
            hasher.update([0u8]);
        }
        hasher.update(item.answer().as_str());
        hasher.update([0xffu8]);
    }
    let mut revision = hex::encode(hasher.finalize());
    revision.truncate(REVISION_CHARS);
    revision
}

/// Shared handle to the current catalog.
///
/// Readers take an `Arc` snapshot and keep using it for the whole request.
/// [`SharedCatalog::replace`] publishes a fully built catalog in one store,
/// so no reader observes a half-updated corpus or registry.
#[derive(Debug)]
pub struct SharedCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swaps in `catalog` and returns the previous snapshot.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        tracing::info!(
            items = guard.corpus().len(),
            topics = guard.registry().len(),
            revision = guard.revision(),
            fingerprint = guard.corpus().fingerprint().unwrap_or("none"),
            "Published new catalog snapshot"
        );
        previous
    }
}
