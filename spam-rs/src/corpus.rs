//! Caller-owned training corpora
//!
//! A [`Corpus`] is a shared handle to an ordered collection of example
//! messages for one class (spam or non-spam). The caller builds both
//! corpora, hands clones of the handles to the classifier, and keeps its
//! own clones to observe growth: scoring with learning enabled appends the
//! scored message back into one of the corpora through the same handle.

use parking_lot::RwLock;
use std::sync::Arc;

/// Shared, ordered collection of example messages for one class.
///
/// Cloning a `Corpus` clones the handle, not the messages; all clones see
/// the same underlying collection. Ordering is irrelevant to the model but
/// is preserved, so the last pushed message is always the last element.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    messages: Arc<RwLock<Vec<String>>>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a corpus from an initial set of messages.
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: Arc::new(RwLock::new(
                messages.into_iter().map(Into::into).collect(),
            )),
        }
    }

    /// Append a message to the corpus.
    ///
    /// This is the mutation the classifier performs when learning is
    /// enabled; it is public so the side effect is part of the visible
    /// contract and so callers can grow a corpus between scoring calls.
    pub fn push(&self, message: impl Into<String>) {
        self.messages.write().push(message.into());
    }

    /// Number of messages in the corpus.
    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }

    /// Snapshot of the current messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.read().clone()
    }

    /// All messages joined with a separating space, for whole-corpus
    /// tokenization.
    pub(crate) fn joined(&self) -> String {
        self.messages.read().join(" ")
    }
}
