//! Feedback store: append-only documents in an embedded sled database.
//!
//! Each submission becomes one JSON document `{"feedback": "..."}` stored
//! under a monotonically increasing key, so iteration order is insertion
//! order. Entries are never updated or deleted, and no HTTP endpoint reads
//! them back; `entries` exists for operators and tests.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One stored feedback document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Free-text feedback exactly as submitted; empty strings are accepted.
    pub feedback: String,
}

/// Append-only feedback collection.
///
/// The database is opened once at process start and shared for the process
/// lifetime; open or insert failures propagate to the caller.
#[derive(Debug)]
pub struct FeedbackStore {
    db: sled::Db,
    tree: sled::Tree,
}

impl FeedbackStore {
    /// Opens (or creates) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = sled::open(path)?;
        let tree = db.open_tree("feedback")?;
        Ok(Self { db, tree })
    }

    /// Appends one feedback document and flushes it to disk.
    pub fn insert(&self, feedback: &str) -> Result<()> {
        let entry = FeedbackEntry {
            feedback: feedback.to_string(),
        };
        let key = self.db.generate_id()?.to_be_bytes();
        let value = serde_json::to_vec(&entry)?;
        self.tree.insert(key, value)?;
        self.tree.flush()?;
        tracing::debug!(len = feedback.len(), "stored feedback entry");
        Ok(())
    }

    /// All stored documents in insertion order.
    pub fn entries(&self) -> Result<Vec<FeedbackEntry>> {
        let mut entries = Vec::new();
        for item in self.tree.iter() {
            let (_, value) = item?;
            entries.push(serde_json::from_slice(&value)?);
        }
        Ok(entries)
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if no feedback has been stored.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
