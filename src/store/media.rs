//! Media store: uploaded binary files on disk, keyed by original filename.
//!
//! The store owns the flat upload directory and a lock-guarded map from
//! original filename to the path it was written to. The map is in-memory
//! only and is rebuilt empty on restart; the files themselves persist and
//! keep being served from the upload directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::Result;

/// On-disk storage for uploaded media files.
///
/// Writes go under the original filename with no collision detection: a
/// second upload of `photo.jpg` replaces the first, both on disk and in the
/// map (last write wins, including under concurrent uploads).
#[derive(Debug)]
pub struct MediaStore {
    root: PathBuf,
    entries: RwLock<HashMap<String, PathBuf>>,
}

impl MediaStore {
    /// Opens a store rooted at `root`, creating the directory if missing.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            entries: RwLock::new(HashMap::new()),
        })
    }

    /// The upload directory backing this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `bytes` under `filename` and registers the mapping.
    ///
    /// Returns the path the file was written to.
    pub fn store(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.root.join(filename);
        fs::write(&path, bytes)?;
        self.entries
            .write()
            .insert(filename.to_string(), path.clone());
        tracing::debug!(filename, size = bytes.len(), "stored media file");
        Ok(path)
    }

    /// Looks up the stored path for `filename`, if it was uploaded in this
    /// process's lifetime.
    pub fn path_of(&self, filename: &str) -> Option<PathBuf> {
        self.entries.read().get(filename).cloned()
    }

    /// Number of registered files.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing has been uploaded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
