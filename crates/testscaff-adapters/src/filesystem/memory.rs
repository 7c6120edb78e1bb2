//! In-memory store adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use testscaff_core::application::ports::Store;

/// In-memory store for testing.
///
/// Cloning shares the underlying map, so a test can keep a handle for
/// inspection while the service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper, panics on poisoned lock).
    pub fn seed(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.inner
            .write()
            .unwrap()
            .insert(path.into(), content.into());
    }

    /// Read a file's content without going through the port.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().ok()?.get(path).cloned()
    }

    /// List all file paths.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self.inner.read().unwrap().keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of stored files.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        self.inner.write().unwrap().clear();
    }
}

impl Store for MemoryStore {
    fn read(&self, path: &Path) -> testscaff_core::error::ScaffResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| lock_error(path))?;

        inner.get(path).cloned().ok_or_else(|| {
            testscaff_core::application::ApplicationError::StoreError {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            }
            .into()
        })
    }

    fn write(&self, path: &Path, content: &str) -> testscaff_core::error::ScaffResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| lock_error(path))?;

        inner.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains_key(path))
            .unwrap_or(false)
    }
}

fn lock_error(path: &Path) -> testscaff_core::error::ScaffError {
    testscaff_core::application::ApplicationError::StoreError {
        path: path.to_path_buf(),
        reason: "store lock poisoned".into(),
    }
    .into()
}
