//! Local file store using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use testscaff_core::{application::ports::Store, error::ScaffResult};

/// Production store implementation over a rooted directory tree.
///
/// All paths handed to the port are resolved relative to the root; `write`
/// creates missing parent directories.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Store for LocalStore {
    fn read(&self, path: &Path) -> ScaffResult<String> {
        std::fs::read_to_string(self.full(path)).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write(&self, path: &Path, content: &str) -> ScaffResult<()> {
        let full = self.full(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| map_io_error(path, e, "create directory"))?;
        }
        std::fs::write(full, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.full(path).exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> testscaff_core::error::ScaffError {
    use testscaff_core::application::ApplicationError;

    ApplicationError::StoreError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
