//! Idempotent rendering and writing of one generated file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::ports::{Renderer, Store};
use crate::domain::TemplateContext;
use crate::error::ScaffResult;

/// Renders a template and writes the result through the Store.
///
/// Generation is a no-op once the target file exists: repeated runs never
/// clobber a previously generated (possibly hand-edited) file. Callers
/// distinguish "created" from "already present" by the `Option` result.
pub struct ClassGenerator {
    store: Arc<dyn Store>,
    renderer: Arc<dyn Renderer>,
}

impl ClassGenerator {
    pub fn new(store: Arc<dyn Store>, renderer: Arc<dyn Renderer>) -> Self {
        Self { store, renderer }
    }

    /// Render `template_id` with `context` into `target_path`.
    ///
    /// Returns `Ok(None)` without rendering or writing when `skip_if_exists`
    /// is set and a file is already present at the target.
    #[instrument(skip_all, fields(template = template_id, target = %target_path.display()))]
    pub fn generate(
        &self,
        template_id: &str,
        target_path: &Path,
        context: &TemplateContext,
        skip_if_exists: bool,
    ) -> ScaffResult<Option<PathBuf>> {
        if skip_if_exists && self.store.exists(target_path) {
            debug!("target exists, skipping");
            return Ok(None);
        }

        let content = self.renderer.render(template_id, context)?;
        self.store.write(target_path, &content)?;

        debug!("file written");
        Ok(Some(target_path.to_path_buf()))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
