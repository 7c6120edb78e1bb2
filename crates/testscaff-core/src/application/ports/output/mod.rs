//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `testscaff-adapters` crate provides implementations.

use crate::domain::{ConstructorParam, TemplateContext};
use crate::error::ScaffResult;
use std::path::Path;

/// Port for file storage over a rooted tree.
///
/// Implemented by:
/// - `testscaff_adapters::filesystem::LocalStore` (production)
/// - `testscaff_adapters::filesystem::MemoryStore` (testing)
///
/// ## Design Notes
///
/// - All paths are relative to the store root
/// - `write` creates missing parent directories
/// - The store is the only persistent state in the system
pub trait Store: Send + Sync {
    /// Read a file's full content.
    fn read(&self, path: &Path) -> ScaffResult<String>;

    /// Write content to a file, replacing any existing content.
    fn write(&self, path: &Path, content: &str) -> ScaffResult<()>;

    /// Check if a file exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `testscaff_adapters::renderer::SimpleRenderer` (variable substitution
///   with built-in template fallback)
///
/// The placeholder syntax is entirely the adapter's concern; the core only
/// hands over a template identifier and a [`TemplateContext`].
pub trait Renderer: Send + Sync {
    /// Render the template identified by `template_id` with `context`.
    fn render(&self, template_id: &str, context: &TemplateContext) -> ScaffResult<String>;
}

/// Port for discovering a class's ordered constructor dependency list.
///
/// Implemented by:
/// - `testscaff_adapters::inspector::LexicalInspector` (best-effort source
///   scan)
///
/// Deriving the list is outside the core's scope; the setup merger only
/// relies on the declared order being preserved. A missing source file is
/// reported as an empty list, not an error.
pub trait ConstructorInspector: Send + Sync {
    /// Constructor parameters of the class at `source_path`, declared order.
    fn params(&self, source_path: &Path) -> ScaffResult<Vec<ConstructorParam>>;
}
