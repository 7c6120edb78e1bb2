//! Infrastructure adapters for Testscaff.
//!
//! This crate implements the ports defined in
//! `testscaff-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod inspector;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalStore, MemoryStore};
pub use inspector::LexicalInspector;
pub use renderer::SimpleRenderer;
