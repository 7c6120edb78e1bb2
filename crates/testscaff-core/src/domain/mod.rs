//! Core domain layer for Testscaff.
//!
//! This module contains pure business logic with ZERO I/O.
//! All filesystem, templating, and rendering concerns are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Short-lived values**: Every entity is owned by a single command
//!   execution; only the injected Store persists anything

pub mod class_reference;
pub mod context;
pub mod error;
pub mod layout;
pub mod request;
pub mod setup;

// Re-exports for convenience
pub use class_reference::{ClassReference, METHOD_SEPARATOR, MethodName};
pub use context::{ContextValue, TemplateContext};
pub use error::DomainError;
pub use layout::ProjectLayout;
pub use request::{GenerationRequest, TemplateKind, TestKind};
pub use setup::{ConstructorParam, SetupFragment};
