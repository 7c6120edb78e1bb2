//! Testscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Testscaff
//! test scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         testscaff-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerateService, MethodDiscoverer,    │
//! │   ClassGenerator, SetupMerger, ...)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Store, Renderer, Inspector)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    testscaff-adapters (Infrastructure)  │
//! │  (LocalStore, MemoryStore, SimpleRenderer)
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (ClassReference, MethodName, Layout)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use testscaff_core::{
//!     application::GenerateService,
//!     domain::{ProjectLayout, TestKind},
//! };
//!
//! // 1. Build the service with injected adapters
//! let service = GenerateService::new(store, renderer, inspector, ProjectLayout::default());
//!
//! // 2. Generate tests for every public method of a class
//! let outcomes = service.run("App/Payment::charge", TestKind::Both, None).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, Outcome,
        ports::{ConstructorInspector, Renderer, Store},
        services::{ClassGenerator, MethodDiscoverer, PathResolver, SetupMerger},
    };
    pub use crate::domain::{
        ClassReference, ConstructorParam, GenerationRequest, MethodName, ProjectLayout,
        SetupFragment, TemplateContext, TemplateKind, TestKind,
    };
    pub use crate::error::{ScaffError, ScaffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
