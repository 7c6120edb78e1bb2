//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `testscaff-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `Store`: file read/write/exists over a rooted tree
//!   - `Renderer`: template rendering
//!   - `ConstructorInspector`: ordered constructor dependency lists
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ConstructorInspector, Renderer, Store};
