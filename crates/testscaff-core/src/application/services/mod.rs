//! Application services.
//!
//! Each service covers one stage of the generation pipeline; the
//! [`GenerateService`] orchestrator wires them together per invocation.

mod class_generator;
mod generate_service;
mod method_discovery;
mod path_resolver;
mod setup_merger;

pub use class_generator::ClassGenerator;
pub use generate_service::{GenerateService, Outcome};
pub use method_discovery::MethodDiscoverer;
pub use path_resolver::{PathResolver, ResolvedPaths};
pub use setup_merger::SetupMerger;
