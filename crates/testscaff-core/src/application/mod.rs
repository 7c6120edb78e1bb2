//! Application layer: services, ports, and orchestration errors.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{GenerateService, Outcome};
