//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A Store read/write failed. Store failures are fatal — there are no
    /// retries; all operations are local and synchronous.
    #[error("Store error at {path}: {reason}")]
    StoreError { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("Rendering '{template}' failed: {reason}")]
    RenderFailed { template: String, reason: String },

    /// A rendered unit-test skeleton lacks an insertion anchor the setup
    /// merger requires.
    #[error("Setup anchor '{anchor}' not found in rendered test")]
    AnchorMissing { anchor: &'static str },

    /// The constructor inspector could not process a source file.
    #[error("Inspection of {path} failed: {reason}")]
    InspectionFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StoreError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the project directory is correct".into(),
            ],
            Self::RenderFailed { template, .. } => vec![
                format!("Template '{}' could not be rendered", template),
                "Check your template directory for a broken override".into(),
            ],
            Self::AnchorMissing { anchor } => vec![
                format!("The unit test template has no '{}' line", anchor),
                "Custom unit templates must keep the import and set_up anchors".into(),
            ],
            Self::InspectionFailed { path, .. } => vec![
                format!("Could not read constructor of: {}", path.display()),
                "Check the class file for syntax problems".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StoreError { .. } | Self::InspectionFailed { .. } => ErrorCategory::Internal,
            Self::RenderFailed { .. } => ErrorCategory::NotFound,
            Self::AnchorMissing { .. } => ErrorCategory::Configuration,
        }
    }
}
