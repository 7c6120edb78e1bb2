//! Domain layer errors.

use thiserror::Error;

/// Errors raised by domain value types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A class reference string could not be parsed.
    #[error("invalid class reference '{reference}': {reason}")]
    InvalidReference { reference: String, reason: String },

    /// A method name is not a valid identifier.
    #[error("invalid method name '{name}': {reason}")]
    InvalidMethodName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidReference { reference, .. } => vec![
                format!("Could not parse '{}'", reference),
                "References look like Namespace/Class or Namespace/Class::method".into(),
            ],
            Self::InvalidMethodName { name, .. } => vec![
                format!("'{}' is not a valid method name", name),
                "Method names contain only letters, digits, and underscores".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidReference { .. } | Self::InvalidMethodName { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
