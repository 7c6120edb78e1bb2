//! Template substitution context.
//!
//! A **Value Object** containing the data handed to the renderer for one
//! file. Built fresh per file; never shared between files. The placeholder
//! syntax itself is the renderer's concern — the context is just an ordered
//! name → value map.

use std::fmt;

/// A substitution value: templates only ever see strings and booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    Str(String),
    Bool(bool),
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Ordered variable map for one template render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    entries: Vec<(String, ContextValue)>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string variable. Transformations return `self` so contexts read
    /// as a builder chain.
    pub fn with_str(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .push((name.into(), ContextValue::Str(value.into())));
        self
    }

    /// Add a boolean variable.
    pub fn with_bool(mut self, name: impl Into<String>, value: bool) -> Self {
        self.entries.push((name.into(), ContextValue::Bool(value)));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ContextValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Boolean value of a variable; `Str` values are never truthy.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(ContextValue::Bool(true)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}
