//! Namespace-qualified class references and method names.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity, no I/O.
//! A [`ClassReference`] is the `/`-separated form used on the command line
//! (`App/Admin/Settings`); [`ClassReference::fullname`] renders the
//! `\`-separated form that appears in generated `use` statements.
//!
//! Invariant: a reference round-trips losslessly between its string form and
//! its segment form (`parse` then `Display` is the identity).

use crate::domain::error::DomainError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Separator between a class reference and a method name on the CLI.
pub const METHOD_SEPARATOR: &str = "::";

/// Separator between namespace segments in the CLI string form.
pub const SEGMENT_SEPARATOR: char = '/';

// ── ClassReference ────────────────────────────────────────────────────────────

/// A namespace-qualified class identifier.
///
/// Ordered namespace segments plus a simple class name, e.g.
/// `App/Admin/Settings` is `["App", "Admin"]` + `"Settings"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassReference {
    namespace: Vec<String>,
    name: String,
}

impl ClassReference {
    /// Namespace segments, outermost first (excludes the class name).
    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    /// The simple class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All segments including the class name, outermost first.
    pub fn segments(&self) -> Vec<&str> {
        self.namespace
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
            .collect()
    }

    /// The `\`-separated form used in generated import statements
    /// (`App\Admin\Settings`).
    pub fn fullname(&self) -> String {
        self.segments().join("\\")
    }

    /// The reference as a relative directory path (`App/Admin/Settings`).
    pub fn as_path(&self) -> PathBuf {
        self.segments().iter().collect()
    }

    /// Whether this class lives under the given namespace prefix.
    pub fn is_under(&self, prefix: &[String]) -> bool {
        self.namespace.len() >= prefix.len() && self.namespace[..prefix.len()] == *prefix
    }
}

impl FromStr for ClassReference {
    type Err = DomainError;

    /// Parse the `/`-separated string form. Backslashes are accepted as an
    /// alternative separator so pasted fully-qualified names work too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('\\', "/");
        let mut segments: Vec<String> = normalized
            .trim_matches(SEGMENT_SEPARATOR)
            .split(SEGMENT_SEPARATOR)
            .map(str::to_owned)
            .collect();

        // trim_matches on an empty input leaves one empty segment
        if segments.len() == 1 && segments[0].is_empty() {
            return Err(DomainError::InvalidReference {
                reference: s.into(),
                reason: "reference is empty".into(),
            });
        }

        if segments.iter().any(String::is_empty) {
            return Err(DomainError::InvalidReference {
                reference: s.into(),
                reason: "empty namespace segment".into(),
            });
        }

        let name = segments.pop().expect("at least one segment");
        Ok(Self {
            namespace: segments,
            name,
        })
    }
}

impl fmt::Display for ClassReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join("/"))
    }
}

// ── MethodName ────────────────────────────────────────────────────────────────

/// A validated method identifier.
///
/// Discovery never yields magic methods (the reserved `__` prefix); an
/// explicitly given magic name is still representable so the caller decides.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodName(String);

impl MethodName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Magic methods carry the reserved double-underscore prefix.
    pub fn is_magic(&self) -> bool {
        self.0.starts_with("__")
    }

    /// File stem for the generated test file: snake_case becomes
    /// lowerCamelCase (`render_admin_bar` → `renderAdminBar`).
    pub fn file_stem(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut capitalize = false;
        for ch in self.0.chars() {
            if ch == '_' {
                capitalize = true;
            } else if capitalize {
                out.extend(ch.to_uppercase());
                capitalize = false;
            } else {
                out.push(ch);
            }
        }
        out
    }
}

impl FromStr for MethodName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid_start || !valid_rest {
            return Err(DomainError::InvalidMethodName {
                name: s.into(),
                reason: "not a valid identifier".into(),
            });
        }
        Ok(Self(s.into()))
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
