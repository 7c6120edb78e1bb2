//! Lexical constructor inspection.
//!
//! Implements the `ConstructorInspector` port with a best-effort scan of the
//! class source: find the `__construct(…)` parameter list, resolve each
//! type-hinted parameter through the file's `use` statements (falling back to
//! the file's own namespace), and report the dependencies in declared order.
//!
//! Same stance as method discovery: this is a lexical scan, not a parse.
//! Scalar and untyped parameters are skipped; default values containing
//! parentheses are beyond the pattern. A missing source file yields an empty
//! list, matching the discovery contract.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use regex::Regex;
use tracing::{debug, instrument};

use testscaff_core::{
    application::ports::{ConstructorInspector, Store},
    domain::{ClassReference, ConstructorParam},
    error::ScaffResult,
};

/// Built-in type hints that never map to a class dependency.
const SCALAR_HINTS: &[&str] = &[
    "string", "int", "float", "bool", "array", "callable", "iterable", "object", "mixed", "self",
    "static", "parent",
];

/// Scans class sources for constructor dependencies.
pub struct LexicalInspector {
    store: Arc<dyn Store>,
    namespace: Regex,
    usage: Regex,
    construct: Regex,
    param: Regex,
}

impl LexicalInspector {
    pub fn new(store: Arc<dyn Store>) -> Self {
        // Static patterns, known valid.
        Self {
            store,
            namespace: Regex::new(r"namespace\s+(?P<ns>[\w\\]+)\s*;").expect("namespace pattern"),
            usage: Regex::new(r"(?m)^\s*use\s+(?P<path>[\w\\]+)(?:\s+as\s+(?P<alias>\w+))?\s*;")
                .expect("use pattern"),
            construct: Regex::new(r"function\s+__construct\s*\((?P<params>[^)]*)\)")
                .expect("construct pattern"),
            param: Regex::new(r"(?P<type>\??[\w\\]+)\s+\$(?P<name>\w+)").expect("param pattern"),
        }
    }

    /// Map of short name / alias → fully qualified reference, from the
    /// file's `use` statements.
    fn usage_map(&self, content: &str) -> HashMap<String, ClassReference> {
        self.usage
            .captures_iter(content)
            .filter_map(|caps| {
                let reference: ClassReference = caps["path"].parse().ok()?;
                let key = caps
                    .name("alias")
                    .map(|m| m.as_str().to_owned())
                    .unwrap_or_else(|| reference.name().to_owned());
                Some((key, reference))
            })
            .collect()
    }

    /// Resolve a type hint to a class reference.
    fn resolve_type(
        &self,
        hint: &str,
        usages: &HashMap<String, ClassReference>,
        namespace: Option<&str>,
    ) -> Option<ClassReference> {
        let hint = hint.trim_start_matches('?');
        if SCALAR_HINTS.contains(&hint.to_ascii_lowercase().as_str()) {
            return None;
        }

        // Fully qualified hints resolve on their own.
        if hint.contains('\\') {
            return hint.parse().ok();
        }

        if let Some(reference) = usages.get(hint) {
            return Some(reference.clone());
        }

        // Unimported short name: same namespace as the class itself.
        match namespace {
            Some(ns) => format!("{ns}\\{hint}").parse().ok(),
            None => hint.parse().ok(),
        }
    }
}

impl ConstructorInspector for LexicalInspector {
    #[instrument(skip_all, fields(source = %source_path.display()))]
    fn params(&self, source_path: &Path) -> ScaffResult<Vec<ConstructorParam>> {
        if !self.store.exists(source_path) {
            debug!("source file not found, no dependencies");
            return Ok(Vec::new());
        }

        let content = self.store.read(source_path)?;

        let Some(signature) = self.construct.captures(&content) else {
            return Ok(Vec::new());
        };

        let namespace = self
            .namespace
            .captures(&content)
            .map(|caps| caps["ns"].to_owned());
        let usages = self.usage_map(&content);

        let params: Vec<ConstructorParam> = self
            .param
            .captures_iter(&signature["params"])
            .filter_map(|caps| {
                let type_ref =
                    self.resolve_type(&caps["type"], &usages, namespace.as_deref())?;
                Some(ConstructorParam {
                    type_ref,
                    property: caps["name"].to_owned(),
                })
            })
            .collect();

        debug!(count = params.len(), "constructor dependencies resolved");
        Ok(params)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
