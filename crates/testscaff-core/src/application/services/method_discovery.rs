//! Lexical discovery of a class's public methods.
//!
//! This is deliberately a textual scan, not a parse: it matches the token
//! sequence `public function <identifier>(` (whitespace-tolerant, including
//! across line breaks) over the raw source, returning captures in declaration
//! order. Known, accepted limitations: it has no comment or string-literal
//! awareness, so a signature embedded in a comment is a false positive.
//! Upgrading it to a parser would change that failure profile and is out of
//! scope by design.

use std::path::Path;
use std::sync::Arc;

use regex::Regex;
use tracing::{debug, instrument};

use crate::application::ports::Store;
use crate::application::services::PathResolver;
use crate::domain::{ClassReference, MethodName};
use crate::error::ScaffResult;

/// Scans class sources for public, non-magic method names.
pub struct MethodDiscoverer {
    store: Arc<dyn Store>,
    resolver: PathResolver,
    pattern: Regex,
}

impl MethodDiscoverer {
    pub fn new(store: Arc<dyn Store>, resolver: PathResolver) -> Self {
        // Static pattern, known valid.
        let pattern =
            Regex::new(r"public\s+function\s*(?P<name>\w+)\s*\(").expect("method pattern");
        Self {
            store,
            resolver,
            pattern,
        }
    }

    /// Ordered public method names of `class`; empty if the class file does
    /// not exist or nothing matches. Duplicates at distinct positions are
    /// preserved; magic (`__`-prefixed) methods are filtered out.
    #[instrument(skip_all, fields(class = %class))]
    pub fn discover(&self, class: &ClassReference) -> ScaffResult<Vec<MethodName>> {
        let source = self.resolver.resolve(class).source_path;
        if !self.store.exists(&source) {
            debug!(path = %source.display(), "class file not found");
            return Ok(Vec::new());
        }

        let content = self.store.read(&source)?;
        let methods: Vec<MethodName> = self
            .pattern
            .captures_iter(&content)
            .filter_map(|caps| caps["name"].parse::<MethodName>().ok())
            .filter(|name| !name.is_magic())
            .collect();

        debug!(count = methods.len(), "methods discovered");
        Ok(methods)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectLayout;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::RwLock;

    /// Minimal in-memory store for discovery tests.
    struct FakeStore {
        files: RwLock<HashMap<PathBuf, String>>,
    }

    impl FakeStore {
        fn with(path: &str, content: &str) -> Arc<Self> {
            let mut files = HashMap::new();
            files.insert(PathBuf::from(path), content.to_string());
            Arc::new(Self {
                files: RwLock::new(files),
            })
        }

        fn empty() -> Arc<Self> {
            Arc::new(Self {
                files: RwLock::new(HashMap::new()),
            })
        }
    }

    impl Store for FakeStore {
        fn read(&self, path: &Path) -> ScaffResult<String> {
            Ok(self.files.read().unwrap()[path].clone())
        }

        fn write(&self, path: &Path, content: &str) -> ScaffResult<()> {
            self.files
                .write()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.read().unwrap().contains_key(path)
        }
    }

    fn discoverer(store: Arc<FakeStore>) -> MethodDiscoverer {
        MethodDiscoverer::new(store, PathResolver::new(ProjectLayout::default()))
    }

    fn names(methods: &[MethodName]) -> Vec<&str> {
        methods.iter().map(MethodName::as_str).collect()
    }

    #[test]
    fn missing_class_yields_empty_list() {
        let d = discoverer(FakeStore::empty());
        let methods = d.discover(&"App/Ghost".parse().unwrap()).unwrap();
        assert!(methods.is_empty());
    }

    #[test]
    fn finds_methods_in_declaration_order() {
        let src = r#"<?php
class Foo {
    public function beta() {}
    public function alpha() {}
    private function hidden() {}
}
"#;
        let d = discoverer(FakeStore::with("inc/Foo.php", src));
        let methods = d.discover(&"App/Foo".parse().unwrap()).unwrap();
        assert_eq!(names(&methods), ["beta", "alpha"]);
    }

    #[test]
    fn magic_methods_are_filtered() {
        let src = "<?php\npublic function __construct( $a ) {}\npublic function foo() {}\n";
        let d = discoverer(FakeStore::with("inc/Foo.php", src));
        let methods = d.discover(&"App/Foo".parse().unwrap()).unwrap();
        assert_eq!(names(&methods), ["foo"]);
    }

    #[test]
    fn tolerates_whitespace_and_line_breaks() {
        let src = "<?php\npublic\nfunction\nspread_out(array $x) {}\n";
        let d = discoverer(FakeStore::with("inc/Foo.php", src));
        let methods = d.discover(&"App/Foo".parse().unwrap()).unwrap();
        assert_eq!(names(&methods), ["spread_out"]);
    }

    #[test]
    fn duplicate_declarations_are_preserved() {
        let src = "<?php\npublic function twice() {}\npublic function twice() {}\n";
        let d = discoverer(FakeStore::with("inc/Foo.php", src));
        let methods = d.discover(&"App/Foo".parse().unwrap()).unwrap();
        assert_eq!(names(&methods), ["twice", "twice"]);
    }

    #[test]
    fn non_public_functions_ignored() {
        let src = "<?php\nprotected function shield() {}\nfunction bare() {}\n";
        let d = discoverer(FakeStore::with("inc/Foo.php", src));
        let methods = d.discover(&"App/Foo".parse().unwrap()).unwrap();
        assert!(methods.is_empty());
    }
}
