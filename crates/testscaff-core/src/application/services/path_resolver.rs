//! Path resolution: namespace prefix → parallel directory prefixes.
//!
//! The transformation is a pure string substitution: the base-namespace
//! prefix of a class path is replaced, independently per target kind, by a
//! fixed directory prefix, while the remaining namespace segments and the
//! class name are preserved as a relative sub-path. No I/O, no failure modes.
//!
//! Classes outside the base namespace are passed through unmodified — the
//! original tooling made the same assumption and this resolver does not
//! validate it.

use std::path::{Path, PathBuf};

use crate::domain::{ClassReference, MethodName, ProjectLayout};

/// Every path derived from one class reference.
///
/// `source_path` is a file; the three test paths are class-level directories
/// that per-method test files are placed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub source_path: PathBuf,
    pub unit_dir: PathBuf,
    pub integration_dir: PathBuf,
    pub fixture_dir: PathBuf,
}

/// Maps namespace-qualified class names to source and test locations.
#[derive(Debug, Clone)]
pub struct PathResolver {
    layout: ProjectLayout,
    base: Vec<String>,
}

impl PathResolver {
    pub fn new(layout: ProjectLayout) -> Self {
        let base = layout.base_segments();
        Self { layout, base }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Resolve a class to its source file and parallel test directories.
    pub fn resolve(&self, class: &ClassReference) -> ResolvedPaths {
        let mut source_path = self.rebase(class, &self.layout.source_prefix);
        source_path.set_extension(&self.layout.extension);

        ResolvedPaths {
            source_path,
            unit_dir: self.rebase(class, &self.layout.unit_prefix),
            integration_dir: self.rebase(class, &self.layout.integration_prefix),
            fixture_dir: self.rebase(class, &self.layout.fixture_prefix),
        }
    }

    /// Target file for one method inside a resolved class directory.
    pub fn test_file(&self, class_dir: &Path, method: &MethodName) -> PathBuf {
        class_dir.join(format!("{}.{}", method.file_stem(), self.layout.extension))
    }

    /// Replace the base-namespace prefix with `prefix`; pass the class path
    /// through untouched when it does not live under the base namespace.
    fn rebase(&self, class: &ClassReference, prefix: &str) -> PathBuf {
        if class.is_under(&self.base) {
            let mut path = PathBuf::from(prefix);
            for segment in &class.segments()[self.base.len()..] {
                path.push(segment);
            }
            path
        } else {
            class.as_path()
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PathResolver {
        PathResolver::new(ProjectLayout::default())
    }

    #[test]
    fn resolves_parallel_test_directories() {
        let paths = resolver().resolve(&"App/Foo".parse().unwrap());

        assert_eq!(paths.source_path, PathBuf::from("inc/Foo.php"));
        assert_eq!(paths.unit_dir, PathBuf::from("Tests/Unit/inc/Foo"));
        assert_eq!(
            paths.integration_dir,
            PathBuf::from("Tests/Integration/inc/Foo")
        );
        assert_eq!(paths.fixture_dir, PathBuf::from("Tests/Fixtures/inc/Foo"));
    }

    #[test]
    fn preserves_nested_namespace_segments() {
        let paths = resolver().resolve(&"App/Admin/Settings".parse().unwrap());

        assert_eq!(paths.source_path, PathBuf::from("inc/Admin/Settings.php"));
        assert_eq!(paths.unit_dir, PathBuf::from("Tests/Unit/inc/Admin/Settings"));
    }

    #[test]
    fn class_outside_base_namespace_passes_through() {
        let paths = resolver().resolve(&"Vendor/Other".parse().unwrap());

        assert_eq!(paths.source_path, PathBuf::from("Vendor/Other.php"));
        assert_eq!(paths.unit_dir, PathBuf::from("Vendor/Other"));
    }

    #[test]
    fn multi_segment_base_namespace() {
        let layout = ProjectLayout {
            base_namespace: "Vendor/Plugin".into(),
            ..ProjectLayout::default()
        };
        let paths = PathResolver::new(layout).resolve(&"Vendor/Plugin/Engine/Cache".parse().unwrap());

        assert_eq!(paths.source_path, PathBuf::from("inc/Engine/Cache.php"));
        assert_eq!(paths.unit_dir, PathBuf::from("Tests/Unit/inc/Engine/Cache"));
    }

    #[test]
    fn test_file_camelizes_method_names() {
        let r = resolver();
        let dir = PathBuf::from("Tests/Unit/inc/Foo");
        let method: MethodName = "render_admin_bar".parse().unwrap();

        assert_eq!(
            r.test_file(&dir, &method),
            PathBuf::from("Tests/Unit/inc/Foo/renderAdminBar.php")
        );
    }
}
