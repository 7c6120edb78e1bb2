//! Project layout configuration.
//!
//! [`ProjectLayout`] is an explicit configuration value handed to the
//! components that need it at construction time — never ambient global state.
//! The CLI deserializes it from the `[layout]` section of `.testscaff.toml`.

use serde::{Deserialize, Serialize};

/// Where source classes live and where generated tests go.
///
/// Each target kind replaces the base-namespace prefix of a class path with
/// its own directory prefix; the remaining namespace segments and class name
/// are preserved as a relative sub-path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Root namespace prefix under which all source classes live
    /// (`App` or `Vendor/Plugin`).
    pub base_namespace: String,

    /// Directory prefix for source class files.
    pub source_prefix: String,

    /// Directory prefix for generated unit tests.
    pub unit_prefix: String,

    /// Directory prefix for generated integration tests.
    pub integration_prefix: String,

    /// Directory prefix for generated fixtures.
    pub fixture_prefix: String,

    /// File extension of source and generated files (without the dot).
    pub extension: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            base_namespace: "App".into(),
            source_prefix: "inc".into(),
            unit_prefix: "Tests/Unit/inc".into(),
            integration_prefix: "Tests/Integration/inc".into(),
            fixture_prefix: "Tests/Fixtures/inc".into(),
            extension: "php".into(),
        }
    }
}

impl ProjectLayout {
    /// Base namespace as segments, accepting either separator style
    /// (`Vendor/Plugin` or `Vendor\Plugin`).
    pub fn base_segments(&self) -> Vec<String> {
        self.base_namespace
            .replace('\\', "/")
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Template identifier for a template file name, e.g. `unit` →
    /// `test/unit.php.tpl`.
    pub fn template_id(&self, stem: &str) -> String {
        format!("test/{stem}.{}.tpl", self.extension)
    }
}
