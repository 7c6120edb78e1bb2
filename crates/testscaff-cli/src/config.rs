//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the embedded
//! [`ProjectLayout`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config <FILE>` on the command line
//! 2. `.testscaff.toml` in the current directory
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use testscaff_core::domain::ProjectLayout;

/// Name of the project-local configuration file.
pub const LOCAL_CONFIG: &str = ".testscaff.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Namespace-to-directory mapping for the project.
    pub layout: ProjectLayout,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding template overrides (`test/unit.php.tpl`, ...).
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// `config_file` is the path the user passed via `--config`.  An explicit
    /// path that cannot be read is an error; a missing `.testscaff.toml` just
    /// means defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(explicit) => Some(explicit.clone()),
            None => {
                let local = PathBuf::from(LOCAL_CONFIG);
                local.is_file().then_some(local)
            }
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.testscaff.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "testscaff", "testscaff")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }
}
