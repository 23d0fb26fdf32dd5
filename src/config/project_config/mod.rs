//! Project-level configuration support
//!
//! Loads per-project configuration from `skillaudit.toml` or
//! `.skillauditrc.json` in the audit root.
//!
//! # Configuration Format
//!
//! ```toml
//! # skillaudit.toml
//!
//! [paths]
//! global = "~/.config/opencode/skill"
//! project = ".opencode/skill"
//!
//! [native]
//! ignore = ["undo"]
//!
//! [native.extra]
//! git_workflows = ["rebase", "stash"]
//!
//! [defaults]
//! format = "table"
//! parser = "yaml"
//! no_emoji = false
//! workers = 4
//! ```

use crate::scoring::NativeFeatures;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Config file names, in lookup order
pub const CONFIG_FILES: &[&str] = &["skillaudit.toml", ".skillauditrc.json"];

/// Project-level configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Skill collection locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Native feature table adjustments
    #[serde(default)]
    pub native: NativeConfig,

    /// Default CLI settings
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Collection directory overrides
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PathsConfig {
    /// Global skill collection
    #[serde(default)]
    pub global: Option<PathBuf>,

    /// Project skill collection, relative to the audit root unless absolute
    #[serde(default)]
    pub project: Option<PathBuf>,
}

/// Extra native commands and tokens to stop flagging
#[derive(Debug, Clone, Deserialize, Default)]
pub struct NativeConfig {
    /// Tokens removed from the table, e.g. `"undo"` or `"/share"`
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Category name -> additional tokens
    #[serde(default)]
    pub extra: BTreeMap<String, Vec<String>>,
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (table, detailed, json, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Default header parser (yaml, basic)
    #[serde(default)]
    pub parser: Option<String>,

    /// Disable emoji by default
    #[serde(default)]
    pub no_emoji: Option<bool>,

    /// Default number of workers
    #[serde(default)]
    pub workers: Option<usize>,
}

impl ProjectConfig {
    /// Native feature table with this project's adjustments applied
    pub fn native_features(&self) -> NativeFeatures {
        if self.native.extra.is_empty() && self.native.ignore.is_empty() {
            return NativeFeatures::builtin().clone();
        }
        NativeFeatures::with_overrides(&self.native.extra, &self.native.ignore)
    }

    /// Configured global collection, with `~` expanded
    pub fn global_dir(&self) -> Option<PathBuf> {
        self.paths.global.as_deref().map(expand_tilde)
    }

    /// Configured project collection, resolved against `root`
    pub fn project_dir(&self, root: &Path) -> Option<PathBuf> {
        self.paths
            .project
            .as_deref()
            .map(expand_tilde)
            .map(|p| if p.is_absolute() { p } else { root.join(p) })
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Load project configuration from the audit root.
///
/// Searches for configuration files in this order:
/// 1. `skillaudit.toml`
/// 2. `.skillauditrc.json`
///
/// Returns default configuration if no config file is found.
pub fn load_project_config(root: &Path) -> ProjectConfig {
    // Try TOML first (preferred format)
    let toml_path = root.join(CONFIG_FILES[0]);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    // Try JSON
    let json_path = root.join(CONFIG_FILES[1]);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from a JSON file
fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}
