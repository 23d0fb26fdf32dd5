//! Configuration module for skillaudit
//!
//! This module handles:
//! - Project-level configuration (skillaudit.toml)
//! - Skill collection path overrides
//! - Native feature table adjustments
//! - CLI defaults

mod project_config;

pub use project_config::{
    expand_tilde, load_project_config, CliDefaults, NativeConfig, PathsConfig, ProjectConfig,
    CONFIG_FILES,
};
