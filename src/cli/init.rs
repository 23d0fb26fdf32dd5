//! Init command - write a skillaudit.toml template

use crate::config::CONFIG_FILES;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# skillaudit configuration
#
# Command-line flags override these settings.

[paths]
# Global skill collection
# global = "~/.config/opencode/skill"

# Project skill collection, relative to this directory
# project = ".opencode/skill"

[native]
# Native commands your skills may legitimately wrap
# ignore = ["undo", "redo"]

[native.extra]
# Additional commands to treat as built in, by category
# git_workflows = ["rebase", "stash"]

[defaults]
# Output format (table, detailed, json, markdown)
format = "table"

# Header parser (yaml, basic)
parser = "yaml"

# Plain text markers instead of emoji
no_emoji = false

# Scoring threads (1-64)
workers = 1
"#;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    println!("\n{} Initializing skillaudit\n", style("🔍").bold());

    let config_path = root.join(CONFIG_FILES[0]);
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );

    println!("\nNext steps:");
    println!("  {} Audit all skills", style("skillaudit").cyan());
    println!(
        "  {} Every issue, worst first",
        style("skillaudit audit --format detailed").cyan()
    );

    Ok(())
}
