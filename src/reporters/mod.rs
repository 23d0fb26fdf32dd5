//! Output reporters for skill audit results
//!
//! Supports multiple output formats:
//! - `table` - Terminal summary table with colors and emoji
//! - `detailed` - The table plus every issue and content facts per skill
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod detailed;
mod json;
mod markdown;
mod text;

use crate::models::{AuditReport, SkillReport};
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Detailed,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "detailed" => Ok(OutputFormat::Detailed),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: table, detailed, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Detailed => write!(f, "detailed"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl OutputFormat {
    /// Formats meant for files and pipes; no banners or progress around them
    pub fn is_machine_readable(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Markdown)
    }
}

/// Presentation switches shared by the terminal renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub no_emoji: bool,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            no_emoji: false,
            color: console::colors_enabled(),
        }
    }
}

impl RenderOptions {
    /// Pick the emoji or its plain-text stand-in
    pub(crate) fn icon<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.no_emoji {
            plain
        } else {
            emoji
        }
    }
}

/// Render an audit report in the requested format
pub fn report_with_format(
    report: &AuditReport,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Table => text::render(report, options),
        OutputFormat::Detailed => detailed::render(report, options),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report, options),
    }
}

/// Skills ordered best-first; ties keep discovery order
pub(crate) fn by_score_desc(report: &AuditReport) -> Vec<&SkillReport> {
    let mut skills: Vec<&SkillReport> = report.skills.iter().collect();
    skills.sort_by(|a, b| b.score.total_score.cmp(&a.score.total_score));
    skills
}

/// Skills ordered worst-first; ties keep discovery order
pub(crate) fn by_score_asc(report: &AuditReport) -> Vec<&SkillReport> {
    let mut skills: Vec<&SkillReport> = report.skills.iter().collect();
    skills.sort_by_key(|s| s.score.total_score);
    skills
}
