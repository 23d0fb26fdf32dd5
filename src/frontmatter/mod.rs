//! SKILL.md header (frontmatter) parsing
//!
//! A skill document looks like:
//!
//! ```text
//! ---
//! name: code-review
//! description: Reviews staged changes for correctness and style
//! metadata:
//!   workflow: review
//! ---
//!
//! # Body
//! ```
//!
//! Two interchangeable parsers implement [`FrontmatterParser`]:
//! - [`YamlFrontmatter`] - full YAML via serde_yaml (cargo feature `yaml`)
//! - [`LineFrontmatter`] - best-effort line parser with the same output shape
//!
//! Neither parser ever fails: a missing or malformed header yields an empty
//! field map and the full document text as body.

mod line;
#[cfg(feature = "yaml")]
mod yaml;

pub use line::LineFrontmatter;
#[cfg(feature = "yaml")]
pub use yaml::YamlFrontmatter;

use crate::models::SkillMetadata;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Ordered header fields
pub type Fields = BTreeMap<String, FieldValue>;

/// A header value, reduced to the shapes skill headers actually use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
    Map(Fields),
}

impl FieldValue {
    /// Non-empty scalar text, if this is a scalar
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Fields> {
        match self {
            FieldValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

/// Why a header could not be used. Never escapes [`FrontmatterParser::parse`].
#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("document does not start with a --- header")]
    Missing,

    #[error("header is not terminated by a closing ---")]
    Unterminated,

    #[error("header root is not a key/value mapping")]
    NotAMapping,

    #[cfg(feature = "yaml")]
    #[error("invalid YAML header: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Header parser capability
pub trait FrontmatterParser: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Parse already-split header text into fields
    fn parse_header(&self, header: &str) -> Result<Fields, FrontmatterError>;

    /// Split `content` into header fields and body.
    ///
    /// Missing or malformed headers degrade to `(empty, content)`.
    fn parse(&self, content: &str) -> (Fields, String) {
        match split_frontmatter(content)
            .and_then(|(header, body)| Ok((self.parse_header(header)?, body)))
        {
            Ok((fields, body)) => (fields, body.to_string()),
            Err(FrontmatterError::Missing) => (Fields::new(), content.to_string()),
            Err(e) => {
                debug!("{} parser ignored header: {}", self.name(), e);
                (Fields::new(), content.to_string())
            }
        }
    }
}

/// Split a document into (header text, body text), both trimmed.
///
/// Only the first two `---` markers after the opening one are boundaries;
/// later `---` (horizontal rules) stay in the body.
pub fn split_frontmatter(content: &str) -> Result<(&str, &str), FrontmatterError> {
    if !content.starts_with("---") {
        return Err(FrontmatterError::Missing);
    }
    let mut parts = content.splitn(3, "---");
    let _leading = parts.next();
    match (parts.next(), parts.next()) {
        (Some(header), Some(body)) => Ok((header.trim(), body.trim())),
        _ => Err(FrontmatterError::Unterminated),
    }
}

/// Which parser to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    #[default]
    Yaml,
    Basic,
}

impl FromStr for ParserKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" => Ok(ParserKind::Yaml),
            "basic" | "line" => Ok(ParserKind::Basic),
            _ => Err(anyhow::anyhow!(
                "Unknown parser '{}'. Valid parsers: yaml, basic",
                s
            )),
        }
    }
}

/// Pick the parser implementation once at startup
pub fn select_parser(kind: ParserKind) -> Box<dyn FrontmatterParser> {
    match kind {
        #[cfg(feature = "yaml")]
        ParserKind::Yaml => Box::new(YamlFrontmatter),
        #[cfg(not(feature = "yaml"))]
        ParserKind::Yaml => {
            tracing::warn!("Built without YAML support. Using basic header parsing.");
            Box::new(LineFrontmatter)
        }
        ParserKind::Basic => Box::new(LineFrontmatter),
    }
}

/// Pull the recognized metadata fields out of a header.
///
/// `audience` and `workflow` live in the nested `metadata:` block.
pub fn extract_metadata(fields: &Fields) -> SkillMetadata {
    let scalar = |map: &Fields, key: &str| {
        map.get(key)
            .and_then(FieldValue::as_scalar)
            .map(str::to_string)
    };
    let nested = fields.get("metadata").and_then(FieldValue::as_map);

    SkillMetadata {
        name: scalar(fields, "name"),
        description: scalar(fields, "description"),
        license: scalar(fields, "license"),
        compatibility: scalar(fields, "compatibility"),
        audience: nested.and_then(|m| scalar(m, "audience")),
        workflow: nested.and_then(|m| scalar(m, "workflow")),
    }
}
