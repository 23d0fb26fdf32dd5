//! Metadata completeness scoring and name validation

use crate::models::{Issue, IssueCategory, SkillMetadata, METADATA_MAX};
use regex::Regex;
use std::sync::OnceLock;

const NAME_POINTS: u32 = 15;
const DESCRIPTION_POINTS: u32 = 10;
const LICENSE_POINTS: u32 = 3;
const COMPATIBILITY_POINTS: u32 = 3;
const WORKFLOW_POINTS: u32 = 4;

/// Accepted description length in characters
pub const DESCRIPTION_MAX_CHARS: usize = 1024;
/// Longest accepted skill name in characters
pub const NAME_MAX_CHARS: usize = 64;

static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn name_pattern() -> &'static Regex {
    NAME_PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex"))
}

/// Score presence and validity of declared header fields (0-35)
pub fn score_metadata(metadata: &SkillMetadata) -> (u32, Vec<Issue>) {
    let mut score = 0;
    let mut issues = Vec::new();

    if metadata.name.is_some() {
        score += NAME_POINTS;
    } else {
        issues.push(
            Issue::critical(IssueCategory::Metadata, "Missing required field: name")
                .recommend("Add 'name' field to frontmatter"),
        );
    }

    match &metadata.description {
        Some(desc) => {
            let len = desc.chars().count();
            if (1..=DESCRIPTION_MAX_CHARS).contains(&len) {
                score += DESCRIPTION_POINTS;
            } else {
                issues.push(
                    Issue::warning(
                        IssueCategory::Metadata,
                        format!("Description length {len} chars (should be 1-{DESCRIPTION_MAX_CHARS})"),
                    )
                    .recommend("Adjust description length"),
                );
            }
        }
        None => issues.push(
            Issue::critical(IssueCategory::Metadata, "Missing required field: description")
                .recommend("Add 'description' field to frontmatter"),
        ),
    }

    if metadata.license.is_some() {
        score += LICENSE_POINTS;
    } else {
        issues.push(
            Issue::info(IssueCategory::Metadata, "Missing optional field: license")
                .recommend("Consider adding 'license: MIT'"),
        );
    }

    if metadata.compatibility.is_some() {
        score += COMPATIBILITY_POINTS;
    } else {
        issues.push(
            Issue::info(IssueCategory::Metadata, "Missing optional field: compatibility")
                .recommend("Consider adding 'compatibility: opencode'"),
        );
    }

    // Warning rather than info: reports group skills by workflow
    if metadata.workflow.is_some() {
        score += WORKFLOW_POINTS;
    } else {
        issues.push(
            Issue::warning(IssueCategory::Metadata, "Missing metadata.workflow field").recommend(
                "Add workflow categorization (e.g., 'git-ops', 'security', 'deployment')",
            ),
        );
    }

    debug_assert!(score <= METADATA_MAX);
    (score, issues)
}

/// Check a declared skill name against naming conventions.
///
/// Names must be lowercase alphanumeric words joined by single hyphens,
/// at most 64 characters.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name is empty".to_string());
    }

    let len = name.chars().count();
    if len > NAME_MAX_CHARS {
        return Err(format!("Name too long ({len} chars, max {NAME_MAX_CHARS})"));
    }

    if !name_pattern().is_match(name) {
        return Err("Name must be lowercase alphanumeric with single hyphens".to_string());
    }

    Ok(())
}

/// Structure issue for an invalid declared name
pub fn name_issue(metadata: &SkillMetadata) -> Option<Issue> {
    let name = metadata.name.as_deref()?;
    validate_name(name).err().map(|reason| {
        Issue::critical(
            IssueCategory::Structure,
            format!("Invalid skill name: {reason}"),
        )
        .recommend("Rename skill to follow conventions")
    })
}
