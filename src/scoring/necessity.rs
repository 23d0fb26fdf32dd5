//! Necessity scoring
//!
//! Starts from full credit and deducts for:
//! - duplicating a native platform feature (-20)
//! - colliding with another skill after name normalization (-15)
//! - a description under 30 characters (-5)
//! - vague wording in the description (-5)
//!
//! The result is clamped at zero.

use super::native::NativeFeatures;
use crate::models::{Issue, IssueCategory, SkillKey, SkillMetadata, NECESSITY_MAX};
use std::collections::BTreeSet;

const NATIVE_DUPLICATION_PENALTY: i32 = 20;
const SIBLING_DUPLICATION_PENALTY: i32 = 15;
const BRIEF_DESCRIPTION_PENALTY: i32 = 5;
const VAGUE_DESCRIPTION_PENALTY: i32 = 5;

/// Descriptions shorter than this many characters are too brief
pub const MIN_DESCRIPTION_CHARS: usize = 30;

/// Substrings that mark a description as vague
pub const VAGUE_TERMS: &[&str] = &["stuff", "things", "various", "some", "etc"];

/// Read-only snapshot of every discovered skill, including the one being scored
#[derive(Debug, Clone, Default)]
pub struct SiblingSet {
    keys: BTreeSet<SkillKey>,
}

impl SiblingSet {
    /// Other skills, in either collection, whose name differs from this one's
    /// but normalizes to the same string.
    ///
    /// A project skill with exactly the same name as a global one overrides it
    /// and is not a duplicate.
    pub fn duplicates_of(&self, key: &SkillKey) -> Vec<&SkillKey> {
        let base = normalize_name(&key.name);
        self.keys
            .iter()
            .filter(|other| other.name != key.name && normalize_name(&other.name) == base)
            .collect()
    }
}

impl FromIterator<SkillKey> for SiblingSet {
    fn from_iter<I: IntoIterator<Item = SkillKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Lowercase with hyphens and underscores removed
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Score whether a skill's existence is justified (0-30)
pub fn score_necessity(
    key: &SkillKey,
    metadata: &SkillMetadata,
    siblings: &SiblingSet,
    native: &NativeFeatures,
) -> (u32, Vec<Issue>) {
    let mut score = NECESSITY_MAX as i32;
    let mut issues = Vec::new();

    if let Some(duplication) = native.find_duplication(&key.name, metadata.description.as_deref()) {
        score -= NATIVE_DUPLICATION_PENALTY;
        issues.push(
            Issue::critical(IssueCategory::Necessity, duplication.message())
                .recommend("Consider deleting - functionality is built into opencode"),
        );
    }

    let duplicates = siblings.duplicates_of(key);
    if !duplicates.is_empty() {
        score -= SIBLING_DUPLICATION_PENALTY;
        let listed: Vec<String> = duplicates.iter().map(|k| k.to_string()).collect();
        issues.push(
            Issue::critical(
                IssueCategory::Necessity,
                format!("Duplicate skill found: {}", listed.join(", ")),
            )
            .recommend("Consolidate or delete duplicate skills"),
        );
    }

    if let Some(description) = &metadata.description {
        if description.chars().count() < MIN_DESCRIPTION_CHARS {
            score -= BRIEF_DESCRIPTION_PENALTY;
            issues.push(
                Issue::warning(
                    IssueCategory::Necessity,
                    format!("Description is too brief (< {MIN_DESCRIPTION_CHARS} chars)"),
                )
                .recommend("Add more detail about what the skill does"),
            );
        }

        let lower = description.to_lowercase();
        if VAGUE_TERMS.iter().any(|term| lower.contains(term)) {
            score -= VAGUE_DESCRIPTION_PENALTY;
            issues.push(
                Issue::warning(IssueCategory::Necessity, "Description contains vague terms")
                    .recommend("Be specific about functionality"),
            );
        }
    }

    (score.max(0) as u32, issues)
}
