//! Skill scoring system
//!
//! Each skill is scored on three independent axes and then given a verdict.
//!
//! # Scoring Formula
//!
//! ```text
//! Total = Metadata (0-35) + Quality (0-35) + Necessity (0-30)
//!
//! Metadata:  name 15, description 10, license 3, compatibility 3, workflow 4
//! Quality:   examples 10, output format 8, actionable verbs 8,
//!            when-to-use 6, code blocks 3 (one block: 1)
//! Necessity: 30 - native duplicate 20 - sibling duplicate 15
//!               - brief description 5 - vague description 5, floor 0
//! ```
//!
//! # Grades
//!
//! A >= 80, B >= 70, C >= 60, D >= 50, else F. The grade depends on the
//! total only, so a B can still be a DELETE when a critical issue exists.

mod metadata;
mod native;
mod necessity;
mod quality;
mod verdict;

pub use metadata::{name_issue, score_metadata, validate_name};
pub use native::{MatchKind, NativeCategory, NativeFeatures, NativeMatch};
pub use necessity::{normalize_name, score_necessity, SiblingSet, VAGUE_TERMS};
pub use quality::score_quality;
pub use verdict::determine_verdict;

use crate::models::{
    Grade, Issue, SkillScore, METADATA_MAX, NECESSITY_MAX, QUALITY_MAX, TOTAL_MAX,
};

/// Combine sub-scores and the full issue list into a final score
pub fn combine_scores(metadata: u32, quality: u32, necessity: u32, issues: &[Issue]) -> SkillScore {
    let metadata = metadata.min(METADATA_MAX);
    let quality = quality.min(QUALITY_MAX);
    let necessity = necessity.min(NECESSITY_MAX);
    let total = metadata + quality + necessity;
    let (verdict, priority) = determine_verdict(total, issues);

    SkillScore {
        metadata_score: metadata,
        metadata_max: METADATA_MAX,
        quality_score: quality,
        quality_max: QUALITY_MAX,
        necessity_score: necessity,
        necessity_max: NECESSITY_MAX,
        total_score: total,
        max_score: TOTAL_MAX,
        grade: Grade::from_score(total),
        verdict,
        priority,
    }
}
