//! Content quality scoring

use crate::models::{ContentAnalysis, Issue, IssueCategory, QUALITY_MAX};

const EXAMPLES_POINTS: u32 = 10;
const OUTPUT_FORMAT_POINTS: u32 = 8;
const ACTIONABLE_POINTS: u32 = 8;
const WHEN_TO_USE_POINTS: u32 = 6;
const CODE_BLOCKS_POINTS: u32 = 3;
const SINGLE_CODE_BLOCK_POINTS: u32 = 1;

/// Score the analyzer's signals (0-35)
pub fn score_quality(analysis: &ContentAnalysis) -> (u32, Vec<Issue>) {
    let mut score = 0;
    let mut issues = Vec::new();

    if analysis.has_examples {
        score += EXAMPLES_POINTS;
    } else {
        issues.push(
            Issue::warning(IssueCategory::Quality, "No examples section found")
                .recommend("Add concrete examples of skill usage"),
        );
    }

    if analysis.has_output_format {
        score += OUTPUT_FORMAT_POINTS;
    } else {
        issues.push(
            Issue::warning(IssueCategory::Quality, "No output format defined")
                .recommend("Add '## Output Format' section"),
        );
    }

    if analysis.has_actionable_instructions {
        score += ACTIONABLE_POINTS;
    } else {
        issues.push(
            Issue::warning(IssueCategory::Quality, "Instructions lack actionable verbs")
                .recommend("Use verbs like 'check', 'verify', 'create', 'implement'"),
        );
    }

    if analysis.has_when_to_use {
        score += WHEN_TO_USE_POINTS;
    } else {
        issues.push(
            Issue::info(IssueCategory::Quality, "No 'when to use' section")
                .recommend("Add guidance on appropriate usage contexts"),
        );
    }

    match analysis.code_blocks {
        0 => issues.push(
            Issue::warning(IssueCategory::Quality, "No code blocks found")
                .recommend("Add code examples or templates"),
        ),
        1 => {
            score += SINGLE_CODE_BLOCK_POINTS;
            issues.push(
                Issue::info(IssueCategory::Quality, "Only one code block found")
                    .recommend("Add more code examples"),
            );
        }
        _ => score += CODE_BLOCKS_POINTS,
    }

    debug_assert!(score <= QUALITY_MAX);
    (score, issues)
}
