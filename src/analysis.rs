//! Content analysis of skill bodies
//!
//! Scans the markdown body (header already stripped) for the signals the
//! quality scorer rewards: examples, an output format, actionable verbs,
//! usage guidance, fenced code and section headings. All checks are
//! case-insensitive and pure.

use crate::models::ContentAnalysis;
use regex::Regex;
use std::sync::OnceLock;

/// Minimum actionable verb occurrences for a body to count as actionable
pub const MIN_ACTIONABLE_VERBS: usize = 3;

const WHEN_TO_USE_PHRASES: &[&str] = &["when to use", "usage", "use this"];

static ACTIONABLE_PATTERN: OnceLock<Regex> = OnceLock::new();
static SEVERITY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn actionable_pattern() -> &'static Regex {
    ACTIONABLE_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)\b(check|verify|validate|ensure|create|add|implement|fix|remove|update|run|test)\b",
        )
        .expect("valid regex")
    })
}

fn severity_pattern() -> &'static Regex {
    SEVERITY_PATTERN
        .get_or_init(|| Regex::new(r"(?i)\b(critical|high|medium|low|severity)\b").expect("valid regex"))
}

/// Analyze a skill body
pub fn analyze_content(body: &str) -> ContentAnalysis {
    let lower = body.to_lowercase();

    let actionable_verbs: Vec<String> = actionable_pattern()
        .find_iter(body)
        .map(|m| m.as_str().to_string())
        .collect();

    let sections = body
        .split('\n')
        .filter_map(|line| line.strip_prefix("## "))
        .map(|heading| heading.trim().to_string())
        .collect();

    ContentAnalysis {
        line_count: body.split('\n').count(),
        has_examples: lower.contains("example"),
        has_output_format: lower.contains("output") && lower.contains("format"),
        has_actionable_instructions: actionable_verbs.len() >= MIN_ACTIONABLE_VERBS,
        has_severity_levels: severity_pattern().is_match(body),
        has_when_to_use: WHEN_TO_USE_PHRASES.iter().any(|p| lower.contains(p)),
        // Unbalanced fences round down
        code_blocks: body.matches("```").count() / 2,
        sections,
        actionable_verbs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body() {
        let a = analyze_content("");
        assert_eq!(a.line_count, 1);
        assert!(!a.has_examples);
        assert!(!a.has_output_format);
        assert!(!a.has_actionable_instructions);
        assert!(!a.has_severity_levels);
        assert!(!a.has_when_to_use);
        assert_eq!(a.code_blocks, 0);
        assert!(a.sections.is_empty());
    }

    #[test]
    fn test_examples_and_output_format_are_substring_checks() {
        let a = analyze_content("See the EXAMPLES.\nThe formatted OUTPUT goes here.");
        assert!(a.has_examples);
        assert!(a.has_output_format, "words need not be adjacent");

        let a = analyze_content("Output only");
        assert!(!a.has_output_format);
    }

    #[test]
    fn test_actionable_verbs_are_whole_words() {
        let a = analyze_content("Check the diff. Verify tests. Create a branch.");
        assert_eq!(a.actionable_verbs, vec!["Check", "Verify", "Create"]);
        assert!(a.has_actionable_instructions);

        // "checking", "tested", "address" and "running" are not whole-word verbs
        let a = analyze_content("checking tested address running");
        assert!(a.actionable_verbs.is_empty());
        assert!(!a.has_actionable_instructions);
    }

    #[test]
    fn test_two_verbs_are_not_enough() {
        let a = analyze_content("run it, then fix it");
        assert_eq!(a.actionable_verbs.len(), 2);
        assert!(!a.has_actionable_instructions);
    }

    #[test]
    fn test_severity_levels_are_whole_words() {
        assert!(analyze_content("Mark as HIGH priority").has_severity_levels);
        assert!(analyze_content("Severity: low").has_severity_levels);
        assert!(!analyze_content("highlight the allowance").has_severity_levels);
    }

    #[test]
    fn test_when_to_use_phrases() {
        assert!(analyze_content("## When to Use\nAlways").has_when_to_use);
        assert!(analyze_content("Usage: run it").has_when_to_use);
        assert!(analyze_content("Use this when reviewing").has_when_to_use);
        assert!(!analyze_content("Nothing relevant").has_when_to_use);
    }

    #[test]
    fn test_code_block_counting() {
        assert_eq!(analyze_content("```\na\n```").code_blocks, 1);
        assert_eq!(analyze_content("```\na\n```\n```rust\nb\n```").code_blocks, 2);
        // Unbalanced: three fences count as one block
        assert_eq!(analyze_content("```\na\n```\n```\nb").code_blocks, 1);
    }

    #[test]
    fn test_sections_are_level_two_only() {
        let body = "# Title\n## Examples \n### Nested\n##NoSpace\n## Output Format";
        let a = analyze_content(body);
        assert_eq!(a.sections, vec!["Examples", "Output Format"]);
        assert_eq!(a.line_count, 5);
    }
}
