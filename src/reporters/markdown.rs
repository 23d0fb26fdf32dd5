//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Pull request comments
//! - Team wikis
//! - Checked-in audit snapshots

use super::{by_score_asc, RenderOptions};
use crate::models::{AuditReport, Severity, SkillReport, Verdict};
use anyhow::Result;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AuditReport, options: &RenderOptions) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    md.push_str(&render_summary(report));
    md.push('\n');

    md.push_str(&render_skills(report, options));

    Ok(md)
}

fn render_header(report: &AuditReport) -> String {
    let timestamp = report.generated_at.format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# OpenCode Skill Audit Report

Generated: {}
"#,
        timestamp
    )
}

fn render_summary(report: &AuditReport) -> String {
    let summary = &report.summary;
    let mut md = format!(
        r#"## Executive Summary

**Total Skills Audited:** {}

| Verdict | Count | Percentage |
|---------|-------|------------|
"#,
        summary.total_skills
    );

    for verdict in [Verdict::Keep, Verdict::Upgrade, Verdict::Delete] {
        let count = summary.count_for(verdict);
        md.push_str(&format!(
            "| {} | {} | {:.1}% |\n",
            verdict,
            count,
            percentage(count, summary.total_skills)
        ));
    }

    md.push_str(&format!(
        "\n**Critical Issues:** {}\n",
        summary.critical_issues
    ));
    md
}

fn render_skills(report: &AuditReport, options: &RenderOptions) -> String {
    let mut md = String::from("---\n\n## Detailed Skill Analysis\n");

    for skill in by_score_asc(report) {
        md.push_str(&render_skill(skill, options));
    }

    md
}

fn render_skill(skill: &SkillReport, options: &RenderOptions) -> String {
    let score = &skill.score;
    let mut md = format!(
        r#"
### {}

**Location:** `{}`

**Type:** {}

**Score:** {}/{} (Grade: {})

**Verdict:** `{}` | **Priority:** {}

**Score Breakdown:**
- Metadata: {}/{}
- Quality: {}/{}
- Necessity: {}/{}
"#,
        skill.name,
        skill.path.display(),
        skill.location,
        score.total_score,
        score.max_score,
        score.grade,
        score.verdict,
        score.priority,
        score.metadata_score,
        score.metadata_max,
        score.quality_score,
        score.quality_max,
        score.necessity_score,
        score.necessity_max,
    );

    if !skill.issues.is_empty() {
        md.push_str("\n**Issues:**\n");
        for issue in &skill.issues {
            md.push_str(&format!(
                "\n{} **[{}]** {}\n",
                severity_emoji(issue.severity, options),
                issue.severity.to_string().to_uppercase(),
                issue.category
            ));
            md.push_str(&format!("   - **Issue:** {}\n", issue.message));
            if let Some(recommendation) = &issue.recommendation {
                md.push_str(&format!("   - **Recommendation:** {}\n", recommendation));
            }
        }
    }

    let analysis = &skill.content_analysis;
    md.push_str("\n**Content Analysis:**\n");
    md.push_str(&format!("- Lines: {}\n", analysis.line_count));
    md.push_str(&format!(
        "- Has examples: {}\n",
        check(analysis.has_examples, options)
    ));
    md.push_str(&format!(
        "- Has output format: {}\n",
        check(analysis.has_output_format, options)
    ));
    md.push_str(&format!(
        "- Has actionable instructions: {}\n",
        check(analysis.has_actionable_instructions, options)
    ));
    md.push_str(&format!("- Code blocks: {}\n", analysis.code_blocks));
    md.push_str("\n---\n");

    md
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn check(value: bool, options: &RenderOptions) -> &'static str {
    if value {
        options.icon("✅", "yes")
    } else {
        options.icon("❌", "no")
    }
}

fn severity_emoji(severity: Severity, options: &RenderOptions) -> &'static str {
    match severity {
        Severity::Critical => options.icon("🔴", "-"),
        Severity::Warning => options.icon("🟡", "-"),
        Severity::Info => options.icon("🔵", "-"),
    }
}
