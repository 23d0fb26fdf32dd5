//! Detailed terminal reporter: the table, then every skill worst-first

use super::text::{self, RULE_WIDTH};
use super::{by_score_asc, RenderOptions};
use crate::models::{AuditReport, Severity, SkillReport};
use anyhow::Result;
use console::style;

const BLOCK_WIDTH: usize = 80;

fn severity_icon(severity: Severity, options: &RenderOptions) -> &'static str {
    match severity {
        Severity::Critical => options.icon("❌", "x"),
        Severity::Warning => options.icon("⚠️", "!"),
        Severity::Info => options.icon("ℹ️", "i"),
    }
}

/// Render the table followed by one block per skill
pub fn render(report: &AuditReport, options: &RenderOptions) -> Result<String> {
    let mut out = text::render(report, options)?;
    let rule = "=".repeat(RULE_WIDTH);

    out.push_str(&format!("\n{rule}\nDETAILED REPORT\n{rule}\n"));
    for skill in by_score_asc(report) {
        out.push_str(&render_skill(skill, options));
    }

    Ok(out)
}

fn render_skill(skill: &SkillReport, options: &RenderOptions) -> String {
    let mut out = String::new();
    let rule = "=".repeat(BLOCK_WIDTH);
    let score = &skill.score;

    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&format!(
        "Skill: {}\n",
        style(&skill.name).bold().force_styling(options.color)
    ));
    out.push_str(&format!("Location: {}\n", skill.path.display()));
    out.push_str(&format!(
        "Score: {}/{} (Grade: {})\n",
        score.total_score, score.max_score, score.grade
    ));
    out.push_str(&format!(
        "Verdict: {} | Priority: {}\n",
        score.verdict, score.priority
    ));
    out.push_str(&format!(
        "Breakdown: metadata {}/{}, quality {}/{}, necessity {}/{}\n",
        score.metadata_score,
        score.metadata_max,
        score.quality_score,
        score.quality_max,
        score.necessity_score,
        score.necessity_max
    ));
    out.push_str(&format!("{rule}\n"));

    if skill.issues.is_empty() {
        out.push_str(&format!("\n{} No issues found!\n", options.icon("✅", "OK")));
    } else {
        out.push_str("\nIssues Found:\n");
        for issue in &skill.issues {
            out.push_str(&format!(
                "  {} [{}] {}: {}\n",
                severity_icon(issue.severity, options),
                issue.severity.to_string().to_uppercase(),
                issue.category,
                issue.message
            ));
            if let Some(recommendation) = &issue.recommendation {
                out.push_str(&format!("      -> {recommendation}\n"));
            }
        }
    }

    let analysis = &skill.content_analysis;
    out.push_str("\nContent Analysis:\n");
    out.push_str(&format!("  Lines: {}\n", analysis.line_count));
    out.push_str(&format!("  Code blocks: {}\n", analysis.code_blocks));
    out.push_str(&format!("  Sections: {}\n", analysis.sections.len()));
    out.push_str(&format!("  Has examples: {}\n", analysis.has_examples));
    out.push_str(&format!(
        "  Has output format: {}\n",
        analysis.has_output_format
    ));

    out
}
