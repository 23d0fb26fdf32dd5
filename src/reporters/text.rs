//! Table (terminal) reporter with colors and formatting

use super::{by_score_desc, RenderOptions};
use crate::models::{AuditReport, Grade, Verdict};
use anyhow::Result;
use console::{style, Color};

/// Width of the heavy rule around the table
pub(crate) const RULE_WIDTH: usize = 100;

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::A => Color::Green,
        Grade::B => Color::Blue,
        Grade::C => Color::Yellow,
        Grade::D | Grade::F => Color::Red,
    }
}

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Keep => Color::Green,
        Verdict::Upgrade => Color::Yellow,
        Verdict::Delete => Color::Red,
    }
}

/// Render report as a summary table sorted best-first
pub fn render(report: &AuditReport, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&format!(
        "{:<25} {:<10} {:<8} {:<8} {:<12} {:<10}\n",
        "Skill", "Location", "Score", "Grade", "Verdict", "Priority"
    ));
    out.push_str(&format!("{rule}\n"));

    for skill in by_score_desc(report) {
        let score = &skill.score;
        // Pad before styling so escape codes don't skew the columns
        let grade = style(format!("{:<8}", score.grade.as_str()))
            .fg(grade_color(score.grade))
            .force_styling(options.color);
        let verdict = style(format!("{:<12}", score.verdict.as_str()))
            .fg(verdict_color(score.verdict))
            .force_styling(options.color);

        out.push_str(&format!(
            "{:<25} {:<10} {:<8} {} {} {:<10}\n",
            skill.name,
            skill.location.as_str(),
            score.total_score,
            grade,
            verdict,
            score.priority.to_string()
        ));
    }
    out.push_str(&format!("{rule}\n"));

    let summary = &report.summary;
    out.push_str(&format!(
        "\nSummary: {} skills total\n",
        summary.total_skills
    ));
    out.push_str(&format!(
        "  {} KEEP: {}\n",
        options.icon("✅", "[+]"),
        summary.keep
    ));
    out.push_str(&format!(
        "  {} UPGRADE: {}\n",
        options.icon("⚠️ ", "[~]"),
        summary.upgrade
    ));
    out.push_str(&format!(
        "  {} DELETE: {}\n",
        options.icon("❌", "[-]"),
        summary.delete
    ));

    if summary.critical_issues > 0 {
        let banner = format!(
            "{} {} critical issues found!",
            options.icon("⚠️ ", "!!"),
            summary.critical_issues
        );
        out.push_str(&format!(
            "\n{}\n",
            style(banner).red().bold().force_styling(options.color)
        ));
    }

    Ok(out)
}
