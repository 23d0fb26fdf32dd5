//! Core data models for skillaudit
//!
//! These models are shared by the scorers, the audit pipeline and the
//! reporters. Everything here is created fresh per run and never mutated
//! once a report has been assembled.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum points for the metadata axis
pub const METADATA_MAX: u32 = 35;
/// Maximum points for the quality axis
pub const QUALITY_MAX: u32 = 35;
/// Maximum points for the necessity axis
pub const NECESSITY_MAX: u32 = 30;
/// Maximum total score
pub const TOTAL_MAX: u32 = METADATA_MAX + QUALITY_MAX + NECESSITY_MAX;

/// Severity levels for issues
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Which part of a skill an issue is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Metadata,
    Quality,
    Necessity,
    Structure,
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueCategory::Metadata => write!(f, "metadata"),
            IssueCategory::Quality => write!(f, "quality"),
            IssueCategory::Necessity => write!(f, "necessity"),
            IssueCategory::Structure => write!(f, "structure"),
        }
    }
}

/// A single audit finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
    #[serde(default)]
    pub recommendation: Option<String>,
}

impl Issue {
    pub fn new(severity: Severity, category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            recommendation: None,
        }
    }

    pub fn critical(category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, category, message)
    }

    pub fn warning(category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, category, message)
    }

    pub fn info(category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, category, message)
    }

    /// Attach a recommendation
    pub fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

/// Counts of issues by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCounts {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl IssueCounts {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut counts = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Critical => counts.critical += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Info => counts.info += 1,
            }
        }
        counts
    }
}

/// Header fields recognized on a skill document.
///
/// Absence is a valid state; `None` means the field was missing, empty, or
/// not a plain scalar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub compatibility: Option<String>,
    pub audience: Option<String>,
    pub workflow: Option<String>,
}

/// Structural and quality signals found in a skill body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub line_count: usize,
    pub has_examples: bool,
    pub has_output_format: bool,
    pub has_actionable_instructions: bool,
    pub has_severity_levels: bool,
    pub has_when_to_use: bool,
    pub code_blocks: usize,
    pub sections: Vec<String>,
    pub actionable_verbs: Vec<String>,
}

/// Letter grade derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Calculate grade from score
    pub fn from_score(total: u32) -> Self {
        match total {
            s if s >= 80 => Grade::A,
            s if s >= 70 => Grade::B,
            s if s >= 60 => Grade::C,
            s if s >= 50 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final disposition recommended for a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Keep,
    Upgrade,
    Delete,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Keep => "KEEP",
            Verdict::Upgrade => "UPGRADE",
            Verdict::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How urgently a verdict should be acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
            Priority::Critical => write!(f, "Critical"),
        }
    }
}

/// Combined score for one skill.
///
/// `total_score` is always the sum of the three sub-scores; the maxima are
/// carried along so exported reports are self-describing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillScore {
    pub metadata_score: u32,
    pub metadata_max: u32,
    pub quality_score: u32,
    pub quality_max: u32,
    pub necessity_score: u32,
    pub necessity_max: u32,
    pub total_score: u32,
    pub max_score: u32,
    pub grade: Grade,
    pub verdict: Verdict,
    pub priority: Priority,
}

/// Which collection a skill was discovered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Global,
    Project,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Global => "global",
            Location::Project => "project",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully-qualified skill identity, rendered as `global:name` / `project:name`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SkillKey {
    pub location: Location,
    pub name: String,
}

impl SkillKey {
    pub fn new(location: Location, name: impl Into<String>) -> Self {
        Self {
            location,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for SkillKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.location, self.name)
    }
}

/// Complete audit result for a single skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillReport {
    /// Collection-qualified directory identity, e.g. `global:code-review`
    pub key: String,
    pub name: String,
    pub location: Location,
    pub path: PathBuf,
    pub metadata: SkillMetadata,
    pub score: SkillScore,
    pub issues: Vec<Issue>,
    pub content_analysis: ContentAnalysis,
}

impl SkillReport {
    pub fn issue_counts(&self) -> IssueCounts {
        IssueCounts::from_issues(&self.issues)
    }

    pub fn has_critical(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Critical)
    }
}

/// Totals by verdict and by issue severity across an audit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub total_skills: usize,
    pub keep: usize,
    pub upgrade: usize,
    pub delete: usize,
    pub critical_issues: usize,
    pub warning_issues: usize,
    pub info_issues: usize,
}

impl AuditSummary {
    pub fn from_reports(reports: &[SkillReport]) -> Self {
        let mut summary = Self {
            total_skills: reports.len(),
            ..Self::default()
        };
        for report in reports {
            match report.score.verdict {
                Verdict::Keep => summary.keep += 1,
                Verdict::Upgrade => summary.upgrade += 1,
                Verdict::Delete => summary.delete += 1,
            }
            let counts = report.issue_counts();
            summary.critical_issues += counts.critical;
            summary.warning_issues += counts.warning;
            summary.info_issues += counts.info;
        }
        summary
    }

    pub fn count_for(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::Keep => self.keep,
            Verdict::Upgrade => self.upgrade,
            Verdict::Delete => self.delete,
        }
    }
}

/// The whole audit: what gets handed to the reporters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Local>,
    pub summary: AuditSummary,
    pub skills: Vec<SkillReport>,
}

impl AuditReport {
    pub fn new(skills: Vec<SkillReport>) -> Self {
        Self {
            generated_at: Local::now(),
            summary: AuditSummary::from_reports(&skills),
            skills,
        }
    }

    /// Whether the host process should exit nonzero
    pub fn has_critical_issues(&self) -> bool {
        self.summary.critical_issues > 0
    }
}
