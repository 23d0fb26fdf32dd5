//! JSON reporter
//!
//! Outputs the full AuditReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::AuditReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AuditReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");

        assert!(parsed["generated_at"].is_string());
        let summary = &parsed["summary"];
        assert_eq!(summary["total_skills"], 3);
        assert_eq!(summary["keep"], 1);
        assert_eq!(summary["upgrade"], 1);
        assert_eq!(summary["delete"], 1);
        assert_eq!(summary["critical_issues"], 1);
        assert_eq!(summary["warning_issues"], 1);
        assert_eq!(summary["info_issues"], 1);
    }

    #[test]
    fn test_json_skill_shape() {
        let json_str = render(&test_report()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        let skills = parsed["skills"].as_array().expect("skills array");
        assert_eq!(skills.len(), 3);

        // Discovery order, not score order
        let commit = &skills[1];
        assert_eq!(commit["key"], "project:commit");
        assert_eq!(commit["name"], "commit");
        assert_eq!(commit["location"], "project");
        assert_eq!(commit["score"]["total_score"], 70);
        assert_eq!(commit["score"]["grade"], "B");
        assert_eq!(commit["score"]["verdict"], "DELETE");
        assert_eq!(commit["score"]["priority"], "Critical");
        assert_eq!(commit["issues"][0]["severity"], "critical");
        assert_eq!(commit["issues"][0]["category"], "necessity");
        assert_eq!(commit["content_analysis"]["code_blocks"], 2);
    }

    #[test]
    fn test_json_round_trips_into_model() {
        let json_str = render(&test_report()).expect("render JSON");
        let back: AuditReport = serde_json::from_str(&json_str).expect("deserialize");
        assert_eq!(back.summary, test_report().summary);
    }

    #[test]
    fn test_json_empty_audit() {
        let report = AuditReport::new(Vec::new());
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["skills"].as_array().expect("skills array").len(), 0);
        assert_eq!(parsed["summary"]["total_skills"], 0);
    }
}
