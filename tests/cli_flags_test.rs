//! CLI flag contract tests
//!
//! Verifies that audit flags (--format, --output, --global-only,
//! --project-only, --no-emoji, --parser, --workers) and the exit status
//! behave as documented.

use std::path::Path;
use std::process::Command;

const GOOD_SKILL: &str = r#"---
name: code-review
description: Reviews code changes for correctness and style issues
metadata:
  workflow: review
---

## When to Use

Use this before merging a branch.

## Examples

```bash
git diff main
```

## Output Format

```markdown
- file: finding
```

Check each hunk, verify the tests, and create a summary.
"#;

fn skillaudit_bin() -> String {
    env!("CARGO_BIN_EXE_skillaudit").to_string()
}

/// Temp audit root with `global/` and `<root>/.opencode/skill/` collections
struct SkillTree {
    dir: tempfile::TempDir,
}

impl SkillTree {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("global")).unwrap();
        std::fs::create_dir_all(dir.path().join(".opencode/skill")).unwrap();
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn global_dir(&self) -> std::path::PathBuf {
        self.root().join("global")
    }

    fn add_global(&self, name: &str, content: &str) -> &Self {
        write_skill(&self.global_dir(), name, content);
        self
    }

    fn add_project(&self, name: &str, content: &str) -> &Self {
        write_skill(&self.root().join(".opencode/skill"), name, content);
        self
    }
}

fn write_skill(collection: &Path, name: &str, content: &str) {
    let dir = collection.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("SKILL.md"), content).unwrap();
}

fn good_skill(name: &str) -> String {
    GOOD_SKILL.replace("code-review", name)
}

fn run_audit(tree: &SkillTree, extra_args: &[&str]) -> (i32, String, String) {
    let mut cmd = Command::new(skillaudit_bin());
    cmd.arg(tree.root())
        .arg("audit")
        .arg("--global-dir")
        .arg(tree.global_dir())
        .arg("--no-emoji")
        .env_remove("SKILLAUDIT_GLOBAL_DIR")
        .env_remove("SKILLAUDIT_PROJECT_DIR")
        .env_remove("RUST_LOG");
    for arg in extra_args {
        cmd.arg(arg);
    }
    let output = cmd.output().expect("Failed to run skillaudit");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (code, stdout, stderr)
}

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Invalid JSON")
}

// ============================================================================
// Exit status
// ============================================================================

#[test]
fn test_clean_audit_exits_zero() {
    let tree = SkillTree::new();
    tree.add_global("code-review", GOOD_SKILL);

    let (code, stdout, stderr) = run_audit(&tree, &["--format", "table"]);
    assert_eq!(code, 0, "stdout: {stdout}\nstderr: {stderr}");
    assert!(stdout.contains("code-review"));
    assert!(stdout.contains("KEEP: 1"));
}

#[test]
fn test_critical_issue_exits_one() {
    let tree = SkillTree::new();
    tree.add_global("code-review", GOOD_SKILL)
        .add_project("notes", "# Notes\n\nNo header here.\n");

    let (code, stdout, _) = run_audit(&tree, &["--format", "table"]);
    assert_eq!(code, 1, "a headerless skill is critical");
    assert!(stdout.contains("critical issues found!"));
}

#[test]
fn test_no_skills_found_exits_zero() {
    let tree = SkillTree::new();
    let (code, stdout, _) = run_audit(&tree, &["--format", "table"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No skills found"));
}

#[test]
fn test_missing_root_is_an_error() {
    let tree = SkillTree::new();
    let output = Command::new(skillaudit_bin())
        .arg(tree.root().join("does-not-exist"))
        .arg("audit")
        .output()
        .expect("Failed to run skillaudit");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Path does not exist"), "stderr: {stderr}");
}

// ============================================================================
// --format
// ============================================================================

#[test]
fn test_json_output_shape() {
    let tree = SkillTree::new();
    tree.add_global("code-review", GOOD_SKILL)
        .add_project("deploy-check", &good_skill("deploy-check"));

    let (code, stdout, _) = run_audit(&tree, &["--format", "json"]);
    assert_eq!(code, 0);

    let json = parse_json(&stdout);
    assert!(json["generated_at"].is_string());
    assert_eq!(json["summary"]["total_skills"], 2);
    assert_eq!(json["summary"]["keep"], 2);
    assert_eq!(json["summary"]["critical_issues"], 0);

    let skills = json["skills"].as_array().unwrap();
    assert_eq!(skills[0]["location"], "global");
    assert_eq!(skills[1]["location"], "project");
    assert_eq!(skills[0]["score"]["metadata_score"], 29);
    assert_eq!(skills[0]["score"]["quality_score"], 35);
    assert_eq!(skills[0]["score"]["necessity_score"], 30);
    assert_eq!(skills[0]["score"]["grade"], "A");
    assert_eq!(skills[0]["score"]["verdict"], "KEEP");
}

#[test]
fn test_detailed_lists_issues() {
    let tree = SkillTree::new();
    tree.add_global("helper", "---\nname: helper\ndescription: Does stuff\n---\nbody\n");

    let (_, stdout, _) = run_audit(&tree, &["--format", "detailed"]);
    assert!(stdout.contains("DETAILED REPORT"));
    assert!(stdout.contains("[WARNING] necessity: Description contains vague terms"));
    assert!(stdout.contains("-> Be specific about functionality"));
}

#[test]
fn test_markdown_alias() {
    let tree = SkillTree::new();
    tree.add_global("code-review", GOOD_SKILL);

    let (code, stdout, _) = run_audit(&tree, &["--format", "md"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("# OpenCode Skill Audit Report"));
    assert!(stdout.contains("| KEEP | 1 | 100.0% |"));
}

#[test]
fn test_output_file() {
    let tree = SkillTree::new();
    tree.add_global("code-review", GOOD_SKILL);
    let out_file = tree.root().join("report.json");

    let (code, stdout, _) = run_audit(
        &tree,
        &["--format", "json", "--output", out_file.to_str().unwrap()],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Report saved to"));

    let written = std::fs::read_to_string(&out_file).unwrap();
    assert_eq!(parse_json(&written)["summary"]["total_skills"], 1);
}

#[test]
fn test_no_emoji() {
    let tree = SkillTree::new();
    tree.add_global("code-review", GOOD_SKILL);

    let (_, stdout, _) = run_audit(&tree, &["--format", "table"]);
    assert!(!stdout.contains('✅'));
    assert!(!stdout.contains('🔍'));
}

// ============================================================================
// Collections
// ============================================================================

#[test]
fn test_global_only_and_project_only() {
    let tree = SkillTree::new();
    tree.add_global("code-review", GOOD_SKILL)
        .add_project("deploy-check", &good_skill("deploy-check"));

    let (_, stdout, _) = run_audit(&tree, &["--format", "json", "--global-only"]);
    let json = parse_json(&stdout);
    assert_eq!(json["summary"]["total_skills"], 1);
    assert_eq!(json["skills"][0]["name"], "code-review");

    let (_, stdout, _) = run_audit(&tree, &["--format", "json", "--project-only"]);
    let json = parse_json(&stdout);
    assert_eq!(json["summary"]["total_skills"], 1);
    assert_eq!(json["skills"][0]["name"], "deploy-check");
}

#[test]
fn test_global_only_conflicts_with_project_only() {
    let tree = SkillTree::new();
    let (code, _, stderr) = run_audit(&tree, &["--global-only", "--project-only"]);
    assert_eq!(code, 2, "clap usage errors exit 2");
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn test_duplicate_across_collections() {
    let tree = SkillTree::new();
    tree.add_global("code-review", GOOD_SKILL)
        .add_project("code_review", GOOD_SKILL);

    let (code, stdout, _) = run_audit(&tree, &["--format", "json"]);
    assert_eq!(code, 1);

    let json = parse_json(&stdout);
    assert_eq!(json["summary"]["delete"], 2);
    assert_eq!(json["skills"][0]["key"], "global:code-review");
    assert_eq!(json["skills"][1]["key"], "project:code_review");
    let messages: Vec<String> = json["skills"][0]["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["message"].as_str().unwrap().to_string())
        .collect();
    assert!(messages.contains(&"Duplicate skill found: project:code_review".to_string()));
}

#[test]
fn test_project_dir_env_override() {
    let tree = SkillTree::new();
    let custom = tree.root().join("custom-skills");
    write_skill(&custom, "code-review", GOOD_SKILL);

    let output = Command::new(skillaudit_bin())
        .arg(tree.root())
        .arg("audit")
        .args(["--format", "json", "--project-only"])
        .env("SKILLAUDIT_PROJECT_DIR", &custom)
        .output()
        .expect("Failed to run skillaudit");
    let json = parse_json(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(json["summary"]["total_skills"], 1);
}

// ============================================================================
// --parser / --workers
// ============================================================================

#[test]
fn test_parsers_agree_on_simple_headers() {
    let tree = SkillTree::new();
    tree.add_global("code-review", GOOD_SKILL)
        .add_global("helper", "---\nname: helper\ndescription: Does stuff\n---\nbody\n");

    let (_, yaml_out, _) = run_audit(&tree, &["--format", "json", "--parser", "yaml"]);
    let (_, basic_out, _) = run_audit(&tree, &["--format", "json", "--parser", "basic"]);
    assert_eq!(
        parse_json(&yaml_out)["summary"],
        parse_json(&basic_out)["summary"]
    );
}

#[test]
fn test_workers_preserve_order() {
    let tree = SkillTree::new();
    for name in ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"] {
        tree.add_global(name, &good_skill(name));
    }

    let (_, sequential, _) = run_audit(&tree, &["--format", "json"]);
    let (_, parallel, _) = run_audit(&tree, &["--format", "json", "--workers", "4"]);

    let names = |stdout: &str| -> Vec<String> {
        parse_json(stdout)["skills"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(names(&sequential), names(&parallel));
    assert_eq!(names(&sequential)[0], "alpha");
}

#[test]
fn test_rejects_zero_workers() {
    let tree = SkillTree::new();
    let (code, _, stderr) = run_audit(&tree, &["--workers", "0"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("workers must be at least 1"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_defaults_and_native_ignore() {
    let tree = SkillTree::new();
    tree.add_global("commit", &good_skill("commit"));
    std::fs::write(
        tree.root().join("skillaudit.toml"),
        "[native]\nignore = [\"commit\"]\n\n[defaults]\nformat = \"json\"\n",
    )
    .unwrap();

    let (code, stdout, _) = run_audit(&tree, &[]);
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    assert_eq!(json["skills"][0]["score"]["necessity_score"], 30);
}

#[test]
fn test_init_writes_config() {
    let tree = SkillTree::new();
    let output = Command::new(skillaudit_bin())
        .arg(tree.root())
        .arg("init")
        .output()
        .expect("Failed to run skillaudit init");
    assert_eq!(output.status.code(), Some(0));
    let content = std::fs::read_to_string(tree.root().join("skillaudit.toml")).unwrap();
    assert!(content.contains("[defaults]"));
}
