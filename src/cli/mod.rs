//! CLI command definitions and handlers

mod audit;
mod init;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Upper bound for `--workers`
pub const MAX_WORKERS: usize = 64;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > MAX_WORKERS {
        Err(format!("workers cannot exceed {MAX_WORKERS}"))
    } else {
        Ok(n)
    }
}

/// skillaudit - Audit OpenCode skills for quality, necessity, and compliance
#[derive(Parser, Debug)]
#[command(name = "skillaudit")]
#[command(
    version,
    about = "Audit OpenCode skills for quality, necessity, and compliance",
    long_about = "skillaudit scores every SKILL.md in the global and project skill \
collections on metadata completeness, content quality and necessity, then \
recommends KEEP, UPGRADE or DELETE for each.\n\n\
Run without a subcommand to audit from the current directory:\n  \
skillaudit .",
    after_help = "\
Examples:
  skillaudit                                  Audit global and project skills
  skillaudit audit --format detailed          Every issue, worst skills first
  skillaudit audit --format json -o out.json  JSON report for scripting
  skillaudit audit --project-only             Only ./.opencode/skill
  skillaudit init                             Write a skillaudit.toml template

Exit status is 1 when any skill has a critical issue."
)]
pub struct Cli {
    /// Audit root; the project collection is <PATH>/.opencode/skill
    #[arg(global = true, default_value = ".")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Verbose logging (same as --log-level debug)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Number of parallel workers (1-64, default 1)
    #[arg(long, global = true, value_parser = parse_workers)]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log level after applying `--verbose`
    pub fn effective_log_level(&self) -> &str {
        if self.verbose && self.log_level != "trace" {
            "debug"
        } else {
            &self.log_level
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a skillaudit.toml config file with example settings
    Init,

    /// Audit skills and print a report (default command)
    #[command(after_help = "\
Examples:
  skillaudit audit                                   Table of all skills
  skillaudit audit --format markdown -o audit.md     Markdown report file
  skillaudit audit --global-dir ./skills --project-only   Custom locations
  skillaudit audit --parser basic                    Line-based header parsing")]
    Audit(AuditArgs),
}

/// Flags for the `audit` command
#[derive(Args, Debug, Default, Clone)]
pub struct AuditArgs {
    /// Output format: table, detailed, json, markdown (or md)
    #[arg(long, short = 'f', value_parser = ["table", "detailed", "json", "markdown", "md"])]
    pub format: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Only audit global skills
    #[arg(long, conflicts_with = "project_only")]
    pub global_only: bool,

    /// Only audit project skills
    #[arg(long)]
    pub project_only: bool,

    /// Global skill collection (default: ~/.config/opencode/skill)
    #[arg(long, env = "SKILLAUDIT_GLOBAL_DIR")]
    pub global_dir: Option<PathBuf>,

    /// Project skill collection (default: <PATH>/.opencode/skill)
    #[arg(long, env = "SKILLAUDIT_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Header parser: yaml (full YAML) or basic (line-based)
    #[arg(long, value_parser = ["yaml", "basic"])]
    pub parser: Option<String>,

    /// Plain text markers instead of emoji
    #[arg(long)]
    pub no_emoji: bool,
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => init::run(&cli.path),

        Some(Commands::Audit(args)) => audit::run(&cli.path, &args, cli.workers),

        None => {
            // Check if the path looks like an unknown subcommand
            check_unknown_subcommand(&cli.path)?;
            audit::run(&cli.path, &AuditArgs::default(), cli.workers)
        }
    }
}

fn check_unknown_subcommand(path: &std::path::Path) -> anyhow::Result<()> {
    let path_str = path.to_string_lossy();
    let looks_like_command = !path.exists()
        && !path_str.contains('/')
        && !path_str.contains('\\')
        && !path_str.starts_with('.');
    if !looks_like_command {
        return Ok(());
    }
    let known_commands = ["audit", "init"];
    anyhow::bail!(
        "Unknown command '{}'. Run 'skillaudit --help' for available commands.\n\nDid you mean one of: {}?",
        path_str,
        known_commands.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workers() {
        assert_eq!(parse_workers("1"), Ok(1));
        assert_eq!(parse_workers("64"), Ok(64));
        assert!(parse_workers("0").is_err());
        assert!(parse_workers("65").is_err());
        assert!(parse_workers("many").is_err());
    }

    #[test]
    fn test_no_subcommand_defaults() {
        let cli = Cli::try_parse_from(["skillaudit"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.effective_log_level(), "warn");
        assert_eq!(cli.workers, None);
    }

    #[test]
    fn test_audit_flags() {
        let cli = Cli::try_parse_from([
            "skillaudit",
            "audit",
            "--format",
            "md",
            "-o",
            "report.md",
            "--project-only",
            "--parser",
            "basic",
            "--no-emoji",
            "--workers",
            "4",
        ])
        .unwrap();
        assert_eq!(cli.workers, Some(4));
        let Some(Commands::Audit(args)) = cli.command else {
            panic!("expected audit command");
        };
        assert_eq!(args.format.as_deref(), Some("md"));
        assert_eq!(args.output, Some(PathBuf::from("report.md")));
        assert!(args.project_only);
        assert!(!args.global_only);
        assert_eq!(args.parser.as_deref(), Some("basic"));
        assert!(args.no_emoji);
    }

    #[test]
    fn test_global_only_conflicts_with_project_only() {
        let result =
            Cli::try_parse_from(["skillaudit", "audit", "--global-only", "--project-only"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["skillaudit", "audit", "--format", "sarif"]).is_err());
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let cli = Cli::try_parse_from(["skillaudit", "-v"]).unwrap();
        assert_eq!(cli.effective_log_level(), "debug");

        let cli = Cli::try_parse_from(["skillaudit", "-v", "--log-level", "trace"]).unwrap();
        assert_eq!(cli.effective_log_level(), "trace");
    }

    #[test]
    fn test_path_before_subcommand() {
        let cli = Cli::try_parse_from(["skillaudit", "/tmp/repo", "audit"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("/tmp/repo"));
        assert!(matches!(cli.command, Some(Commands::Audit(_))));
    }

    #[test]
    fn test_unknown_subcommand_hint() {
        let err = check_unknown_subcommand(std::path::Path::new("analyse")).unwrap_err();
        assert!(err.to_string().contains("Unknown command 'analyse'"));
        assert!(check_unknown_subcommand(std::path::Path::new(".")).is_ok());
    }
}
