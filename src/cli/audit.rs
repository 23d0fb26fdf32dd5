//! Audit command - score every discovered skill and render a report

use super::{AuditArgs, MAX_WORKERS};
use crate::audit::Auditor;
use crate::config::{expand_tilde, load_project_config, ProjectConfig};
use crate::discovery::{discover_skills, DiscoveryOptions};
use crate::frontmatter::ParserKind;
use crate::models::AuditReport;
use crate::reporters::{self, OutputFormat, RenderOptions};
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Settings after merging flags, project config and built-in defaults
#[derive(Debug, Clone)]
struct AuditSettings {
    format: OutputFormat,
    parser: ParserKind,
    no_emoji: bool,
    workers: usize,
    discovery: DiscoveryOptions,
}

impl AuditSettings {
    /// Flags win over project config, which wins over built-in defaults
    fn resolve(
        root: &Path,
        args: &AuditArgs,
        workers: Option<usize>,
        config: &ProjectConfig,
    ) -> Result<Self> {
        let format: OutputFormat = args
            .format
            .as_deref()
            .or(config.defaults.format.as_deref())
            .unwrap_or("table")
            .parse()?;
        let parser: ParserKind = args
            .parser
            .as_deref()
            .or(config.defaults.parser.as_deref())
            .unwrap_or("yaml")
            .parse()?;
        let workers = workers
            .or(config.defaults.workers)
            .unwrap_or(1)
            .clamp(1, MAX_WORKERS);

        let mut discovery = DiscoveryOptions::for_root(root);
        if let Some(dir) = args
            .global_dir
            .as_deref()
            .map(expand_tilde)
            .or_else(|| config.global_dir())
        {
            discovery.global_dir = Some(dir);
        }
        if let Some(dir) = args
            .project_dir
            .as_deref()
            .map(expand_tilde)
            .or_else(|| config.project_dir(root))
        {
            discovery.project_dir = dir;
        }
        discovery.include_global = !args.project_only;
        discovery.include_project = !args.global_only;

        Ok(Self {
            format,
            parser,
            no_emoji: args.no_emoji || config.defaults.no_emoji.unwrap_or(false),
            workers,
            discovery,
        })
    }
}

/// Run the audit command
pub fn run(path: &Path, args: &AuditArgs, workers: Option<usize>) -> Result<()> {
    let start_time = Instant::now();
    let root = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let config = load_project_config(&root);
    let settings = AuditSettings::resolve(&root, args, workers, &config)?;
    let quiet = settings.format.is_machine_readable() || args.output.is_some();

    if !quiet {
        print_header(&root, settings.no_emoji);
    }

    let documents = discover_skills(&settings.discovery);
    info!("Discovered {} skills", documents.len());

    if documents.is_empty() && !settings.format.is_machine_readable() {
        let icon = if settings.no_emoji { "" } else { "⚠️  " };
        println!("{}No skills found!", style(icon).yellow());
        return Ok(());
    }
    if documents.is_empty() {
        eprintln!("No skills found");
    }

    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(documents.len() as u64);
        bar.set_style(create_bar_style());
        bar
    };
    let progress = bar.clone();
    let auditor = Auditor::new(settings.parser)
        .with_native_features(config.native_features())
        .with_workers(settings.workers)
        .with_progress_callback(Box::new(move |key, done, _total| {
            progress.set_position(done as u64);
            progress.set_message(key.to_string());
        }));

    let report = auditor.audit_documents(&documents)?;
    bar.finish_and_clear();
    info!(
        "Audited {} skills in {:.2}s",
        report.summary.total_skills,
        start_time.elapsed().as_secs_f64()
    );

    let options = RenderOptions {
        no_emoji: settings.no_emoji,
        color: args.output.is_none() && console::colors_enabled(),
    };
    let rendered = reporters::report_with_format(&report, settings.format, &options)?;

    match &args.output {
        Some(output_path) => {
            std::fs::write(output_path, &rendered).with_context(|| {
                format!("Failed to write report to {}", output_path.display())
            })?;
            let icon = if settings.no_emoji { "" } else { "✅ " };
            println!(
                "{}Report saved to: {}",
                icon,
                style(output_path.display()).cyan()
            );
        }
        None => println!("{rendered}"),
    }

    check_critical_issues(&report)
}

/// Print audit header
fn print_header(root: &Path, no_emoji: bool) {
    let icon_audit = if no_emoji { "" } else { "🔍 " };

    println!("\n{}Auditing OpenCode skills...", style(icon_audit).bold());
    println!("Root: {}", style(root.display()).cyan());
}

/// Create bar progress style
fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .expect("valid progress template")
        .progress_chars("█▓▒░  ")
}

/// Exit nonzero when any skill carries a critical issue
fn check_critical_issues(report: &AuditReport) -> Result<()> {
    if report.has_critical_issues() {
        std::io::stdout().flush()?;
        std::process::exit(1);
    }
    Ok(())
}
