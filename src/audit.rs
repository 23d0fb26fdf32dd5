//! Audit pipeline
//!
//! discover -> sibling snapshot -> per skill: parse, analyze, score -> report.
//!
//! The sibling snapshot is complete before any skill is scored, so scoring
//! is free to run in parallel. Output order always matches discovery order.

use crate::analysis::analyze_content;
use crate::discovery::{discover_skills, read_skill_text, DiscoveryOptions, SkillDocument};
use crate::frontmatter::{extract_metadata, select_parser, FrontmatterParser, ParserKind};
use crate::models::{AuditReport, SkillReport};
use crate::scoring::{
    combine_scores, name_issue, score_metadata, score_necessity, score_quality, NativeFeatures,
    SiblingSet,
};
use anyhow::Result;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// Progress callback: (skill key, done, total)
pub type ProgressCallback = Box<dyn Fn(&str, usize, usize) + Send + Sync>;

/// Scores a set of discovered skills
pub struct Auditor {
    parser: Box<dyn FrontmatterParser>,
    native: NativeFeatures,
    workers: usize,
    progress_callback: Option<ProgressCallback>,
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new(ParserKind::default())
    }
}

impl Auditor {
    pub fn new(parser: ParserKind) -> Self {
        Self {
            parser: select_parser(parser),
            native: NativeFeatures::builtin().clone(),
            workers: 1,
            progress_callback: None,
        }
    }

    /// Replace the native feature table
    pub fn with_native_features(mut self, native: NativeFeatures) -> Self {
        self.native = native;
        self
    }

    /// Number of scoring threads (1 = sequential)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Discover and audit in one step
    pub fn run(&self, options: &DiscoveryOptions) -> Result<AuditReport> {
        let documents = discover_skills(options);
        info!("Discovered {} skills", documents.len());
        self.audit_documents(&documents)
    }

    /// Audit already-discovered documents, in order
    pub fn audit_documents(&self, documents: &[SkillDocument]) -> Result<AuditReport> {
        let siblings: SiblingSet = documents.iter().map(|doc| doc.key.clone()).collect();

        let completed = AtomicUsize::new(0);
        let total = documents.len();
        let score_one = |doc: &SkillDocument| {
            let text = read_skill_text(&doc.path);
            let report = self.audit_skill(doc, &text, &siblings);

            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(ref callback) = self.progress_callback {
                callback(&doc.key.to_string(), done, total);
            }
            report
        };

        let skills: Vec<SkillReport> = if self.workers > 1 && total > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .build()?;
            pool.install(|| documents.par_iter().map(score_one).collect())
        } else {
            documents.iter().map(score_one).collect()
        };

        Ok(AuditReport::new(skills))
    }

    /// Score a single skill document against a sibling snapshot
    pub fn audit_skill(
        &self,
        doc: &SkillDocument,
        text: &str,
        siblings: &SiblingSet,
    ) -> SkillReport {
        let (fields, body) = self.parser.parse(text);
        let metadata = extract_metadata(&fields);
        let analysis = analyze_content(&body);

        let (metadata_score, metadata_issues) = score_metadata(&metadata);
        let (quality_score, quality_issues) = score_quality(&analysis);
        let (necessity_score, necessity_issues) =
            score_necessity(&doc.key, &metadata, siblings, &self.native);

        let mut issues = Vec::new();
        issues.extend(name_issue(&metadata));
        issues.extend(metadata_issues);
        issues.extend(quality_issues);
        issues.extend(necessity_issues);

        let score = combine_scores(metadata_score, quality_score, necessity_score, &issues);
        debug!(
            "{}: {}/{} ({}) {}",
            doc.key, score.total_score, score.max_score, score.grade, score.verdict
        );

        SkillReport {
            key: doc.key.to_string(),
            name: metadata
                .name
                .clone()
                .unwrap_or_else(|| doc.key.name.clone()),
            location: doc.key.location,
            path: doc.path.clone(),
            metadata,
            score,
            issues,
            content_analysis: analysis,
        }
    }
}
