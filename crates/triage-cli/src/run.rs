//! One planning run, end to end
//!
//! Load the latest report through the injected provider, analyze, generate,
//! build, export. Every fatal condition aborts immediately with a
//! diagnostic naming the missing or invalid resource; nothing is retried
//! and no partial document is ever written.

use crate::export::{RoadmapDocument, RoadmapExporter};
use anyhow::Context;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::info;
use triage_plan::prelude::*;
use triage_report::ReportProvider;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Path of the exported roadmap document
    pub output_path: PathBuf,
    /// Per-phase `(name, task count)` in execution order
    pub phase_counts: Vec<(String, usize)>,
    /// Total number of generated tasks
    pub total_tasks: usize,
    /// Head of the document's next-action list
    pub next_action: String,
}

/// Execute one full planning run.
pub fn run(provider: &dyn ReportProvider, out_dir: &Path) -> anyhow::Result<RunSummary> {
    let report = provider.latest().context("loading metrics report")?;

    let ladder = WeightLadder::default();
    let rules = RuleBook::standard();
    let analysis = CategoryAnalysis::of(&report).context("analyzing metrics report")?;
    info!(
        weakest = %analysis.weakest,
        strongest = %analysis.strongest,
        categories = report.len(),
        "analyzed report"
    );

    let tasks = TaskGenerator::new(ladder, &rules).generate(&report, &analysis);
    let roadmap = RoadmapBuilder::new(ladder).build(tasks, &analysis);

    let document = RoadmapDocument::render(&roadmap, &report, &ladder, Utc::now());
    let output_path = RoadmapExporter::new(out_dir)
        .export(&document)
        .context("exporting roadmap document")?;

    Ok(RunSummary {
        output_path,
        phase_counts: roadmap
            .phases
            .iter()
            .map(|p| (p.name.clone(), p.len()))
            .collect(),
        total_tasks: roadmap.total_tasks(),
        next_action: document
            .next_actions
            .first()
            .cloned()
            .unwrap_or_default(),
    })
}
