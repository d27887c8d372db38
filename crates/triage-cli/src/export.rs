//! Roadmap document export
//!
//! Serializes a built [`Roadmap`] into the document the reporting
//! collaborator consumes and writes it next to the analysis reports. The
//! document is rendered fully in memory before any file is created, so a
//! failed write never leaves a partial artifact and the in-memory roadmap
//! stays valid for a retry.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;
use triage_plan::{OptimizationTask, Roadmap, WeightLadder};
use triage_report::MetricsReport;

/// Fixed strategy label embedded in every document.
pub const STRATEGY: &str = "geometric-ladder prioritization";

/// Health score the roadmap drives toward.
pub const TARGET_SCORE: f64 = 0.85;

/// Textual delivery timeline for the three phases.
pub const TIMELINE: &str = "6-8 weeks";

/// Filename prefix of exported roadmaps.
pub const ROADMAP_PREFIX: &str = "remediation_roadmap_";

/// One serialized task, with its derived tier spelled out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDoc {
    /// Stable task identifier
    pub id: String,
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// Wire key of the remediated category
    pub category: String,
    /// Priority weight on the geometric ladder
    pub priority_weight: f64,
    /// Tier name derived from the weight at export time
    pub priority_tier: String,
    /// Ordered execution steps
    pub implementation_steps: Vec<String>,
    /// Completion criteria
    pub success_criteria: Vec<String>,
    /// Rough cost
    pub estimated_effort: String,
    /// Expected health improvement in `[0, 1]`
    pub expected_impact: f64,
}

impl TaskDoc {
    fn render(task: &OptimizationTask, ladder: &WeightLadder) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            category: task.category.key().to_string(),
            priority_weight: task.priority_weight,
            priority_tier: task.tier(ladder).as_str().to_string(),
            implementation_steps: task.implementation_steps.clone(),
            success_criteria: task.success_criteria.clone(),
            estimated_effort: task.estimated_effort.as_str().to_string(),
            expected_impact: task.expected_impact,
        }
    }
}

/// One serialized phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseDoc {
    /// Phase name
    pub name: String,
    /// Phase description
    pub description: String,
    /// Tasks in priority order
    pub tasks: Vec<TaskDoc>,
    /// Phase aggregate impact
    pub expected_impact: f64,
}

/// Targets the roadmap is measured against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessMetrics {
    /// Per-category score the remediation drives toward
    pub target_score: f64,
    /// Expected delivery timeline
    pub timeline: String,
    /// Category identified as weakest in this run
    pub weakest_category: String,
}

/// The exported roadmap document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapDocument {
    /// Generation timestamp (also embedded in the filename)
    pub generated_at: DateTime<Utc>,
    /// Scores the plan was derived from, in report order
    pub current_scores: IndexMap<String, f64>,
    /// Fixed strategy label
    pub strategy: String,
    /// The three phases in execution order
    pub phases: Vec<PhaseDoc>,
    /// Targets for the run
    pub success_metrics: SuccessMetrics,
    /// Short action list headed by the highest-priority task
    pub next_actions: Vec<String>,
}

impl RoadmapDocument {
    /// Render a roadmap into its document form.
    #[must_use]
    pub fn render(
        roadmap: &Roadmap,
        report: &MetricsReport,
        ladder: &WeightLadder,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let phases = roadmap
            .phases
            .iter()
            .map(|phase| PhaseDoc {
                name: phase.name.clone(),
                description: phase.description.clone(),
                tasks: phase
                    .tasks
                    .iter()
                    .map(|t| TaskDoc::render(t, ladder))
                    .collect(),
                expected_impact: phase.aggregate_impact,
            })
            .collect();

        Self {
            generated_at,
            current_scores: report
                .iter()
                .map(|(c, s)| (c.key().to_string(), s))
                .collect(),
            strategy: STRATEGY.to_string(),
            phases,
            success_metrics: SuccessMetrics {
                target_score: TARGET_SCORE,
                timeline: TIMELINE.to_string(),
                weakest_category: roadmap.weakest.key().to_string(),
            },
            next_actions: next_actions(roadmap),
        }
    }
}

fn next_actions(roadmap: &Roadmap) -> Vec<String> {
    let Some(top) = roadmap.top_task() else {
        return vec!["No optimization opportunities found".to_string()];
    };
    vec![
        format!("Start: {}", top.title),
        format!("Focus on {} improvements", roadmap.weakest),
        "Re-run the health analysis to track progress".to_string(),
    ]
}

/// Errors raised while exporting a document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The document could not be serialized
    #[error("failed to serialize roadmap document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the serialized document failed
    #[error("failed to write roadmap to {path}: {source}")]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },
}

/// Writes roadmap documents into a directory.
#[derive(Debug, Clone)]
pub struct RoadmapExporter {
    dir: PathBuf,
}

impl RoadmapExporter {
    /// Create an exporter writing into `dir`.
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Serialize and write a document; returns the output path.
    ///
    /// The filename embeds the document's generation timestamp, so prior
    /// runs are never overwritten.
    pub fn export(&self, document: &RoadmapDocument) -> Result<PathBuf, ExportError> {
        let text = serde_json::to_string_pretty(document)?;
        let path = self.dir.join(format!(
            "{ROADMAP_PREFIX}{}.json",
            document.generated_at.timestamp()
        ));
        std::fs::write(&path, text).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "roadmap exported");
        Ok(path)
    }
}
