//! Triage CLI - discovery, export and orchestration for the `triage` binary
//!
//! The binary itself only parses arguments and prints; the actual run lives
//! in [`run`] so integration tests can drive it with injected providers and
//! temporary directories.

#![warn(unreachable_pub)]

pub mod export;
pub mod run;

pub use export::{
    ExportError, PhaseDoc, RoadmapDocument, RoadmapExporter, SuccessMetrics, TaskDoc,
    ROADMAP_PREFIX, STRATEGY, TARGET_SCORE, TIMELINE,
};
pub use run::{run, RunSummary};
