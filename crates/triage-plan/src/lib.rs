//! Triage Plan - the remediation planning core
//!
//! Turns a per-category health report into a phased remediation roadmap:
//! - [`CategoryAnalysis`] finds the weakest and strongest categories
//! - [`TaskGenerator`] applies the [`RuleBook`]'s threshold rules to
//!   synthesize weighted [`OptimizationTask`]s
//! - [`WeightLadder`] classifies weights into discrete [`PriorityTier`]s
//! - [`RoadmapBuilder`] sorts, partitions and aggregates into a [`Roadmap`]
//!
//! The whole pipeline is synchronous, deterministic for a given report,
//! and free of filesystem or network access.
//!
//! # Example
//!
//! ```
//! use triage_plan::prelude::*;
//! use triage_report::{Category, MetricsReport};
//!
//! let report = MetricsReport::from_scores([
//!     (Category::Coverage, 0.6),
//!     (Category::Architecture, 0.9),
//! ]);
//!
//! let ladder = WeightLadder::default();
//! let rules = RuleBook::standard();
//! let analysis = CategoryAnalysis::of(&report)?;
//! let tasks = TaskGenerator::new(ladder, &rules).generate(&report, &analysis);
//! let roadmap = RoadmapBuilder::new(ladder).build(tasks, &analysis);
//!
//! assert_eq!(roadmap.phases.len(), 3);
//! # Ok::<(), triage_plan::PlanError>(())
//! ```

#![warn(unreachable_pub)]

pub mod analysis;
pub mod error;
pub mod generator;
pub mod ladder;
pub mod roadmap;
pub mod rules;
pub mod task;

pub use analysis::CategoryAnalysis;
pub use error::PlanError;
pub use generator::TaskGenerator;
pub use ladder::{PriorityTier, Rung, WeightLadder, DEFAULT_BASE};
pub use roadmap::{Phase, Roadmap, RoadmapBuilder, PHASE_COUNT, PHASE_HEADERS};
pub use rules::{
    RuleBook, RuleWeight, TaskBlueprint, TaskRule, Trigger, PRIMARY_THRESHOLD, SECONDARY_THRESHOLD,
};
pub use task::{Effort, OptimizationTask};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building roadmaps
    pub use crate::{
        CategoryAnalysis, OptimizationTask, PriorityTier, Roadmap, RoadmapBuilder, RuleBook,
        TaskGenerator, WeightLadder,
    };
}
