//! Roadmap building
//!
//! Stably sorts the generated tasks by descending weight, partitions the
//! single sorted sequence into three phases by tier range, and computes
//! each phase's aggregate expected impact. Phases are contiguous slices of
//! one globally sorted sequence; they are never re-sorted independently.

use crate::analysis::CategoryAnalysis;
use crate::ladder::{PriorityTier, WeightLadder};
use crate::task::OptimizationTask;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Number of execution phases in every roadmap.
pub const PHASE_COUNT: usize = 3;

/// Fixed phase names and descriptions, in execution order.
pub const PHASE_HEADERS: [(&str, &str); PHASE_COUNT] = [
    (
        "Critical Foundation",
        "Address the highest-priority remediation first",
    ),
    (
        "Progressive Enhancement",
        "Implement scalable improvements on the stabilized base",
    ),
    (
        "Continuous Optimization",
        "Maintain and refine health on an ongoing basis",
    ),
];

/// One execution phase: a contiguous bucket of the sorted task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase name
    pub name: String,
    /// What the phase is for
    pub description: String,
    /// Tasks in descending-weight order
    pub tasks: Vec<OptimizationTask>,
    /// Mean expected impact of the phase's tasks; `0.0` when empty
    pub aggregate_impact: f64,
}

impl Phase {
    fn new(name: &str, description: &str, tasks: Vec<OptimizationTask>) -> Self {
        let aggregate_impact = if tasks.is_empty() {
            0.0
        } else {
            tasks.iter().map(|t| t.expected_impact).sum::<f64>() / tasks.len() as f64
        };
        Self {
            name: name.to_string(),
            description: description.to_string(),
            tasks,
            aggregate_impact,
        }
    }

    /// Number of tasks in the phase.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the phase holds no tasks.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The final ordered set of phases produced for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Roadmap {
    /// Exactly three phases partitioning the generated task set
    pub phases: [Phase; PHASE_COUNT],
    /// Weakest category the plan was built around
    pub weakest: triage_report::Category,
    /// Strongest category of the analyzed report
    pub strongest: triage_report::Category,
}

impl Roadmap {
    /// All tasks across every phase, in global priority order.
    pub fn tasks(&self) -> impl Iterator<Item = &OptimizationTask> {
        self.phases.iter().flat_map(|p| p.tasks.iter())
    }

    /// Total number of tasks.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.phases.iter().map(Phase::len).sum()
    }

    /// The single highest-priority task, if any tasks exist.
    #[must_use]
    pub fn top_task(&self) -> Option<&OptimizationTask> {
        self.tasks().next()
    }
}

/// Builds a [`Roadmap`] out of generated tasks.
#[derive(Debug, Clone, Copy)]
pub struct RoadmapBuilder {
    ladder: WeightLadder,
}

impl RoadmapBuilder {
    /// Create a builder over a ladder.
    #[inline]
    #[must_use]
    pub fn new(ladder: WeightLadder) -> Self {
        Self { ladder }
    }

    /// Build the roadmap.
    ///
    /// The sort is stable, so tasks with equal weight keep the relative
    /// order established by the generator. Partitioning follows the tier
    /// classifier exactly: Phase 1 holds Critical and High, Phase 2
    /// Medium, Phase 3 Low, so the phases always partition the full set.
    #[must_use]
    pub fn build(&self, mut tasks: Vec<OptimizationTask>, analysis: &CategoryAnalysis) -> Roadmap {
        tasks.sort_by(|a, b| b.priority_weight.total_cmp(&a.priority_weight));

        let mut buckets: [Vec<OptimizationTask>; PHASE_COUNT] =
            [Vec::new(), Vec::new(), Vec::new()];
        for task in tasks {
            let slot = match task.tier(&self.ladder) {
                PriorityTier::Critical | PriorityTier::High => 0,
                PriorityTier::Medium => 1,
                PriorityTier::Low => 2,
            };
            buckets[slot].push(task);
        }

        let [first, second, third] = buckets;
        let phases = [
            Phase::new(PHASE_HEADERS[0].0, PHASE_HEADERS[0].1, first),
            Phase::new(PHASE_HEADERS[1].0, PHASE_HEADERS[1].1, second),
            Phase::new(PHASE_HEADERS[2].0, PHASE_HEADERS[2].1, third),
        ];
        info!(
            phase_1 = phases[0].len(),
            phase_2 = phases[1].len(),
            phase_3 = phases[2].len(),
            "roadmap built"
        );

        Roadmap {
            phases,
            weakest: analysis.weakest,
            strongest: analysis.strongest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Effort;
    use triage_report::Category;

    fn task(id: &str, weight: f64, impact: f64) -> OptimizationTask {
        OptimizationTask {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            category: Category::Coverage,
            priority_weight: weight,
            implementation_steps: vec![],
            success_criteria: vec![],
            estimated_effort: Effort::Small,
            expected_impact: impact,
        }
    }

    fn analysis() -> CategoryAnalysis {
        CategoryAnalysis {
            weakest: Category::Coverage,
            strongest: Category::Architecture,
        }
    }

    fn builder() -> RoadmapBuilder {
        RoadmapBuilder::new(WeightLadder::new(2.0))
    }

    #[test]
    fn sorts_descending_and_partitions_by_tier() {
        // Ladder base 2: w=2, w²=4, w³=8.
        let tasks = vec![
            task("medium", 2.0, 0.5),
            task("critical", 8.0, 0.9),
            task("low", 1.0, 0.2),
            task("high", 4.0, 0.7),
        ];
        let roadmap = builder().build(tasks, &analysis());

        let ids: Vec<&str> = roadmap.phases[0].tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["critical", "high"]);
        assert_eq!(roadmap.phases[1].tasks[0].id, "medium");
        assert_eq!(roadmap.phases[2].tasks[0].id, "low");
    }

    #[test]
    fn equal_weights_keep_generator_order() {
        let tasks = vec![
            task("first", 4.0, 0.5),
            task("second", 4.0, 0.5),
            task("third", 4.0, 0.5),
        ];
        let roadmap = builder().build(tasks, &analysis());
        let ids: Vec<&str> = roadmap.phases[0].tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn aggregate_impact_is_the_mean() {
        let tasks = vec![task("a", 8.0, 0.6), task("b", 4.0, 0.8)];
        let roadmap = builder().build(tasks, &analysis());
        assert!((roadmap.phases[0].aggregate_impact - 0.7).abs() < 1e-12);
    }

    #[test]
    fn empty_phase_has_zero_impact() {
        let roadmap = builder().build(vec![], &analysis());
        for phase in &roadmap.phases {
            assert!(phase.is_empty());
            assert_eq!(phase.aggregate_impact, 0.0);
        }
        assert_eq!(roadmap.total_tasks(), 0);
        assert!(roadmap.top_task().is_none());
    }

    #[test]
    fn top_task_is_global_maximum() {
        let tasks = vec![task("low", 1.0, 0.2), task("critical", 8.0, 0.9)];
        let roadmap = builder().build(tasks, &analysis());
        assert_eq!(roadmap.top_task().unwrap().id, "critical");
    }

    #[test]
    fn phase_names_are_fixed_and_ordered() {
        let roadmap = builder().build(vec![], &analysis());
        assert_eq!(roadmap.phases[0].name, "Critical Foundation");
        assert_eq!(roadmap.phases[1].name, "Progressive Enhancement");
        assert_eq!(roadmap.phases[2].name, "Continuous Optimization");
    }
}
