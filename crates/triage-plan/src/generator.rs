//! Task generation
//!
//! Walks the report in declaration order, evaluates each category's rules
//! in their declared order, and appends one task per firing rule. The
//! resulting creation order (primary before secondary, categories in
//! report order) is the tie-break the roadmap builder's stable sort
//! preserves, so it must not be disturbed here.

use crate::analysis::CategoryAnalysis;
use crate::ladder::WeightLadder;
use crate::rules::{RuleBook, RuleWeight, TaskBlueprint};
use crate::task::OptimizationTask;
use tracing::debug;
use triage_report::{Category, MetricsReport};

/// Generates candidate remediation tasks from a report.
#[derive(Debug)]
pub struct TaskGenerator<'a> {
    ladder: WeightLadder,
    rules: &'a RuleBook,
}

impl<'a> TaskGenerator<'a> {
    /// Create a generator over a ladder and rule book.
    #[inline]
    #[must_use]
    pub fn new(ladder: WeightLadder, rules: &'a RuleBook) -> Self {
        Self { ladder, rules }
    }

    /// Generate all tasks for a report.
    ///
    /// A category with no firing rule contributes zero tasks; that is
    /// expected behavior, not an error. No side effects beyond the
    /// returned records.
    #[must_use]
    pub fn generate(
        &self,
        report: &MetricsReport,
        analysis: &CategoryAnalysis,
    ) -> Vec<OptimizationTask> {
        let mut tasks = Vec::new();
        for (category, score) in report.iter() {
            for rule in self.rules.rules_for(category) {
                if !rule.trigger.fires(score) {
                    continue;
                }
                let weight = match rule.weight {
                    RuleWeight::Escalating if category == analysis.weakest => self.ladder.cubed(),
                    RuleWeight::Escalating => self.ladder.squared(),
                    RuleWeight::Fixed(rung) => self.ladder.rung(rung),
                };
                debug!(id = %rule.blueprint.id, %category, score, weight, "rule fired");
                tasks.push(instantiate(&rule.blueprint, category, weight));
            }
        }
        tasks
    }
}

fn instantiate(blueprint: &TaskBlueprint, category: Category, weight: f64) -> OptimizationTask {
    OptimizationTask {
        id: blueprint.id.clone(),
        title: blueprint.title.clone(),
        description: blueprint.description.clone(),
        category,
        priority_weight: weight,
        implementation_steps: blueprint.implementation_steps.clone(),
        success_criteria: blueprint.success_criteria.clone(),
        estimated_effort: blueprint.estimated_effort,
        expected_impact: blueprint.expected_impact,
    }
}
