//! Remediation task records

use crate::ladder::{PriorityTier, WeightLadder};
use serde::{Deserialize, Serialize};
use triage_report::Category;

/// Rough implementation cost of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effort {
    /// Hours to a day
    Small,
    /// A few days
    Medium,
    /// A week or more
    Large,
}

impl Effort {
    /// Human-readable effort name.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Effort::Small => "Small",
            Effort::Medium => "Medium",
            Effort::Large => "Large",
        }
    }
}

/// One candidate remediation action.
///
/// Note the deliberately absent field: the priority tier is not stored.
/// It is a pure function of `priority_weight` ([`OptimizationTask::tier`]),
/// so it can never drift out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationTask {
    /// Stable identifier, unique within a run
    pub id: String,
    /// Short human-readable title
    pub title: String,
    /// What the task remediates and why
    pub description: String,
    /// Category this task remediates
    pub category: Category,
    /// Weight from the geometric ladder; higher runs earlier
    pub priority_weight: f64,
    /// Ordered execution steps (order is significant)
    pub implementation_steps: Vec<String>,
    /// Completion criteria (order-insignificant)
    pub success_criteria: Vec<String>,
    /// Rough implementation cost
    pub estimated_effort: Effort,
    /// Expected health improvement in `[0, 1]`
    pub expected_impact: f64,
}

impl OptimizationTask {
    /// Derived priority tier under the given ladder.
    #[inline]
    #[must_use]
    pub fn tier(&self, ladder: &WeightLadder) -> PriorityTier {
        ladder.classify(self.priority_weight)
    }
}
