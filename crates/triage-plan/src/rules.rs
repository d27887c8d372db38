//! Rule book: per-category task templates and their firing conditions
//!
//! Each category owns an ordered list of [`TaskRule`]s. Rules are evaluated
//! independently and non-exclusively, so one category can contribute zero,
//! one or two tasks in a run. The production book lives in
//! [`RuleBook::standard`]; the match there is exhaustive over the closed
//! [`Category`] set, so adding a category without rules fails to compile.

use crate::ladder::Rung;
use crate::task::Effort;
use indexmap::IndexMap;
use triage_report::Category;

/// Score below which a category's primary rule fires.
pub const PRIMARY_THRESHOLD: f64 = 0.7;

/// Score below which a category's secondary rule fires.
pub const SECONDARY_THRESHOLD: f64 = 0.8;

/// Firing condition of a rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Fires when the category score is below the threshold
    Below(f64),
    /// Fires regardless of score
    Always,
}

impl Trigger {
    /// Whether the rule fires for a score.
    #[inline]
    #[must_use]
    pub fn fires(&self, score: f64) -> bool {
        match self {
            Trigger::Below(threshold) => score < *threshold,
            Trigger::Always => true,
        }
    }
}

/// How a firing rule picks its weight on the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleWeight {
    /// `w³` when the category is the report's weakest, `w²` otherwise
    Escalating,
    /// A fixed rung
    Fixed(Rung),
}

/// Static content of the task a rule produces.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBlueprint {
    /// Stable task identifier
    pub id: String,
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// Ordered execution steps
    pub implementation_steps: Vec<String>,
    /// Completion criteria
    pub success_criteria: Vec<String>,
    /// Rough cost
    pub estimated_effort: Effort,
    /// Expected health improvement in `[0, 1]`
    pub expected_impact: f64,
}

impl TaskBlueprint {
    /// Create a blueprint with empty steps and criteria.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        estimated_effort: Effort,
        expected_impact: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            implementation_steps: Vec::new(),
            success_criteria: Vec::new(),
            estimated_effort,
            expected_impact: expected_impact.clamp(0.0, 1.0),
        }
    }

    /// Set the description.
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the ordered implementation steps.
    #[must_use]
    pub fn with_steps<S: Into<String>>(mut self, steps: impl IntoIterator<Item = S>) -> Self {
        self.implementation_steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Set the success criteria.
    #[must_use]
    pub fn with_criteria<S: Into<String>>(mut self, criteria: impl IntoIterator<Item = S>) -> Self {
        self.success_criteria = criteria.into_iter().map(Into::into).collect();
        self
    }
}

/// One threshold rule.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRule {
    /// When the rule fires
    pub trigger: Trigger,
    /// How the fired task is weighted
    pub weight: RuleWeight,
    /// What the fired task says
    pub blueprint: TaskBlueprint,
}

impl TaskRule {
    /// Create a rule.
    #[inline]
    #[must_use]
    pub fn new(trigger: Trigger, weight: RuleWeight, blueprint: TaskBlueprint) -> Self {
        Self {
            trigger,
            weight,
            blueprint,
        }
    }

    /// Shorthand for an escalating primary rule at the shared gate.
    #[inline]
    #[must_use]
    pub fn primary(blueprint: TaskBlueprint) -> Self {
        Self::new(
            Trigger::Below(PRIMARY_THRESHOLD),
            RuleWeight::Escalating,
            blueprint,
        )
    }
}

/// Ordered per-category rule lists.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: IndexMap<Category, Vec<TaskRule>>,
}

impl RuleBook {
    /// Create an empty book.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to a category (builder style; evaluation order is
    /// append order, primary before secondary).
    #[must_use]
    pub fn with_rule(mut self, category: Category, rule: TaskRule) -> Self {
        self.rules.entry(category).or_default().push(rule);
        self
    }

    /// Rules of a category, in evaluation order.
    #[must_use]
    pub fn rules_for(&self, category: Category) -> &[TaskRule] {
        self.rules.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Total number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    /// True when no category has rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The production rule book.
    ///
    /// The continuous performance rule is gated at the secondary threshold
    /// rather than firing unconditionally; an all-healthy report must
    /// produce an empty roadmap.
    #[must_use]
    pub fn standard() -> Self {
        let mut book = Self::new();
        for category in Category::ALL {
            for rule in standard_rules(category) {
                book = book.with_rule(category, rule);
            }
        }
        book
    }
}

fn standard_rules(category: Category) -> Vec<TaskRule> {
    match category {
        Category::Coverage => vec![
            TaskRule::primary(
                TaskBlueprint::new(
                    "COV-001",
                    "Raise automated test coverage across core modules",
                    Effort::Large,
                    0.85,
                )
                .with_description(
                    "Expand unit and integration coverage until every core module is \
                     exercised by the quality gate",
                )
                .with_steps([
                    "Audit current coverage per module",
                    "Add unit tests for uncovered branches in core modules",
                    "Add integration tests for cross-module flows",
                    "Wire coverage reporting into the quality gate",
                    "Fail the gate below the agreed coverage floor",
                ])
                .with_criteria([
                    "Line coverage above 80% workspace-wide",
                    "Coverage score above 0.8 in the next analysis",
                    "Coverage gate enforced in CI",
                ]),
            ),
            TaskRule::new(
                Trigger::Below(SECONDARY_THRESHOLD),
                RuleWeight::Fixed(Rung::Squared),
                TaskBlueprint::new(
                    "COV-002",
                    "Close documentation gaps in public APIs",
                    Effort::Medium,
                    0.7,
                )
                .with_description(
                    "Document every public surface so completeness covers readers as \
                     well as tests",
                )
                .with_steps([
                    "Inventory undocumented public items",
                    "Document every public module and type",
                    "Add runnable examples to crate-level docs",
                    "Enable the missing-docs lint in the workspace",
                ])
                .with_criteria([
                    "No undocumented public items",
                    "Docs build without warnings",
                    "Examples compile as doctests",
                ]),
            ),
        ],
        Category::Architecture => vec![TaskRule::primary(
            TaskBlueprint::new(
                "ARCH-001",
                "Stabilize module boundaries and dependency depth",
                Effort::Large,
                0.9,
            )
            .with_description(
                "Restructure overgrown modules so the dependency graph stays shallow \
                 and acyclic",
            )
            .with_steps([
                "Map the current dependency graph",
                "Split cyclic or overgrown modules along seam interfaces",
                "Cap dependency depth at five levels",
                "Move shared types behind explicit boundary crates",
                "Add an architectural conformance test",
            ])
            .with_criteria([
                "Architecture score above 0.8",
                "No dependency chain deeper than five levels",
                "No cyclic module dependencies",
            ]),
        )],
        Category::Scalability => vec![TaskRule::primary(
            TaskBlueprint::new(
                "SCALE-001",
                "Introduce progressive capacity scaling",
                Effort::Medium,
                0.75,
            )
            .with_description(
                "Grow capacity in measured increments instead of single-instance limits",
            )
            .with_steps([
                "Profile throughput at current and ten-times load",
                "Identify single-instance bottlenecks",
                "Design incremental scale-out for the hot services",
                "Add capacity metrics and alerts",
            ])
            .with_criteria([
                "Scalability score above 0.8",
                "Documented scale-out plan per hot service",
                "Capacity metrics tracked per release",
            ]),
        )],
        Category::Performance => vec![
            TaskRule::primary(
                TaskBlueprint::new(
                    "PERF-001",
                    "Eliminate hot-path bottlenecks",
                    Effort::Large,
                    0.95,
                )
                .with_description(
                    "Profile under representative load and remove the dominant costs",
                )
                .with_steps([
                    "Capture CPU and allocation profiles under representative load",
                    "Rank hot paths by inclusive cost",
                    "Remove avoidable allocation and copying in the top paths",
                    "Tune cache sizes, timeouts and retry intervals",
                    "Re-profile and compare against the stored baseline",
                ])
                .with_criteria([
                    "Performance score above 0.8",
                    "Top hot path at least 20% faster",
                    "No regression in peak memory",
                ]),
            ),
            TaskRule::new(
                Trigger::Below(SECONDARY_THRESHOLD),
                RuleWeight::Fixed(Rung::Base),
                TaskBlueprint::new(
                    "PERF-002",
                    "Continuous profiling and tuning",
                    Effort::Medium,
                    0.8,
                )
                .with_description(
                    "Keep a profiling baseline current and tune regressions as they appear",
                )
                .with_steps([
                    "Run the profiling suite on every release build",
                    "Track regressions against the stored baseline",
                    "Schedule tuning passes for flagged paths",
                ])
                .with_criteria([
                    "Profiling baseline stays current",
                    "Regressions triaged within one release",
                ]),
            ),
        ],
        Category::Consistency => vec![TaskRule::primary(
            TaskBlueprint::new(
                "CONS-001",
                "Align conventions across the workspace",
                Effort::Medium,
                0.7,
            )
            .with_description(
                "Make naming, layout and lint configuration uniform across crates",
            )
            .with_steps([
                "Adopt a single shared lint and format configuration",
                "Normalize naming and module layout in divergent crates",
                "Enforce the configuration in the quality gate",
            ])
            .with_criteria([
                "Consistency score above 0.8",
                "Zero lint or format drift in CI",
            ]),
        )],
    }
}
