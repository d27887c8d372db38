//! End-to-end planning scenarios over the full pipeline.

use pretty_assertions::assert_eq;
use triage_plan::prelude::*;
use triage_plan::{Effort, TaskBlueprint, TaskRule};
use triage_report::{Category, MetricsReport};

fn primary_only_book() -> RuleBook {
    // One escalating primary rule per category; no secondary or
    // continuous rules.
    let mut book = RuleBook::new();
    for category in Category::ALL {
        book = book.with_rule(
            category,
            TaskRule::primary(TaskBlueprint::new(
                format!("{}-P", category.key().to_uppercase()),
                format!("remediate {category}"),
                Effort::Medium,
                0.8,
            )),
        );
    }
    book
}

fn plan(report: &MetricsReport, book: &RuleBook) -> Roadmap {
    let ladder = WeightLadder::default();
    let analysis = CategoryAnalysis::of(report).unwrap();
    let tasks = TaskGenerator::new(ladder, book).generate(report, &analysis);
    RoadmapBuilder::new(ladder).build(tasks, &analysis)
}

#[test]
fn mixed_scores_fill_phase_one_in_priority_order() {
    let book = primary_only_book();
    let report = MetricsReport::from_scores([
        (Category::Coverage, 0.6),
        (Category::Architecture, 0.9),
        (Category::Scalability, 0.65),
        (Category::Performance, 0.4),
        (Category::Consistency, 0.75),
    ]);
    let roadmap = plan(&report, &book);

    // Performance is weakest (0.4): cubed weight, Critical, first.
    // Coverage and Scalability land at squared weight in report order.
    // Architecture and Consistency are at or above the gate: no tasks.
    let ids: Vec<&str> = roadmap.phases[0]
        .tasks
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["PERFORMANCE-P", "COVERAGE-P", "SCALABILITY-P"]);

    let ladder = WeightLadder::default();
    assert_eq!(
        roadmap.phases[0].tasks[0].tier(&ladder),
        PriorityTier::Critical
    );
    assert_eq!(roadmap.phases[0].tasks[1].tier(&ladder), PriorityTier::High);

    assert!(roadmap.phases[1].is_empty());
    assert!(roadmap.phases[2].is_empty());
    assert_eq!(roadmap.phases[1].aggregate_impact, 0.0);
    assert_eq!(roadmap.phases[2].aggregate_impact, 0.0);
    assert_eq!(roadmap.weakest, Category::Performance);
    assert_eq!(roadmap.strongest, Category::Architecture);
}

#[test]
fn all_healthy_scores_yield_an_empty_roadmap() {
    let book = RuleBook::standard();
    let report = MetricsReport::from_scores([
        (Category::Coverage, 0.85),
        (Category::Architecture, 0.9),
        (Category::Scalability, 0.8),
        (Category::Performance, 0.95),
        (Category::Consistency, 0.82),
    ]);
    let roadmap = plan(&report, &book);

    assert_eq!(roadmap.total_tasks(), 0);
    for phase in &roadmap.phases {
        assert!(phase.is_empty());
        assert_eq!(phase.aggregate_impact, 0.0);
    }
    assert!(roadmap.top_task().is_none());
}

#[test]
fn standard_book_mid_band_scores_populate_later_phases() {
    let book = RuleBook::standard();
    let report = MetricsReport::from_scores([
        (Category::Coverage, 0.75),
        (Category::Architecture, 0.9),
        (Category::Performance, 0.75),
    ]);
    let roadmap = plan(&report, &book);

    // Coverage secondary lands at w² (Phase 1), the continuous
    // performance rule at w (Phase 2).
    assert_eq!(roadmap.phases[0].tasks[0].id, "COV-002");
    assert_eq!(roadmap.phases[1].tasks[0].id, "PERF-002");
    assert!(roadmap.phases[2].is_empty());
}

#[test]
fn rerun_on_same_input_is_identical() {
    let book = RuleBook::standard();
    let report = MetricsReport::from_scores([
        (Category::Coverage, 0.6),
        (Category::Architecture, 0.6),
        (Category::Scalability, 0.6),
        (Category::Performance, 0.6),
        (Category::Consistency, 0.6),
    ]);
    let first = plan(&report, &book);
    let second = plan(&report, &book);
    assert_eq!(first, second);
}

#[test]
fn equal_scores_tie_break_by_report_order() {
    // Every category at the same failing score: the first report entry is
    // the weakest, so only it escalates to Critical.
    let book = primary_only_book();
    let report = MetricsReport::from_scores([
        (Category::Consistency, 0.5),
        (Category::Coverage, 0.5),
        (Category::Performance, 0.5),
    ]);
    let roadmap = plan(&report, &book);

    let ids: Vec<&str> = roadmap.phases[0]
        .tasks
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["CONSISTENCY-P", "COVERAGE-P", "PERFORMANCE-P"]);
    assert_eq!(roadmap.weakest, Category::Consistency);
}

#[test]
fn tie_breaks_follow_parsed_document_order() {
    // Keys arrive in non-alphabetical document order; with equal scores
    // the first document entry must be the weakest and escalate to w³.
    let book = primary_only_book();
    let report = MetricsReport::from_json_str(
        r#"{"overall_analysis": {"average_scores":
            {"performance": 0.5, "coverage": 0.5}}}"#,
    )
    .unwrap();
    let roadmap = plan(&report, &book);

    assert_eq!(roadmap.weakest, Category::Performance);
    let ids: Vec<&str> = roadmap.phases[0]
        .tasks
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["PERFORMANCE-P", "COVERAGE-P"]);

    let ladder = WeightLadder::default();
    assert_eq!(
        roadmap.phases[0].tasks[0].priority_weight,
        ladder.cubed()
    );
}

#[test]
fn empty_report_aborts_before_generation() {
    let report = MetricsReport::from_scores([]);
    assert!(CategoryAnalysis::of(&report).is_err());
}
