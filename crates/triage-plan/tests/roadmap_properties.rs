//! Property tests for ordering, partitioning and aggregation.

use proptest::prelude::*;
use triage_plan::{
    CategoryAnalysis, Effort, OptimizationTask, PriorityTier, RoadmapBuilder, WeightLadder,
};
use triage_report::Category;

fn task(seq: usize, weight: f64, impact: f64) -> OptimizationTask {
    OptimizationTask {
        id: format!("T-{seq:03}"),
        title: format!("task {seq}"),
        description: String::new(),
        category: Category::ALL[seq % Category::ALL.len()],
        priority_weight: weight,
        implementation_steps: vec![],
        success_criteria: vec![],
        estimated_effort: Effort::Small,
        expected_impact: impact,
    }
}

fn analysis() -> CategoryAnalysis {
    CategoryAnalysis {
        weakest: Category::Performance,
        strongest: Category::Architecture,
    }
}

prop_compose! {
    fn arb_tasks()(specs in prop::collection::vec((0.1f64..10.0, 0.0f64..1.0), 0..40))
        -> Vec<OptimizationTask>
    {
        specs
            .into_iter()
            .enumerate()
            .map(|(seq, (weight, impact))| task(seq, weight, impact))
            .collect()
    }
}

proptest! {
    // Every task lands in the phase its derived tier dictates.
    #[test]
    fn tier_matches_phase(tasks in arb_tasks()) {
        let ladder = WeightLadder::new(2.0);
        let roadmap = RoadmapBuilder::new(ladder).build(tasks, &analysis());

        for task in &roadmap.phases[0].tasks {
            prop_assert!(matches!(
                task.tier(&ladder),
                PriorityTier::Critical | PriorityTier::High
            ));
        }
        for task in &roadmap.phases[1].tasks {
            prop_assert_eq!(task.tier(&ladder), PriorityTier::Medium);
        }
        for task in &roadmap.phases[2].tasks {
            prop_assert_eq!(task.tier(&ladder), PriorityTier::Low);
        }
    }

    // The three phases partition the input: same ids, no duplicates,
    // no omissions.
    #[test]
    fn phases_partition_the_task_set(tasks in arb_tasks()) {
        let ladder = WeightLadder::new(2.0);
        let input_ids: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
        let roadmap = RoadmapBuilder::new(ladder).build(tasks, &analysis());

        let mut output_ids: Vec<String> = roadmap.tasks().map(|t| t.id.clone()).collect();
        prop_assert_eq!(output_ids.len(), input_ids.len());

        let mut expected = input_ids;
        expected.sort();
        output_ids.sort();
        prop_assert_eq!(output_ids, expected);
    }

    // Within each phase, weights never increase, and equal weights keep
    // their input order (ids were assigned in input order).
    #[test]
    fn phase_order_is_stable_descending(tasks in arb_tasks()) {
        let ladder = WeightLadder::new(2.0);
        let roadmap = RoadmapBuilder::new(ladder).build(tasks, &analysis());

        for phase in &roadmap.phases {
            for pair in phase.tasks.windows(2) {
                prop_assert!(pair[0].priority_weight >= pair[1].priority_weight);
                if pair[0].priority_weight == pair[1].priority_weight {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }

    // Rebuilding from the same input yields the same roadmap.
    #[test]
    fn building_is_deterministic(tasks in arb_tasks()) {
        let ladder = WeightLadder::new(2.0);
        let builder = RoadmapBuilder::new(ladder);
        let first = builder.build(tasks.clone(), &analysis());
        let second = builder.build(tasks, &analysis());
        prop_assert_eq!(first, second);
    }

    // Aggregate impact is the arithmetic mean, and exactly zero for an
    // empty phase; never NaN.
    #[test]
    fn aggregate_impact_is_mean_or_zero(tasks in arb_tasks()) {
        let ladder = WeightLadder::new(2.0);
        let roadmap = RoadmapBuilder::new(ladder).build(tasks, &analysis());

        for phase in &roadmap.phases {
            prop_assert!(!phase.aggregate_impact.is_nan());
            if phase.tasks.is_empty() {
                prop_assert_eq!(phase.aggregate_impact, 0.0);
            } else {
                let mean = phase.tasks.iter().map(|t| t.expected_impact).sum::<f64>()
                    / phase.tasks.len() as f64;
                prop_assert!((phase.aggregate_impact - mean).abs() < 1e-12);
            }
        }
    }
}
