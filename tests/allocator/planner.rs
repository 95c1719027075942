use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use pizza_order::allocator::{
    AllocationError, AllocationErrorKind, InMemoryRegistry, OrderPlanner, PlanOutcome, Suggestion,
    SuggestionSourcePort, TeamDemand, TeamDirectoryPort,
};

use super::{no_pork, persons_team, pieces_team, pork, veg};

fn registry() -> Arc<InMemoryRegistry> {
    let mut platform = pieces_team(8, 8, 4);
    platform.team_name = "platform".to_string();
    let mut design = persons_team(8, 0, 1);
    design.team_name = "design".to_string();

    Arc::new(InMemoryRegistry::from_teams(vec![
        (
            platform,
            vec![veg("A", 10), pork("B", 8), no_pork("C", 5), veg("D", 3)],
        ),
        (design, vec![veg("only", 1), pork("other", 2)]),
    ]))
}

fn planner(registry: Arc<InMemoryRegistry>) -> OrderPlanner {
    OrderPlanner::new(registry.clone(), registry)
}

#[test]
fn plan_resolves_team_and_allocates() {
    let allocation = planner(registry())
        .plan("platform")
        .expect("platform should be planned");

    assert_eq!(allocation.team_name, "platform");
    assert_eq!(allocation.names(), vec!["A", "B", "C", "D"]);
}

#[test]
fn unknown_team_is_propagated() {
    let err = planner(registry())
        .plan("marketing")
        .expect_err("unregistered team should fail");

    assert_eq!(
        err,
        AllocationError::UnknownTeam {
            team_name: "marketing".to_string()
        }
    );
}

#[test]
fn plan_all_reports_each_team_independently() {
    let outcomes = planner(registry()).plan_all(["design", "platform", "marketing"]);

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].team_name(), "design");
    assert!(matches!(
        &outcomes[0],
        PlanOutcome::Failed {
            kind: AllocationErrorKind::InsufficientVegetarian,
            ..
        }
    ));
    assert!(outcomes[1].is_planned());
    assert!(matches!(
        &outcomes[2],
        PlanOutcome::Failed {
            kind: AllocationErrorKind::UnknownTeam,
            ..
        }
    ));
}

#[test]
fn failed_outcome_serializes_with_status_and_kind() {
    let outcomes = planner(registry()).plan_all(["design"]);

    let value = serde_json::to_value(&outcomes[0]).expect("outcome should serialize");
    assert_eq!(value["status"], "failed");
    assert_eq!(value["team_name"], "design");
    assert_eq!(value["kind"], "insufficient_vegetarian");
    assert_eq!(
        value["message"],
        "not enough vegetarian pizzas: covered 1 of 4 parts"
    );
}

#[test]
fn planned_outcome_serializes_entries_in_order() {
    let outcomes = planner(registry()).plan_all(["platform"]);

    let value = serde_json::to_value(&outcomes[0]).expect("outcome should serialize");
    assert_eq!(value["status"], "planned");
    assert_eq!(value["allocation"]["mode"], "pieces");
    assert_eq!(value["allocation"]["entries"][1]["name"], "B");
}

struct FixedTeam(TeamDemand);

impl TeamDirectoryPort for FixedTeam {
    fn team_demand(&self, _team_name: &str) -> Result<TeamDemand, AllocationError> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
struct CountingSource {
    calls: AtomicUsize,
}

impl SuggestionSourcePort for CountingSource {
    fn suggestions_for_team(&self, _team_name: &str) -> Result<Vec<Suggestion>, AllocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![pork("a", 2), no_pork("b", 1)])
    }
}

#[test]
fn suggestions_are_read_fresh_per_plan() {
    let source = Arc::new(CountingSource::default());
    let planner = OrderPlanner::new(Arc::new(FixedTeam(persons_team(0, 0, 1))), source.clone());

    let first = planner.plan("any").expect("first plan");
    let second = planner.plan("any").expect("second plan");

    assert_eq!(first, second);
    assert_eq!(first.names(), vec!["a", "b"]);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}
