use pizza_order::allocator::{AllocationError, Allocator, Suggestion, rank_by_votes};

use super::{no_pork, persons_team, pieces_team, pork, veg};

#[test]
fn given_pieces_team_when_vegetarian_covers_no_pork_then_fill_by_votes() {
    let suggestions = vec![veg("A", 10), pork("B", 8), no_pork("C", 5), veg("D", 3)];

    let allocation =
        Allocator::allocate(&pieces_team(8, 8, 4), &suggestions).expect("order should be planned");

    assert_eq!(allocation.names(), vec!["A", "B", "C", "D"]);
    assert_eq!(allocation.total_amount(), 64);
    assert!(allocation.contains("C"));
    assert!(!allocation.contains("E"));
}

#[test]
fn given_too_few_vegetarian_pizzas_then_insufficient_vegetarian() {
    let suggestions = vec![veg("margherita", 5), pork("salami", 3)];

    let err = Allocator::allocate(&pieces_team(16, 0, 2), &suggestions)
        .expect_err("one vegetarian pizza cannot cover 16 pieces");

    assert_eq!(
        err,
        AllocationError::InsufficientVegetarian {
            needed: 16,
            covered: 8,
            unit: "pieces",
        }
    );
    assert_eq!(
        err.to_string(),
        "not enough vegetarian pizzas: covered 8 of 16 pieces"
    );
}

#[test]
fn given_persons_team_then_fill_stops_at_converted_total() {
    let suggestions = vec![
        veg("v1", 9),
        pork("p1", 8),
        veg("v2", 7),
        pork("p2", 6),
        no_pork("n1", 5),
        pork("p3", 4),
        pork("p4", 3),
        veg("v3", 2),
    ];

    let allocation = Allocator::allocate(&persons_team(2, 0, 3), &suggestions)
        .expect("order should be planned");

    assert_eq!(allocation.names(), vec!["v1", "v2", "p1", "p2", "n1", "p3"]);
    assert_eq!(allocation.len(), 6);
}

#[test]
fn given_no_pork_need_beyond_vegetarian_then_pork_free_top_ups_follow_vegetarian() {
    let suggestions = vec![veg("A", 10), pork("B", 9), no_pork("C", 8), no_pork("D", 1)];

    let allocation = Allocator::allocate(&pieces_team(8, 24, 3), &suggestions)
        .expect("order should be planned");

    assert_eq!(allocation.names(), vec!["A", "C", "D"]);
    assert_eq!(allocation.pork_free_amount(), 24);
}

#[test]
fn given_persons_team_then_vegetarian_parts_count_toward_no_pork() {
    let suggestions = vec![
        veg("v1", 10),
        veg("v2", 9),
        veg("v3", 8),
        pork("p", 7),
        no_pork("n1", 6),
        no_pork("n2", 5),
        no_pork("n3", 4),
    ];

    let allocation = Allocator::allocate(&persons_team(4, 8, 3), &suggestions)
        .expect("order should be planned");

    assert_eq!(
        allocation.names(),
        vec!["v1", "v2", "v3", "n1", "p", "n2"]
    );
}

#[test]
fn given_too_few_pork_free_pizzas_then_insufficient_no_pork() {
    let suggestions = vec![pork("salami", 5), no_pork("tonno", 3)];

    let err = Allocator::allocate(&pieces_team(0, 16, 1), &suggestions)
        .expect_err("one pork-free pizza cannot cover 16 pieces");

    assert_eq!(
        err,
        AllocationError::InsufficientNoPork {
            needed: 16,
            covered: 8,
            unit: "pieces",
        }
    );
}

#[test]
fn given_too_few_suggestions_then_insufficient_pizzas() {
    let suggestions = vec![pork("a", 3), no_pork("b", 2), veg("c", 1)];

    let err = Allocator::allocate(&persons_team(0, 0, 2), &suggestions)
        .expect_err("three halves cannot cover two pizzas");

    assert_eq!(
        err,
        AllocationError::InsufficientPizzas {
            needed: 4,
            covered: 3,
            unit: "parts",
        }
    );
}

#[test]
fn vegetarian_flag_wins_over_pork_flag() {
    let odd = Suggestion::new("odd", true, true, 5);
    let suggestions = vec![pork("salami", 9), odd];

    let allocation = Allocator::allocate(&pieces_team(0, 8, 1), &suggestions)
        .expect("vegetarian pizza should count as pork-free");

    assert_eq!(allocation.names(), vec!["odd"]);
}

#[test]
fn equal_votes_keep_input_order() {
    let suggestions = vec![pork("a", 3), pork("b", 5), pork("c", 3), pork("d", 5)];

    let ranked: Vec<&str> = rank_by_votes(&suggestions)
        .into_iter()
        .map(|suggestion| suggestion.name.as_str())
        .collect();
    assert_eq!(ranked, vec!["b", "d", "a", "c"]);

    let allocation =
        Allocator::allocate(&pieces_team(0, 0, 3), &suggestions).expect("order should be planned");
    assert_eq!(allocation.names(), vec!["b", "d", "a"]);
}

#[test]
fn repeated_names_are_selected_once() {
    let suggestions = vec![veg("margherita", 5), veg("margherita", 4)];

    let err = Allocator::allocate(&pieces_team(16, 0, 2), &suggestions)
        .expect_err("a repeated name must not count twice");

    assert_eq!(err.kind(), pizza_order::allocator::AllocationErrorKind::InsufficientVegetarian);
}

#[test]
fn dietary_passes_may_exceed_pizza_count() {
    let suggestions = vec![veg("a", 3), veg("b", 2), veg("c", 1), pork("d", 9)];

    let allocation = Allocator::allocate(&pieces_team(24, 0, 1), &suggestions)
        .expect("order should be planned");

    assert_eq!(allocation.names(), vec!["a", "b", "c"]);
}

#[test]
fn zero_demand_yields_empty_order() {
    let suggestions = vec![veg("a", 3), pork("b", 2)];

    let allocation =
        Allocator::allocate(&persons_team(0, 0, 0), &suggestions).expect("nothing to order");

    assert!(allocation.is_empty());
}

#[test]
fn failure_is_reported_before_later_passes_run() {
    // Enough pizzas overall, but vegetarian fails first.
    let suggestions = vec![pork("a", 3), pork("b", 2), no_pork("c", 1)];

    let err = Allocator::allocate(&pieces_team(1, 40, 2), &suggestions)
        .expect_err("vegetarian pass should fail");

    assert!(matches!(
        err,
        AllocationError::InsufficientVegetarian { covered: 0, .. }
    ));
}
