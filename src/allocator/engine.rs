use std::collections::HashSet;

use crate::allocator::{
    error::AllocationError,
    types::{Allocation, Suggestion, TeamDemand},
    units::{QuotaPlan, UnitProfile},
};

/// Order under construction. Names are tracked next to the entries so every
/// pass can skip suggestions that are already in.
#[derive(Debug, Default)]
struct OrderDraft<'a> {
    entries: Vec<&'a Suggestion>,
    names: HashSet<&'a str>,
}

impl<'a> OrderDraft<'a> {
    fn push(&mut self, suggestion: &'a Suggestion) -> bool {
        if !self.names.insert(suggestion.name.as_str()) {
            return false;
        }
        self.entries.push(suggestion);
        true
    }

    fn total(&self, profile: &UnitProfile) -> u64 {
        profile.total_amount(self.entries.len())
    }
}

/// Outcome of one quota pass: the grown draft and the amount it reached.
struct QuotaPass<'a> {
    draft: OrderDraft<'a>,
    covered: u64,
}

pub struct Allocator;

impl Allocator {
    pub fn allocate(
        demand: &TeamDemand,
        suggestions: &[Suggestion],
    ) -> Result<Allocation, AllocationError> {
        let plan = QuotaPlan::from_demand(demand);
        let ranked = rank_by_votes(suggestions);

        let vegetarian = vegetarian_pass(&ranked, &plan, OrderDraft::default())?;
        let pork_free = pork_free_pass(&ranked, &plan, vegetarian)?;
        let draft = fill_pass(&ranked, &plan, pork_free.draft)?;

        tracing::debug!(
            target: "allocator",
            team = %demand.team_name,
            mode = demand.mode.as_str(),
            vegetarian_needed = plan.vegetarian_needed,
            no_pork_needed = plan.no_pork_needed,
            total_needed = plan.total_needed,
            entries = draft.entries.len(),
            "allocation_completed"
        );

        Ok(Allocation {
            team_name: demand.team_name.clone(),
            mode: demand.mode,
            entries: draft.entries.into_iter().cloned().collect(),
        })
    }
}

/// Sorts by descending votes. The sort is stable, so equal votes keep their
/// input order.
pub fn rank_by_votes(suggestions: &[Suggestion]) -> Vec<&Suggestion> {
    let mut ranked: Vec<&Suggestion> = suggestions.iter().collect();
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
    ranked
}

fn vegetarian_pass<'a>(
    ranked: &[&'a Suggestion],
    plan: &QuotaPlan,
    draft: OrderDraft<'a>,
) -> Result<QuotaPass<'a>, AllocationError> {
    let pass = quota_pass(ranked, plan, draft, 0, plan.vegetarian_needed, |s| {
        s.vegetarian
    });

    if pass.covered < plan.vegetarian_needed {
        return Err(AllocationError::InsufficientVegetarian {
            needed: plan.vegetarian_needed,
            covered: pass.covered,
            unit: plan.profile.quota_unit,
        });
    }
    Ok(pass)
}

// Vegetarian pizzas are pork-free, so the pass starts from what the
// vegetarian pass covered.
fn pork_free_pass<'a>(
    ranked: &[&'a Suggestion],
    plan: &QuotaPlan,
    vegetarian: QuotaPass<'a>,
) -> Result<QuotaPass<'a>, AllocationError> {
    let pass = quota_pass(
        ranked,
        plan,
        vegetarian.draft,
        vegetarian.covered,
        plan.no_pork_needed,
        Suggestion::is_pork_free,
    );

    if pass.covered < plan.no_pork_needed {
        return Err(AllocationError::InsufficientNoPork {
            needed: plan.no_pork_needed,
            covered: pass.covered,
            unit: plan.profile.quota_unit,
        });
    }
    Ok(pass)
}

fn quota_pass<'a>(
    ranked: &[&'a Suggestion],
    plan: &QuotaPlan,
    mut draft: OrderDraft<'a>,
    mut covered: u64,
    needed: u64,
    qualifies: impl Fn(&Suggestion) -> bool,
) -> QuotaPass<'a> {
    for &suggestion in ranked {
        if covered >= needed {
            break;
        }
        if qualifies(suggestion) && draft.push(suggestion) {
            covered = covered.saturating_add(plan.profile.quota_increment);
        }
    }

    QuotaPass { draft, covered }
}

fn fill_pass<'a>(
    ranked: &[&'a Suggestion],
    plan: &QuotaPlan,
    mut draft: OrderDraft<'a>,
) -> Result<OrderDraft<'a>, AllocationError> {
    for &suggestion in ranked {
        if draft.total(&plan.profile) >= plan.total_needed {
            break;
        }
        draft.push(suggestion);
    }

    let covered = draft.total(&plan.profile);
    if covered < plan.total_needed {
        return Err(AllocationError::InsufficientPizzas {
            needed: plan.total_needed,
            covered,
            unit: plan.profile.total_unit,
        });
    }
    Ok(draft)
}
