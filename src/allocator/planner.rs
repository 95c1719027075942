use std::sync::Arc;

use serde::Serialize;

use crate::allocator::{
    engine::Allocator,
    error::{AllocationError, AllocationErrorKind},
    ports::{SuggestionSourcePort, TeamDirectoryPort},
    types::{Allocation, TeamName},
    units::{QuotaPlan, no_pork_pizzas, vegetarian_pizzas},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanOutcome {
    Planned {
        team_name: TeamName,
        allocation: Allocation,
    },
    Failed {
        team_name: TeamName,
        kind: AllocationErrorKind,
        message: String,
    },
}

impl PlanOutcome {
    pub fn team_name(&self) -> &str {
        match self {
            PlanOutcome::Planned { team_name, .. } | PlanOutcome::Failed { team_name, .. } => {
                team_name
            }
        }
    }

    pub fn is_planned(&self) -> bool {
        matches!(self, PlanOutcome::Planned { .. })
    }
}

pub struct OrderPlanner {
    teams: Arc<dyn TeamDirectoryPort>,
    suggestions: Arc<dyn SuggestionSourcePort>,
}

impl OrderPlanner {
    pub fn new(
        teams: Arc<dyn TeamDirectoryPort>,
        suggestions: Arc<dyn SuggestionSourcePort>,
    ) -> Self {
        Self { teams, suggestions }
    }

    #[tracing::instrument(name = "plan_order", target = "planner", skip(self))]
    pub fn plan(&self, team_name: &str) -> Result<Allocation, AllocationError> {
        let demand = self.teams.team_demand(team_name)?;
        let suggestions = self.suggestions.suggestions_for_team(team_name)?;
        let plan = QuotaPlan::from_demand(&demand);

        tracing::debug!(
            target: "planner",
            team = %team_name,
            mode = demand.mode.as_str(),
            suggestions = suggestions.len(),
            vegetarian_pizzas = vegetarian_pizzas(&demand),
            no_pork_pizzas = no_pork_pizzas(&demand),
            total_needed = plan.total_needed,
            "plan_started"
        );

        match Allocator::allocate(&demand, &suggestions) {
            Ok(allocation) => {
                tracing::info!(
                    target: "planner",
                    team = %team_name,
                    entries = allocation.len(),
                    "plan_completed"
                );
                Ok(allocation)
            }
            Err(err) => {
                tracing::warn!(
                    target: "planner",
                    team = %team_name,
                    kind = ?err.kind(),
                    error = %err,
                    "plan_failed"
                );
                Err(err)
            }
        }
    }

    pub fn plan_all<I, S>(&self, team_names: I) -> Vec<PlanOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        team_names
            .into_iter()
            .map(|team_name| {
                let team_name = team_name.as_ref();
                match self.plan(team_name) {
                    Ok(allocation) => PlanOutcome::Planned {
                        team_name: team_name.to_string(),
                        allocation,
                    },
                    Err(err) => PlanOutcome::Failed {
                        team_name: team_name.to_string(),
                        kind: err.kind(),
                        message: err.to_string(),
                    },
                }
            })
            .collect()
    }
}
