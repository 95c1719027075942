use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::allocator::{
    error::{AllocationError, unknown_team},
    ports::{SuggestionSourcePort, TeamDirectoryPort},
    types::{Suggestion, TeamDemand, TeamName},
};

#[derive(Debug, Clone)]
struct TeamEntry {
    demand: TeamDemand,
    suggestions: Vec<Suggestion>,
}

/// Team directory and suggestion source backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    teams: Mutex<BTreeMap<TeamName, TeamEntry>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_teams(teams: impl IntoIterator<Item = (TeamDemand, Vec<Suggestion>)>) -> Self {
        let mut entries: BTreeMap<TeamName, TeamEntry> = BTreeMap::new();
        for (demand, suggestions) in teams {
            let entry = entries
                .entry(demand.team_name.clone())
                .or_insert_with(|| TeamEntry {
                    demand: demand.clone(),
                    suggestions: Vec::new(),
                });
            entry.demand = demand;
            for suggestion in suggestions {
                upsert_suggestion(&mut entry.suggestions, suggestion);
            }
        }

        Self {
            teams: Mutex::new(entries),
        }
    }

    /// Registers a team, replacing the demand of an existing team with the
    /// same name. Its suggestions are kept.
    pub fn register_team(&self, demand: TeamDemand) {
        let mut teams = self.lock();
        match teams.get_mut(&demand.team_name) {
            Some(entry) => entry.demand = demand,
            None => {
                teams.insert(
                    demand.team_name.clone(),
                    TeamEntry {
                        demand,
                        suggestions: Vec::new(),
                    },
                );
            }
        }
    }

    /// Adds a suggestion to a registered team. A suggestion with the same name
    /// is replaced in place; otherwise it is appended.
    pub fn add_suggestion(
        &self,
        team_name: &str,
        suggestion: Suggestion,
    ) -> Result<(), AllocationError> {
        let mut teams = self.lock();
        let entry = teams
            .get_mut(team_name)
            .ok_or_else(|| unknown_team(team_name))?;

        upsert_suggestion(&mut entry.suggestions, suggestion);
        Ok(())
    }

    pub fn team_names(&self) -> Vec<TeamName> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<TeamName, TeamEntry>> {
        self.teams.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn upsert_suggestion(suggestions: &mut Vec<Suggestion>, suggestion: Suggestion) {
    match suggestions
        .iter_mut()
        .find(|existing| existing.name == suggestion.name)
    {
        Some(existing) => *existing = suggestion,
        None => suggestions.push(suggestion),
    }
}

impl TeamDirectoryPort for InMemoryRegistry {
    fn team_demand(&self, team_name: &str) -> Result<TeamDemand, AllocationError> {
        self.lock()
            .get(team_name)
            .map(|entry| entry.demand.clone())
            .ok_or_else(|| unknown_team(team_name))
    }
}

impl SuggestionSourcePort for InMemoryRegistry {
    fn suggestions_for_team(&self, team_name: &str) -> Result<Vec<Suggestion>, AllocationError> {
        Ok(self
            .lock()
            .get(team_name)
            .map(|entry| entry.suggestions.clone())
            .unwrap_or_default())
    }
}
