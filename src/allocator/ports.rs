use crate::allocator::{
    error::AllocationError,
    types::{Suggestion, TeamDemand},
};

pub trait TeamDirectoryPort: Send + Sync {
    /// Fails with `UnknownTeam` when the name is not registered.
    fn team_demand(&self, team_name: &str) -> Result<TeamDemand, AllocationError>;
}

pub trait SuggestionSourcePort: Send + Sync {
    /// Returns an empty list when the team has no suggestions.
    fn suggestions_for_team(&self, team_name: &str) -> Result<Vec<Suggestion>, AllocationError>;
}
