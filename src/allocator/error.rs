use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationErrorKind {
    InsufficientVegetarian,
    InsufficientNoPork,
    InsufficientPizzas,
    UnknownTeam,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("not enough vegetarian pizzas: covered {covered} of {needed} {unit}")]
    InsufficientVegetarian {
        needed: u64,
        covered: u64,
        unit: &'static str,
    },
    #[error("not enough pork-free pizzas: covered {covered} of {needed} {unit}")]
    InsufficientNoPork {
        needed: u64,
        covered: u64,
        unit: &'static str,
    },
    #[error("not enough pizzas: covered {covered} of {needed} {unit}")]
    InsufficientPizzas {
        needed: u64,
        covered: u64,
        unit: &'static str,
    },
    #[error("unknown team '{team_name}'")]
    UnknownTeam { team_name: String },
}

impl AllocationError {
    pub fn kind(&self) -> AllocationErrorKind {
        match self {
            AllocationError::InsufficientVegetarian { .. } => {
                AllocationErrorKind::InsufficientVegetarian
            }
            AllocationError::InsufficientNoPork { .. } => AllocationErrorKind::InsufficientNoPork,
            AllocationError::InsufficientPizzas { .. } => AllocationErrorKind::InsufficientPizzas,
            AllocationError::UnknownTeam { .. } => AllocationErrorKind::UnknownTeam,
        }
    }
}

pub fn unknown_team(team_name: impl Into<String>) -> AllocationError {
    AllocationError::UnknownTeam {
        team_name: team_name.into(),
    }
}
