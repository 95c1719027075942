use serde::{Deserialize, Serialize};

use crate::allocator::units::UnitProfile;

pub type TeamName = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSizeMode {
    /// Dietary needs are counted in pieces, eight to a pizza.
    Pieces,
    /// Dietary needs are counted in persons, four to a pizza.
    Persons,
}

impl TeamSizeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TeamSizeMode::Pieces => "pieces",
            TeamSizeMode::Persons => "persons",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDemand {
    pub team_name: TeamName,
    pub mode: TeamSizeMode,
    pub vegetarian: u32,
    pub no_pork: u32,
    pub pizza_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub vegetarian: bool,
    pub pork: bool,
    #[serde(default)]
    pub votes: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
}

impl Suggestion {
    pub fn new(name: impl Into<String>, vegetarian: bool, pork: bool, votes: u32) -> Self {
        Self {
            name: name.into(),
            vegetarian,
            pork,
            votes,
            ingredients: Vec::new(),
        }
    }

    /// A vegetarian pizza counts as pork-free even if its `pork` flag is set.
    pub fn is_pork_free(&self) -> bool {
        self.vegetarian || !self.pork
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub team_name: TeamName,
    pub mode: TeamSizeMode,
    pub entries: Vec<Suggestion>,
}

impl Allocation {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    pub fn vegetarian_amount(&self) -> u64 {
        let profile = UnitProfile::for_mode(self.mode);
        profile.quota_amount(self.entries.iter().filter(|entry| entry.vegetarian).count())
    }

    pub fn pork_free_amount(&self) -> u64 {
        let profile = UnitProfile::for_mode(self.mode);
        profile.quota_amount(
            self.entries
                .iter()
                .filter(|entry| entry.is_pork_free())
                .count(),
        )
    }

    pub fn total_amount(&self) -> u64 {
        UnitProfile::for_mode(self.mode).total_amount(self.entries.len())
    }
}
