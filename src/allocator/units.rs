use serde::Serialize;

use crate::allocator::types::{TeamDemand, TeamSizeMode};

pub const PIECES_PER_PIZZA: u32 = 8;
pub const PERSONS_PER_PIZZA: u32 = 4;
pub const PARTS_PER_PIZZA_PIECES_MODE: u32 = 16;
pub const PARTS_PER_PIZZA_PERSONS_MODE: u32 = 2;

/// Arithmetic of one team size mode.
///
/// `quota_increment` is what one selected entry adds to a dietary quota,
/// `entry_size` what it adds to the total, and `total_per_pizza` how many
/// total units one requested pizza is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitProfile {
    pub quota_increment: u64,
    pub entry_size: u64,
    pub total_per_pizza: u64,
    pub quota_unit: &'static str,
    pub total_unit: &'static str,
}

impl UnitProfile {
    pub const PIECES: UnitProfile = UnitProfile {
        quota_increment: PIECES_PER_PIZZA as u64,
        entry_size: PARTS_PER_PIZZA_PIECES_MODE as u64,
        total_per_pizza: PARTS_PER_PIZZA_PIECES_MODE as u64,
        quota_unit: "pieces",
        total_unit: "parts",
    };

    // Every persons-mode entry is half a pizza.
    pub const PERSONS: UnitProfile = UnitProfile {
        quota_increment: 1,
        entry_size: 1,
        total_per_pizza: PARTS_PER_PIZZA_PERSONS_MODE as u64,
        quota_unit: "parts",
        total_unit: "parts",
    };

    pub fn for_mode(mode: TeamSizeMode) -> Self {
        match mode {
            TeamSizeMode::Pieces => Self::PIECES,
            TeamSizeMode::Persons => Self::PERSONS,
        }
    }

    pub fn quota_amount(&self, entries: usize) -> u64 {
        (entries as u64).saturating_mul(self.quota_increment)
    }

    pub fn total_amount(&self, entries: usize) -> u64 {
        (entries as u64).saturating_mul(self.entry_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaPlan {
    pub profile: UnitProfile,
    pub vegetarian_needed: u64,
    pub no_pork_needed: u64,
    pub total_needed: u64,
}

impl QuotaPlan {
    pub fn from_demand(demand: &TeamDemand) -> Self {
        let profile = UnitProfile::for_mode(demand.mode);
        let (vegetarian_needed, no_pork_needed) = match demand.mode {
            TeamSizeMode::Pieces => (u64::from(demand.vegetarian), u64::from(demand.no_pork)),
            TeamSizeMode::Persons => (
                persons_to_parts(demand.vegetarian),
                persons_to_parts(demand.no_pork),
            ),
        };

        Self {
            profile,
            vegetarian_needed,
            no_pork_needed,
            total_needed: u64::from(demand.pizza_count).saturating_mul(profile.total_per_pizza),
        }
    }
}

fn persons_to_parts(persons: u32) -> u64 {
    u64::from(persons.div_ceil(PERSONS_PER_PIZZA)) * u64::from(PARTS_PER_PIZZA_PERSONS_MODE)
}

/// Whole pizzas needed to feed the team's vegetarians.
pub fn vegetarian_pizzas(demand: &TeamDemand) -> u32 {
    whole_pizzas(demand.mode, demand.vegetarian)
}

/// Whole pizzas needed to feed the team's pork-free eaters.
pub fn no_pork_pizzas(demand: &TeamDemand) -> u32 {
    whole_pizzas(demand.mode, demand.no_pork)
}

fn whole_pizzas(mode: TeamSizeMode, need: u32) -> u32 {
    match mode {
        TeamSizeMode::Persons => need.div_ceil(PERSONS_PER_PIZZA),
        TeamSizeMode::Pieces => need.div_ceil(PIECES_PER_PIZZA),
    }
}
