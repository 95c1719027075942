pub mod engine;
pub mod error;
pub mod in_memory;
pub mod planner;
pub mod ports;
pub mod types;
pub mod units;

pub use engine::{Allocator, rank_by_votes};
pub use error::{AllocationError, AllocationErrorKind};
pub use in_memory::InMemoryRegistry;
pub use planner::{OrderPlanner, PlanOutcome};
pub use ports::{SuggestionSourcePort, TeamDirectoryPort};
pub use types::{Allocation, Suggestion, TeamDemand, TeamName, TeamSizeMode};
pub use units::{QuotaPlan, UnitProfile, no_pork_pizzas, vegetarian_pizzas};
