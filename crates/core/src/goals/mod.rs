//! Goals module - domain models, services, traits, and progress math.

mod goal_progress;
mod goals_model;
mod goals_service;
mod goals_traits;

pub use goal_progress::{goal_progress, GoalProgress};
pub use goals_model::{Goal, GoalUpdate, NewGoal};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
