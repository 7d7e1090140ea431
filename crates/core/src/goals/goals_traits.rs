//! Goal repository and service traits.

use async_trait::async_trait;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::errors::Result;

/// Trait for goal repository operations.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Lists all goals, ordered by name.
    fn get_all(&self) -> Result<Vec<Goal>>;

    /// Retrieves a goal by its ID.
    fn get_by_id(&self, goal_id: &str) -> Result<Goal>;

    /// Creates or replaces a goal keyed by its id.
    async fn upsert(&self, goal: Goal) -> Result<Goal>;

    /// Deletes a goal by its ID; 0 rows if absent.
    async fn delete(&self, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;

    async fn update_goal(&self, update: GoalUpdate) -> Result<Goal>;

    async fn delete_goal(&self, goal_id: &str) -> Result<usize>;

    /// Adds an account to the goal's linked set, verifying it exists.
    /// Linking an already-linked account is a no-op.
    async fn link_account(&self, goal_id: &str, account_id: &str) -> Result<Goal>;

    /// Removes an account from the goal's linked set; absent ids are a no-op.
    async fn unlink_account(&self, goal_id: &str, account_id: &str) -> Result<Goal>;

    fn get_goal(&self, goal_id: &str) -> Result<Goal>;

    fn get_all_goals(&self) -> Result<Vec<Goal>>;
}
