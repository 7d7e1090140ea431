//! Goal service.

use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};

/// Service for managing goals.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
}

impl GoalService {
    /// Creates a new GoalService instance.
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
    ) -> Self {
        Self {
            goal_repository,
            account_repository,
        }
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        debug!("Creating goal '{}'", new_goal.name);

        // Linked accounts must exist at creation time; dedup preserves the
        // caller's order.
        let mut linked: Vec<String> = Vec::new();
        for account_id in new_goal.linked_account_ids {
            self.account_repository.get_by_id(&account_id)?;
            if !linked.contains(&account_id) {
                linked.push(account_id);
            }
        }

        let now = Utc::now().naive_utc();
        let goal = Goal {
            id: new_goal.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            currency: new_goal.currency,
            linked_account_ids: linked,
            deadline: new_goal.deadline,
            color_tag: new_goal.color_tag,
            created_at: now,
            updated_at: now,
        };

        self.goal_repository.upsert(goal).await
    }

    async fn update_goal(&self, update: GoalUpdate) -> Result<Goal> {
        update.validate()?;

        let id = update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("id".to_string()))
        })?;
        let existing = self.goal_repository.get_by_id(&id)?;

        let goal = Goal {
            id,
            name: update.name,
            target_amount: update.target_amount,
            currency: update.currency,
            linked_account_ids: existing.linked_account_ids,
            deadline: update.deadline,
            color_tag: update.color_tag,
            created_at: existing.created_at,
            updated_at: Utc::now().naive_utc(),
        };

        self.goal_repository.upsert(goal).await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        self.goal_repository.delete(goal_id).await
    }

    async fn link_account(&self, goal_id: &str, account_id: &str) -> Result<Goal> {
        self.account_repository.get_by_id(account_id)?;

        let mut goal = self.goal_repository.get_by_id(goal_id)?;
        if goal.linked_account_ids.iter().any(|id| id == account_id) {
            return Ok(goal);
        }

        goal.linked_account_ids.push(account_id.to_string());
        goal.updated_at = Utc::now().naive_utc();
        self.goal_repository.upsert(goal).await
    }

    async fn unlink_account(&self, goal_id: &str, account_id: &str) -> Result<Goal> {
        let mut goal = self.goal_repository.get_by_id(goal_id)?;
        if !goal.linked_account_ids.iter().any(|id| id == account_id) {
            return Ok(goal);
        }

        goal.linked_account_ids.retain(|id| id != account_id);
        goal.updated_at = Utc::now().naive_utc();
        self.goal_repository.upsert(goal).await
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repository.get_by_id(goal_id)
    }

    fn get_all_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repository.get_all()
    }
}
