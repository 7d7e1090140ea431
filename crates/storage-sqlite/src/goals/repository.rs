//! Goal repository.

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::goals;
use crate::schema::goals::dsl::*;

use super::model::GoalDB;
use moneta_core::errors::Result;
use moneta_core::goals::{Goal, GoalRepositoryTrait};

/// Repository for managing goal data in the database.
pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    /// Creates a new GoalRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn get_all(&self) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = goals::table
            .select(GoalDB::as_select())
            .order(name.asc())
            .load::<GoalDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(Goal::try_from).collect()
    }

    fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;

        let row = goals
            .select(GoalDB::as_select())
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .into_core()?;

        row.try_into()
    }

    async fn upsert(&self, goal: Goal) -> Result<Goal> {
        let record: GoalDB = goal.clone().try_into()?;

        self.writer
            .exec(move |conn| {
                diesel::insert_into(goals::table)
                    .values(&record)
                    .on_conflict(id)
                    .do_update()
                    .set(&record)
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await?;

        Ok(goal)
    }

    async fn delete(&self, goal_id: &str) -> Result<usize> {
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(goals.find(goal_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
