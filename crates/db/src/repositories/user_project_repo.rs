//! Repository for the `user_projects` junction table.

use boilergen_core::types::{ProjectId, Timestamp};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user_project::LinkOutcome;

/// Provides link operations between users and projects.
pub struct UserProjectRepo;

impl UserProjectRepo {
    /// Link a user to a project, if not already linked.
    ///
    /// Uses `ON CONFLICT DO NOTHING` on the `(user_id, project_id)` unique
    /// constraint, so concurrent duplicate attempts are safe and reported as
    /// [`LinkOutcome::AlreadyLinked`] rather than an error.
    pub async fn link(
        pool: &PgPool,
        user_id: &str,
        project_id: ProjectId,
    ) -> Result<LinkOutcome, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_projects (id, user_id, project_id)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_user_projects_user_project DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(project_id)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            Ok(LinkOutcome::Created)
        } else {
            Ok(LinkOutcome::AlreadyLinked)
        }
    }

    /// Count a user's links created at or after `since`.
    ///
    /// Drives the sliding rate-limit window; `since` is computed by the
    /// caller as `now - window`.
    pub async fn count_recent_for_user(
        pool: &PgPool,
        user_id: &str,
        since: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM user_projects WHERE user_id = $1 AND created_at >= $2",
        )
        .bind(user_id)
        .bind(since)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Count links for a project. Used by tests to assert cascade behavior.
    pub async fn count_for_project(
        pool: &PgPool,
        project_id: ProjectId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM user_projects WHERE project_id = $1")
                .bind(project_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
