//! User-to-project link entity.

use boilergen_core::types::{ProjectId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `user_projects` junction table.
///
/// `created_at` marks when the user first requested this configuration and
/// drives the per-user rate-limit window.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProject {
    pub id: Uuid,
    pub user_id: String,
    pub project_id: ProjectId,
    pub created_at: Timestamp,
}

/// Outcome of an idempotent link attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A new link row was inserted.
    Created,
    /// The (user, project) pair already existed; nothing was written.
    AlreadyLinked,
}
