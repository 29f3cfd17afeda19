//! Repository for the `projects` table.

use boilergen_core::types::ProjectId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::project::{Project, UpsertProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, config_hash, stack, version, features, zip_url, pdf_url, created_at, expires_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: ProjectId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its configuration fingerprint.
    pub async fn find_by_config_hash(
        pool: &PgPool,
        config_hash: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE config_hash = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(config_hash)
            .fetch_optional(pool)
            .await
    }

    /// Insert a project keyed by `config_hash`, updating artifact fields on
    /// conflict.
    ///
    /// This is the converging write: two concurrent callers with the same
    /// fingerprint both land on the single existing row. `id` and
    /// `created_at` are only set by the insert arm and survive every
    /// subsequent conflict.
    pub async fn upsert_by_config_hash(
        pool: &PgPool,
        input: &UpsertProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, config_hash, stack, version, features, zip_url, pdf_url, expires_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT ON CONSTRAINT uq_projects_config_hash DO UPDATE SET
                stack = EXCLUDED.stack,
                version = EXCLUDED.version,
                features = EXCLUDED.features,
                zip_url = EXCLUDED.zip_url,
                pdf_url = EXCLUDED.pdf_url,
                expires_at = EXCLUDED.expires_at
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.config_hash)
            .bind(&input.stack)
            .bind(&input.version)
            .bind(&input.features)
            .bind(&input.zip_url)
            .bind(&input.pdf_url)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// List the projects linked to a user, most recently linked first.
    pub async fn list_for_user(pool: &PgPool, user_id: &str) -> Result<Vec<Project>, sqlx::Error> {
        let query = "SELECT p.id, p.config_hash, p.stack, p.version, p.features, p.zip_url, \
                     p.pdf_url, p.created_at, p.expires_at
             FROM projects p
             JOIN user_projects up ON up.project_id = p.id
             WHERE up.user_id = $1
             ORDER BY up.created_at DESC";
        sqlx::query_as::<_, Project>(query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List projects with zero linked users.
    pub async fn list_orphans(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects p
             WHERE NOT EXISTS (SELECT 1 FROM user_projects up WHERE up.project_id = p.id)
             ORDER BY created_at"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was
    /// removed. Link rows cascade.
    pub async fn delete_by_id(pool: &PgPool, id: ProjectId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
