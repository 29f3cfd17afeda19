//! Handlers for the `/projects` resource.
//!
//! Routes:
//! - `GET    /projects`      — the requesting user's projects
//! - `POST   /projects`      — request generation (dedup by config hash)
//! - `DELETE /projects/{id}` — delete, gated by the creation-age cooldown

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use boilergen_core::error::CoreError;
use boilergen_core::types::ProjectId;
use boilergen_core::{deletion, generation, hashing};
use boilergen_db::models::project::{Project, UpsertProject};
use boilergen_db::models::user_project::LinkOutcome;
use boilergen_db::repositories::{ProjectRepo, UserProjectRepo};
use boilergen_generator::GenerateRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of a generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateProjectRequest {
    pub stack: String,
    pub version: String,
    pub features: Value,
}

/// Payload returned by a successful deletion.
#[derive(Debug, Serialize)]
pub struct DeleteProjectResponse {
    pub id: ProjectId,
    pub message: &'static str,
}

/// GET /api/v1/projects
///
/// Lists the projects linked to the requesting user, most recently linked
/// first.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_for_user(&state.pool, &user.user_id).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/projects
///
/// The generation workflow: validate, rate-limit, fingerprint, then either
/// return the already-generated project (200) or call the external
/// generator, upsert the result, and return it (201). The requesting user
/// is linked to the project in both arms.
pub async fn generate(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<GenerateProjectRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    generation::validate_generation_input(&input.stack, &input.version, &input.features)
        .map_err(AppError::Core)?;

    // Sliding window measured back from now; never calendar-bucketed.
    let limits = &state.config.rate_limit;
    let since = chrono::Utc::now() - chrono::Duration::hours(limits.window_hours);
    let recent = UserProjectRepo::count_recent_for_user(&state.pool, &user.user_id, since).await?;
    generation::check_rate_limit(recent, limits.max_generations, limits.window_hours)
        .map_err(AppError::Core)?;

    let config_hash = hashing::config_hash(&input.stack, &input.version, &input.features);
    tracing::debug!(user_id = %user.user_id, %config_hash, "Generation requested");

    if let Some(existing) = ProjectRepo::find_by_config_hash(&state.pool, &config_hash).await? {
        tracing::info!(project_id = %existing.id, %config_hash, "Configuration already generated");
        link_user(&state, &user.user_id, &existing).await;
        return Ok((StatusCode::OK, Json(DataResponse { data: existing })));
    }

    tracing::info!(%config_hash, "Configuration not found, calling backend generator");
    let generated = state
        .generator
        .generate(&GenerateRequest {
            stack: &input.stack,
            version: &input.version,
            features: &input.features,
            user_id: &user.user_id,
        })
        .await?;

    let zip_url = generated.zip_url.unwrap_or_default();
    let pdf_url = generated.pdf_url.unwrap_or_default();
    if zip_url.is_empty() || pdf_url.is_empty() {
        tracing::warn!(%config_hash, "Generator response is missing artifact urls");
    }

    // Converging write: a concurrent request for the same configuration
    // lands on the same row via the config_hash unique constraint.
    let project = ProjectRepo::upsert_by_config_hash(
        &state.pool,
        &UpsertProject {
            config_hash,
            stack: generated.stack.unwrap_or(input.stack),
            version: generated.version.unwrap_or(input.version),
            features: generated.features.unwrap_or(input.features),
            zip_url,
            pdf_url,
            expires_at: generated.expires_at,
        },
    )
    .await?;

    tracing::info!(project_id = %project.id, "Project upserted");
    link_user(&state, &user.user_id, &project).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// DELETE /api/v1/projects/{id}
///
/// Deletes a project once its creation-age cooldown has elapsed. Link rows
/// cascade with the project.
pub async fn remove(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<ProjectId>,
) -> AppResult<Json<DataResponse<DeleteProjectResponse>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    deletion::check_delete_cooldown(
        project.created_at,
        chrono::Utc::now(),
        state.config.delete_cooldown_hours,
    )
    .map_err(AppError::Core)?;

    let deleted = ProjectRepo::delete_by_id(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    Ok(Json(DataResponse {
        data: DeleteProjectResponse {
            id,
            message: "Project deleted successfully",
        },
    }))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Link a user to a project, tolerating every failure.
///
/// A duplicate link is a normal outcome; any other error is logged as a
/// warning and swallowed, since by this point the project row is durably
/// in place and the request as a whole has succeeded.
async fn link_user(state: &AppState, user_id: &str, project: &Project) {
    match UserProjectRepo::link(&state.pool, user_id, project.id).await {
        Ok(LinkOutcome::Created) => {
            tracing::debug!(user_id = %user_id, project_id = %project.id, "User linked to project");
        }
        Ok(LinkOutcome::AlreadyLinked) => {
            tracing::debug!(user_id = %user_id, project_id = %project.id, "User already linked");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                user_id = %user_id,
                project_id = %project.id,
                "Failed to link user to project"
            );
        }
    }
}
