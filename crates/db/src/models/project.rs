//! Project entity model and DTOs.

use boilergen_core::types::{ProjectId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A generated-boilerplate record from the `projects` table.
///
/// One row exists per distinct configuration fingerprint; `created_at` is
/// set on first insert and never touched by the upsert's conflict arm.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub config_hash: String,
    pub stack: String,
    pub version: String,
    pub features: Value,
    /// Location of the generated zip archive; empty if the generator
    /// omitted it.
    pub zip_url: String,
    /// Location of the generated PDF docs; empty if the generator omitted it.
    pub pdf_url: String,
    pub created_at: Timestamp,
    /// Display-only staleness marker; never drives deletion.
    pub expires_at: Option<Timestamp>,
}

/// DTO for the converging insert-or-update keyed by `config_hash`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertProject {
    pub config_hash: String,
    pub stack: String,
    pub version: String,
    pub features: Value,
    pub zip_url: String,
    pub pdf_url: String,
    pub expires_at: Option<Timestamp>,
}
