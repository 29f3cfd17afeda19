//! Orphaned-project cleanup.
//!
//! A project with zero user links is unreachable from any user-facing flow;
//! this job reclaims its database row and stored artifacts. It runs as a
//! standalone batch binary invoked out-of-band (cron), makes one pass over
//! the orphan set, and exits.

use boilergen_core::artifacts::artifact_key;
use boilergen_db::repositories::ProjectRepo;
use boilergen_storage::ObjectStorage;
use sqlx::PgPool;

/// Summary of one cleanup pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Orphaned projects found.
    pub orphans_found: usize,
    /// Project rows deleted.
    pub rows_deleted: usize,
    /// Bulk storage deletes that failed (logged, not fatal).
    pub storage_failures: usize,
}

/// Delete every orphaned project and its stored artifacts.
///
/// Artifact deletion is best-effort: a storage failure is logged and the
/// project row is still removed. Store errors abort the pass; a sweep that
/// fails midway is simply retried wholesale on the next invocation.
pub async fn sweep(
    pool: &PgPool,
    storage: &dyn ObjectStorage,
) -> Result<SweepReport, sqlx::Error> {
    let orphans = ProjectRepo::list_orphans(pool).await?;
    let mut report = SweepReport {
        orphans_found: orphans.len(),
        ..SweepReport::default()
    };

    for project in orphans {
        tracing::info!(project_id = %project.id, "Deleting orphaned project");

        let keys: Vec<String> = [&project.zip_url, &project.pdf_url]
            .into_iter()
            .filter_map(|url| artifact_key(url))
            .map(str::to_owned)
            .collect();

        if !keys.is_empty() {
            if let Err(e) = storage.remove_objects(&keys).await {
                tracing::error!(
                    error = %e,
                    project_id = %project.id,
                    ?keys,
                    "Artifact delete failed, removing row anyway"
                );
                report.storage_failures += 1;
            }
        }

        if ProjectRepo::delete_by_id(pool, project.id).await? {
            report.rows_deleted += 1;
        }
    }

    tracing::info!(
        orphans = report.orphans_found,
        deleted = report.rows_deleted,
        storage_failures = report.storage_failures,
        "Cleanup pass complete"
    );

    Ok(report)
}
