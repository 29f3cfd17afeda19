use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boilergen_storage::S3Storage;

/// Bucket holding generated artifacts, matching the generator's upload
/// target.
const DEFAULT_BUCKET: &str = "projects";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boilergen_sweeper=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = boilergen_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    let bucket = std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.into());
    let storage = S3Storage::from_env(bucket).await;

    tracing::info!(bucket = storage.bucket(), "Starting cleanup pass");

    match boilergen_sweeper::sweep(&pool, &storage).await {
        Ok(report) => {
            tracing::info!(?report, "Cleanup finished");
        }
        Err(e) => {
            tracing::error!(error = %e, "Cleanup failed");
            std::process::exit(1);
        }
    }
}
