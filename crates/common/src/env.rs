//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Ensure the static asset directory exists; warn when missing so product
/// image requests that will 404 are explainable from the logs.
pub async fn ensure_env(static_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(%static_dir, "static asset directory not found; product images may 404");
    }
    Ok(())
}
