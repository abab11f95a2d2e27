//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::PathBuf;

use tracing::info;

/// File path behind a SQLite URL, or `None` for in-memory and non-SQLite URLs.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" || path == "memory" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Create the parent directory of a file-backed SQLite database so the
/// driver can create the file itself.
pub async fn ensure_database_dir(url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(url) else { return Ok(()) };
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else { return Ok(()) };
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    info!(dir = %parent.display(), "database directory ready");
    Ok(())
}
