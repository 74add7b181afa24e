//! Environment/runtime helpers
//!
//! Sanity checks run before the database is opened.

use std::path::{Path, PathBuf};

use tracing::info;

/// File path behind a `sqlite:` URL, or `None` for in-memory and non-sqlite URLs.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Create the parent directory of a file-backed sqlite database.
pub async fn ensure_database_dir(url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(url) else { return Ok(()) };
    let Some(parent) = path.parent().filter(|p| *p != Path::new("")) else { return Ok(()) };
    if tokio::fs::metadata(parent).await.is_err() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        info!(dir = %parent.display(), "created database directory");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_sqlite_url() {
        assert_eq!(sqlite_file_path("sqlite:///tmp/starwars.db?mode=rwc"), Some(PathBuf::from("/tmp/starwars.db")));
    }

    #[test]
    fn relative_sqlite_url() {
        assert_eq!(sqlite_file_path("sqlite:data/app.db"), Some(PathBuf::from("data/app.db")));
    }

    #[test]
    fn memory_and_postgres_have_no_file() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/db"), None);
    }

    #[tokio::test]
    async fn bare_file_name_needs_no_directory() {
        ensure_database_dir("sqlite:app.db").await.unwrap();
    }
}
