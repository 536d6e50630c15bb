//! Shallow repository snapshots.

use std::path::Path;

use tempfile::TempDir;
use tokio::process::Command;
use tracing::debug;

use crate::error::QaError;

/// A transient checkout of a repository's default branch at history depth 1.
///
/// The backing directory is removed when the value is dropped, on every exit
/// path, so snapshots never accumulate on disk across requests.
pub struct Snapshot {
    dir: TempDir,
}

impl Snapshot {
    /// Root of the checked-out tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Clone `repo_url` at depth 1 into a fresh temp directory.
///
/// One attempt only; callers retry manually if they want to. A failed clone
/// surfaces the tool's diagnostic output, and the partial checkout goes away
/// with the temp dir.
pub async fn fetch_snapshot(repo_url: &str) -> Result<Snapshot, QaError> {
    let dir = TempDir::new()
        .map_err(|e| QaError::Fetch(format!("Failed to create temp directory: {}", e)))?;

    debug!("Cloning {} into {}", repo_url, dir.path().display());

    let output = Command::new("git")
        .arg("clone")
        .arg("--depth")
        .arg("1")
        .arg(repo_url)
        .arg(dir.path())
        .output()
        .await
        .map_err(|e| QaError::Fetch(format!("Failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(QaError::Fetch(format!(
            "git clone failed: {}",
            stderr.trim()
        )));
    }

    Ok(Snapshot { dir })
}
