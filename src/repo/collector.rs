//! File collection from a repository snapshot.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Files larger than this many bytes are treated as binary/irrelevant.
pub const MAX_FILE_SIZE: u64 = 200_000;

/// One retained file from the snapshot.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the snapshot root, `/`-separated.
    pub path: String,
    /// Best-effort UTF-8 content; invalid byte sequences are replaced.
    pub content: String,
}

/// Why a file was left out of the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Larger than [`MAX_FILE_SIZE`] bytes.
    Oversize,
    /// Metadata or read error; collection continued without it.
    Unreadable,
}

/// A file that was left out, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: String,
    pub reason: SkipReason,
}

/// Outcome of walking a snapshot.
///
/// Skips are aggregated here rather than swallowed, so tests and callers can
/// see exactly what was dropped.
#[derive(Debug, Default)]
pub struct CollectionReport {
    /// Retained files in directory-walk order.
    pub records: Vec<FileRecord>,
    /// Files left out, with the reason.
    pub skipped: Vec<SkippedFile>,
}

impl CollectionReport {
    /// Relative paths of the retained files, in the same order.
    pub fn paths(&self) -> Vec<String> {
        self.records.iter().map(|r| r.path.clone()).collect()
    }
}

/// Walk `root` and collect every retained file as a [`FileRecord`].
///
/// Traversal is the natural directory order of the walk; no sorting and no
/// relevance ranking. The `.git` bookkeeping directory is pruned. A single
/// unreadable file is recorded and skipped, never aborting the rest of the
/// collection.
pub fn collect_files(root: &Path) -> CollectionReport {
    let mut report = CollectionReport::default();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git");

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Error walking snapshot: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = match path.strip_prefix(root) {
            Ok(p) => p.to_string_lossy().replace('\\', "/"),
            Err(_) => {
                warn!("Failed to get relative path for {}", path.display());
                continue;
            }
        };

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                debug!("Skipping {} (metadata error: {})", relative, e);
                report.skipped.push(SkippedFile {
                    path: relative,
                    reason: SkipReason::Unreadable,
                });
                continue;
            }
        };

        if metadata.len() > MAX_FILE_SIZE {
            debug!("Skipping large file ({} bytes): {}", metadata.len(), relative);
            report.skipped.push(SkippedFile {
                path: relative,
                reason: SkipReason::Oversize,
            });
            continue;
        }

        match fs::read(path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes).into_owned();
                report.records.push(FileRecord {
                    path: relative,
                    content,
                });
            }
            Err(e) => {
                debug!("Skipping {} (read error: {})", relative, e);
                report.skipped.push(SkippedFile {
                    path: relative,
                    reason: SkipReason::Unreadable,
                });
            }
        }
    }

    report
}
