//! Workspace file discovery.
//!
//! Thin I/O glue around the navigator: enumerate candidate source files of
//! the active language and read their contents. Hidden directories and the
//! usual build/dependency output directories are skipped.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Directory names never descended into during a walk.
const SKIPPED_DIRS: [&str; 4] = ["node_modules", "target", "dist", "build"];

/// A workspace rooted at a directory, with a per-file size cap for reads.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    max_file_size: u64,
}

impl Workspace {
    /// Create a workspace over `root`. Files larger than `max_file_size`
    /// bytes are refused by [`Workspace::read_text`].
    pub fn new(root: impl Into<PathBuf>, max_file_size: u64) -> Self {
        Self {
            root: root.into(),
            max_file_size,
        }
    }

    /// The workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate all files whose extension is in `extensions`, in sorted
    /// path order. Unreadable directories are skipped.
    pub async fn files_with_extensions(&self, extensions: &[&str]) -> Vec<PathBuf> {
        self.walk(|path| has_extension(path, extensions)).await
    }

    /// Enumerate files whose extension is in `extensions` and whose file
    /// name starts with `name` (participant names commonly match the file
    /// with or without its extension), in sorted path order.
    pub async fn files_matching_name(&self, name: &str, extensions: &[&str]) -> Vec<PathBuf> {
        let name = name.to_string();
        self.walk(move |path| {
            has_extension(path, extensions)
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(name.as_str()))
        })
        .await
    }

    /// Read a file as UTF-8 text, refusing files over the size cap.
    pub async fn read_text(&self, path: &Path) -> Result<String> {
        let metadata = fs::metadata(path).await?;
        if metadata.len() > self.max_file_size {
            return Err(Error::FileTooLarge {
                path: path.display().to_string(),
                size: metadata.len(),
            });
        }
        Ok(fs::read_to_string(path).await?)
    }

    /// Iterative directory walk collecting files accepted by `keep`.
    async fn walk<F>(&self, keep: F) -> Vec<PathBuf>
    where
        F: Fn(&Path) -> bool,
    {
        let mut matched = Vec::new();
        let mut stack = vec![self.root.clone()];

        while let Some(dir) = stack.pop() {
            let mut entries = match fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                    continue;
                }
            };

            while let Ok(Some(entry)) = entries.next_entry().await {
                let path = entry.path();
                let name = path.file_name().unwrap_or_default().to_string_lossy();

                if name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()) {
                    continue;
                }

                if path.is_dir() {
                    stack.push(path);
                } else if path.is_file() && keep(&path) {
                    matched.push(path);
                }
            }
        }

        matched.sort();
        debug!(root = %self.root.display(), count = matched.len(), "workspace walk finished");
        matched
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.contains(&e))
}
