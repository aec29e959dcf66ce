//! Diagram file watcher.
//!
//! Uses the `notify` crate to watch the diagram document's parent directory
//! and forwards changes to the watched file over a channel. Coalescing of
//! rapid changes is the consumer's job (see [`crate::preview::Debouncer`]).

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::error::{Error, Result};

/// A change to the watched diagram file.
#[derive(Debug, Clone)]
pub struct DiagramChange {
    /// Path of the changed file
    pub path: PathBuf,
    /// Type of change
    pub kind: ChangeKind,
}

/// Type of diagram change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Modified,
    Deleted,
}

/// Watches a single diagram document for changes.
pub struct DiagramWatcher {
    path: PathBuf,
    watcher: Option<RecommendedWatcher>,
}

impl DiagramWatcher {
    /// Create a watcher for the given diagram file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            watcher: None,
        }
    }

    /// Start watching. Events for other files in the same directory are
    /// filtered out; only changes to the diagram file are forwarded.
    pub fn start(&mut self) -> Result<mpsc::Receiver<DiagramChange>> {
        let (tx, rx) = mpsc::channel::<DiagramChange>(100);

        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_name = self.path.file_name().map(|n| n.to_os_string());

        let watcher = RecommendedWatcher::new(
            move |res: std::result::Result<Event, notify::Error>| {
                match res {
                    Ok(event) => {
                        let kind = match event.kind {
                            notify::EventKind::Create(_) | notify::EventKind::Modify(_) => {
                                ChangeKind::Modified
                            }
                            notify::EventKind::Remove(_) => ChangeKind::Deleted,
                            _ => return,
                        };

                        for path in event.paths {
                            if path.file_name().map(|n| n.to_os_string()) != file_name {
                                continue;
                            }
                            // Callback runs on notify's own thread; drop the
                            // change if the consumer is saturated.
                            if tx.try_send(DiagramChange { path, kind }).is_err() {
                                debug!("change channel full, dropping event");
                            }
                        }
                    }
                    Err(e) => {
                        error!("Watch error: {:?}", e);
                    }
                }
            },
            Config::default(),
        )
        .map_err(|e| Error::Watch(format!("failed to create watcher: {}", e)))?;

        self.watcher = Some(watcher);
        if let Some(ref mut w) = self.watcher {
            w.watch(&parent, RecursiveMode::NonRecursive)
                .map_err(|e| Error::Watch(format!("failed to watch {}: {}", parent.display(), e)))?;
        }

        info!(path = %self.path.display(), "diagram watcher started");
        Ok(rx)
    }

    /// Stop watching.
    pub fn stop(&mut self) {
        self.watcher = None;
        info!("diagram watcher stopped");
    }
}
