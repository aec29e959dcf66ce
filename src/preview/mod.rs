//! Preview session registry.
//!
//! The rendered diagram preview has at most one live session at a time. The
//! registry owns its lifecycle explicitly: created on the first show
//! request, revealed (reused) while open, torn down on close, and recreated
//! on the next show request.

pub mod debounce;

pub use debounce::Debouncer;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::diagram::DiagramState;
use crate::error::{Error, Result};

/// A live preview session for one diagram document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewSession {
    /// Session ID
    pub id: String,
    /// Path of the diagram document backing the preview
    pub diagram_path: PathBuf,
    /// Current diagram snapshot
    pub state: DiagramState,
    /// Number of renders applied to this session
    pub revision: u64,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

/// Registry owning the single live preview session.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    current: RwLock<Option<PreviewSession>>,
}

impl PreviewRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a preview for the given diagram. If a session is already open it
    /// is revealed as-is; otherwise a new session is created from the text.
    pub async fn show(
        &self,
        diagram_path: impl Into<PathBuf>,
        text: impl Into<String>,
    ) -> PreviewSession {
        let mut current = self.current.write().await;
        if let Some(session) = current.as_ref() {
            info!(id = %session.id, "revealing existing preview session");
            return session.clone();
        }

        let now = Utc::now().to_rfc3339();
        let session = PreviewSession {
            id: Uuid::new_v4().to_string(),
            diagram_path: diagram_path.into(),
            state: DiagramState::new(text),
            revision: 0,
            created_at: now.clone(),
            updated_at: now,
        };
        info!(id = %session.id, path = %session.diagram_path.display(), "created preview session");
        *current = Some(session.clone());
        session
    }

    /// The currently open session, if any.
    pub async fn current(&self) -> Option<PreviewSession> {
        self.current.read().await.clone()
    }

    /// Apply a document change to the open session: a new diagram snapshot
    /// replaces the old one and the revision counter advances.
    pub async fn apply_change(&self, new_text: impl Into<String>) -> Result<PreviewSession> {
        let mut current = self.current.write().await;
        let session = current
            .as_mut()
            .ok_or_else(|| Error::Internal("no preview session is open".to_string()))?;

        session.state = session.state.apply_change(new_text);
        session.revision += 1;
        session.updated_at = Utc::now().to_rfc3339();

        info!(id = %session.id, revision = session.revision, "preview re-rendered");
        Ok(session.clone())
    }

    /// Tear down the open session. Returns true if one was open.
    pub async fn dispose(&self) -> bool {
        let mut current = self.current.write().await;
        match current.take() {
            Some(session) => {
                info!(id = %session.id, "disposed preview session");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAGRAM: &str = "Title Sequence diagram of Example.py\nA->>B: go()\n";

    #[tokio::test]
    async fn test_show_creates_then_reveals() {
        let registry = PreviewRegistry::new();

        let first = registry.show("/tmp/a.mmd", DIAGRAM).await;
        assert_eq!(first.revision, 0);
        assert_eq!(first.state.language_extension().unwrap(), "py");

        // Second show reuses the open session, even for another document.
        let second = registry.show("/tmp/b.mmd", "other text").await;
        assert_eq!(second.id, first.id);
        assert_eq!(second.diagram_path, PathBuf::from("/tmp/a.mmd"));
    }

    #[tokio::test]
    async fn test_apply_change_advances_revision() {
        let registry = PreviewRegistry::new();
        registry.show("/tmp/a.mmd", DIAGRAM).await;

        let updated = registry
            .apply_change("Title Sequence diagram of App.ts\n")
            .await
            .unwrap();

        assert_eq!(updated.revision, 1);
        assert_eq!(updated.state.language_extension().unwrap(), "ts");
    }

    #[tokio::test]
    async fn test_apply_change_without_session_fails() {
        let registry = PreviewRegistry::new();
        assert!(registry.apply_change("text").await.is_err());
    }

    #[tokio::test]
    async fn test_dispose_then_show_recreates() {
        let registry = PreviewRegistry::new();
        let first = registry.show("/tmp/a.mmd", DIAGRAM).await;

        assert!(registry.dispose().await);
        assert!(registry.current().await.is_none());
        assert!(!registry.dispose().await);

        let second = registry.show("/tmp/a.mmd", DIAGRAM).await;
        assert_ne!(second.id, first.id);
    }
}
