//! Navigation orchestrator.
//!
//! Resolves a diagram click (function name + nearest participant name) to a
//! source location: validate the inputs, narrow the candidate-file set using
//! the participant name, then run the language's locator over each candidate
//! until one matches.

use futures::future::join_all;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::locator::Language;
use crate::types::{offset_to_position, NavigationOutcome, SourceLocation};
use crate::workspace::Workspace;

/// Orchestrates definition lookups over a workspace.
#[derive(Debug, Clone)]
pub struct Navigator {
    workspace: Workspace,
}

impl Navigator {
    /// Create a navigator over the given workspace.
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    /// Resolve `function_name` to its definition, scoped by the participant
    /// nearest the clicked message arrow and the diagram's language
    /// extension.
    ///
    /// Blank inputs and unknown extensions are fatal and reported before any
    /// file search. Zero candidates and an exhausted scan are informational
    /// [`NavigationOutcome`]s. Per-file read failures are logged and that
    /// candidate skipped; they never abort the search.
    pub async fn jump_to_function(
        &self,
        function_name: &str,
        participant: &str,
        extension: &str,
    ) -> Result<NavigationOutcome> {
        let function_name = function_name.trim();
        let participant = participant.trim();

        if function_name.is_empty() {
            return Err(Error::InvalidInput("function name is empty".to_string()));
        }
        if participant.is_empty() {
            return Err(Error::InvalidInput("participant name is empty".to_string()));
        }

        // Factory errors (blank or unclaimed extension) are fatal before any
        // file I/O happens.
        let language = Language::from_extension(extension)?;
        info!(
            function = function_name,
            participant,
            language = language.name(),
            "navigating to function definition"
        );

        let candidates = self.scope_candidates(participant, language).await;
        if candidates.is_empty() {
            info!(participant, "no candidate files after scoping");
            return Ok(NavigationOutcome::NoCandidateFiles {
                participant: participant.to_string(),
            });
        }
        debug!(count = candidates.len(), "scoped candidate files");

        let locator = language.locator();
        for path in &candidates {
            let text = match self.workspace.read_text(path).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable candidate");
                    continue;
                }
            };

            if let Some(result) = locator.search_function_position(&text, function_name) {
                let position = offset_to_position(&text, result.index);
                info!(
                    path = %path.display(),
                    line = position.line + 1,
                    "function definition found"
                );
                return Ok(NavigationOutcome::Resolved(SourceLocation {
                    path: path.clone(),
                    offset: result.index,
                    position,
                }));
            }
            debug!(path = %path.display(), "no match in candidate");
        }

        info!(function = function_name, "function not found in any candidate");
        Ok(NavigationOutcome::NotFound {
            function: function_name.to_string(),
            participant: participant.to_string(),
        })
    }

    /// Narrow the workspace file set using the participant name.
    ///
    /// Phase 1 matches file names (prefix) restricted to the language's
    /// extensions. If that yields nothing, phase 2 falls back to scanning
    /// every file of the language for plain substring containment of the
    /// participant name, fanning out the reads concurrently; each read may
    /// fail independently without aborting the batch.
    async fn scope_candidates(&self, participant: &str, language: Language) -> Vec<PathBuf> {
        let extensions = language.extensions();

        let by_name = self
            .workspace
            .files_matching_name(participant, extensions)
            .await;
        if !by_name.is_empty() {
            debug!(count = by_name.len(), "participant matched by file name");
            return by_name;
        }

        debug!(participant, "file-name scoping empty, scanning file contents");
        let all_files = self.workspace.files_with_extensions(extensions).await;
        let reads = all_files.into_iter().map(|path| async move {
            let contents = self.workspace.read_text(&path).await;
            (path, contents)
        });

        join_all(reads)
            .await
            .into_iter()
            .filter_map(|(path, contents)| match contents {
                Ok(text) if text.contains(participant) => Some(path),
                Ok(_) => None,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping file during content scan");
                    None
                }
            })
            .collect()
    }
}
