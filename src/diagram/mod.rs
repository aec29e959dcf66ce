//! Mermaid sequence-diagram model.
//!
//! Holds an immutable snapshot of the diagram text plus the programming
//! language extension derived from its title line. Updates produce a new
//! snapshot rather than mutating in place, so reacting to document changes
//! is deterministic and testable without a live editor.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Marker phrase identifying the diagram title line that names the source
/// file the diagram was generated from.
///
/// Expected format: `Title Sequence diagram of Example.py` — the extension
/// after the last dot is the active language indicator.
pub const SEQUENCE_DIAGRAM_MARKER: &str = "Title Sequence diagram of";

/// Immutable snapshot of a sequence diagram document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramState {
    /// Full diagram text.
    text: String,
    /// Language extension extracted from the title line, if present.
    language_extension: Option<String>,
}

impl DiagramState {
    /// Build a snapshot from diagram text, deriving the language extension
    /// from the title marker line.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let language_extension = extract_language_extension(&text);
        Self {
            text,
            language_extension,
        }
    }

    /// Produce the successor snapshot for a document change. The extension
    /// is recomputed from the new text; the old snapshot is left untouched.
    pub fn apply_change(&self, new_text: impl Into<String>) -> Self {
        let next = Self::new(new_text);
        if next.language_extension != self.language_extension {
            debug!(
                old = ?self.language_extension,
                new = ?next.language_extension,
                "diagram language extension changed"
            );
        }
        next
    }

    /// The diagram text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The derived language extension, or a configuration error if the
    /// title marker line is missing or carries no extension.
    pub fn language_extension(&self) -> Result<&str> {
        self.language_extension
            .as_deref()
            .ok_or_else(|| Error::MissingDiagramTitle {
                marker: SEQUENCE_DIAGRAM_MARKER.to_string(),
            })
    }
}

/// Extract the language extension from the diagram title line: the first
/// line containing [`SEQUENCE_DIAGRAM_MARKER`], taking everything after the
/// last `.`, trimmed and lowercased.
fn extract_language_extension(text: &str) -> Option<String> {
    for line in text.lines() {
        if !line.contains(SEQUENCE_DIAGRAM_MARKER) {
            continue;
        }
        if let Some(last_dot) = line.rfind('.') {
            let extension = line[last_dot + 1..].trim().to_lowercase();
            if !extension.is_empty() {
                debug!(extension, "extracted language extension from diagram title");
                return Some(extension);
            }
        }
    }
    None
}

/// Extract the function name from a diagram message label by stripping
/// everything from the first `(` onward and trimming whitespace.
///
/// Message labels conventionally read `functionName(args)`.
pub fn function_name_from_label(label: &str) -> &str {
    match label.find('(') {
        Some(paren) => label[..paren].trim(),
        None => label.trim(),
    }
}

/// Extract the participant name from a participant label.
///
/// Mermaid renders `Alias:ClassName` participants with a leading colon
/// segment; prefer that segment with the colon stripped, otherwise use the
/// full label trimmed.
pub fn participant_from_label(label: &str) -> &str {
    let trimmed = label.trim();
    match trimmed.strip_prefix(':') {
        Some(rest) => rest.trim(),
        None => trimmed,
    }
}
