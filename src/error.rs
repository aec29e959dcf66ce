//! Error types for mermaid-nav.
//!
//! The taxonomy distinguishes fatal conditions (reported immediately, no file
//! search attempted) from informational outcomes such as "function not found",
//! which are modeled as [`crate::types::NavigationOutcome`] variants instead.

use thiserror::Error;

/// Result type alias for mermaid-nav operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mermaid-nav.
#[derive(Error, Debug)]
pub enum Error {
    // ===== Input Validation =====
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported language extension: '{extension}' (supported: {supported})")]
    UnsupportedLanguage {
        extension: String,
        supported: String,
    },

    // ===== Diagram Errors =====
    #[error(
        "Cannot extract programming language from diagram title. \
         Expected a line like: \"{marker} Example.py\""
    )]
    MissingDiagramTitle { marker: String },

    // ===== I/O Errors =====
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File too large: {path} ({size} bytes)")]
    FileTooLarge { path: String, size: u64 },

    // ===== Watcher Errors =====
    #[error("Watch error: {0}")]
    Watch(String),

    // ===== Internal Errors =====
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an `UnsupportedLanguage` error from the attempted extension and
    /// the set of extensions the factory knows about.
    pub fn unsupported_language(extension: impl Into<String>, supported: &[&str]) -> Self {
        Self::UnsupportedLanguage {
            extension: extension.into(),
            supported: supported.join(", "),
        }
    }

    /// Check whether this error is fatal to a navigation request.
    ///
    /// Per-file read errors are skippable during a scan; everything else
    /// terminates the request.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::FileTooLarge { .. })
    }
}
