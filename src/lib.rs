//! mermaid-nav - Sequence-diagram to source navigation
//!
//! Helps a developer reading an unfamiliar codebase navigate from a rendered
//! Mermaid sequence diagram back to the corresponding function definition in
//! source. Given a diagram message label (`functionName(...)`) and the
//! participant nearest that message's arrow endpoint, the navigator locates
//! the matching declaration in the workspace's source files.
//!
//! # Architecture
//!
//! Leaf-first:
//!
//! 1. **Pattern library** (`locator::patterns`) - per-language ordered
//!    declaration templates with a function-name placeholder
//! 2. **Locator** (`locator`) - compiles templates for a concrete name and
//!    scans a buffer for the declaration offset; `Language` doubles as the
//!    extension-dispatch factory
//! 3. **Navigator** (`navigator`) - scopes candidate files by participant
//!    name (file name first, content containment as fallback) and runs the
//!    locator until a match
//! 4. **Preview** (`preview`, `watcher`, `diagram`) - the live diagram
//!    session: snapshot model, single-session registry, debounced re-render
//!    on file changes
//!
//! Matching is lexical, not semantic: no AST, no overload resolution, no
//! cross-file symbol tables.

pub mod config;
pub mod diagram;
pub mod error;
pub mod locator;
pub mod navigator;
pub mod preview;
pub mod types;
pub mod watcher;
pub mod workspace;

pub use error::{Error, Result};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum source file size scanned during a search (1MB).
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Default quiet interval for coalescing diagram re-renders (milliseconds).
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
