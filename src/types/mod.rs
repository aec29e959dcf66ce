//! Shared types for mermaid-nav.

pub mod location;

pub use location::{
    offset_to_position, NavigationOutcome, Position, SearchResult, SourceLocation,
};
