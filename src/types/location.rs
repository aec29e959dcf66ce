//! Source-location types produced by the locator and the navigator.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of a single locator search: the offset into the source text where
/// the matched declaration begins.
///
/// The offset is a byte offset into the buffer the locator scanned, and may
/// include leading indentation captured by the declaration pattern. Produced
/// fresh per search call; immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Zero-based byte offset of the start of the matched declaration.
    pub index: usize,
}

/// A zero-based line/column position within a text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column (byte offset within the line).
    pub column: u32,
}

/// A resolved source location: file, raw offset and line/column position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path of the file containing the definition.
    pub path: PathBuf,
    /// Byte offset of the definition within the file.
    pub offset: usize,
    /// Line/column position of the definition.
    pub position: Position,
}

/// Terminal outcome of a navigation request.
///
/// `NoCandidateFiles` and `NotFound` are informational, not errors: the
/// request ran to completion and simply found nothing. Fatal conditions
/// (blank inputs, unsupported extension) surface as [`crate::Error`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// The function definition was located.
    Resolved(SourceLocation),
    /// Scoping produced zero candidate files for the participant.
    NoCandidateFiles { participant: String },
    /// Every candidate file was scanned without a match.
    NotFound {
        function: String,
        participant: String,
    },
}

impl NavigationOutcome {
    /// Render the outcome as the user-facing status message.
    pub fn message(&self) -> String {
        match self {
            Self::Resolved(loc) => format!(
                "{}:{}:{}",
                loc.path.display(),
                loc.position.line + 1,
                loc.position.column + 1
            ),
            Self::NoCandidateFiles { participant } => {
                format!("no files found for participant '{}'", participant)
            }
            Self::NotFound {
                function,
                participant,
            } => format!("{} was not found in participant '{}'", function, participant),
        }
    }
}

/// Convert a byte offset into a zero-based line/column position by scanning
/// line breaks.
///
/// Offsets past the end of the buffer clamp to the final position.
pub fn offset_to_position(text: &str, offset: usize) -> Position {
    let offset = offset.min(text.len());
    let before = &text[..offset];

    let line = before.bytes().filter(|&b| b == b'\n').count() as u32;
    let column = match before.rfind('\n') {
        Some(nl) => (offset - nl - 1) as u32,
        None => offset as u32,
    };

    Position { line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_at_start() {
        assert_eq!(
            offset_to_position("def foo():\n    pass\n", 0),
            Position { line: 0, column: 0 }
        );
    }

    #[test]
    fn test_offset_on_second_line() {
        let text = "line one\nline two\n";
        // offset of 'l' in "line two"
        assert_eq!(
            offset_to_position(text, 9),
            Position { line: 1, column: 0 }
        );
        // offset of 't' in "two"
        assert_eq!(
            offset_to_position(text, 14),
            Position { line: 1, column: 5 }
        );
    }

    #[test]
    fn test_offset_clamps_past_end() {
        let text = "abc";
        assert_eq!(
            offset_to_position(text, 100),
            Position { line: 0, column: 3 }
        );
    }

    #[test]
    fn test_offset_with_indentation() {
        let text = "class A:\n    def method(self):\n        pass\n";
        let idx = text.find("    def").unwrap();
        assert_eq!(
            offset_to_position(text, idx),
            Position { line: 1, column: 0 }
        );
    }

    #[test]
    fn test_outcome_messages() {
        let resolved = NavigationOutcome::Resolved(SourceLocation {
            path: PathBuf::from("src/order.py"),
            offset: 42,
            position: Position { line: 3, column: 4 },
        });
        assert_eq!(resolved.message(), "src/order.py:4:5");

        let none = NavigationOutcome::NoCandidateFiles {
            participant: "OrderService".to_string(),
        };
        assert_eq!(none.message(), "no files found for participant 'OrderService'");

        let missing = NavigationOutcome::NotFound {
            function: "process_order".to_string(),
            participant: "OrderService".to_string(),
        };
        assert_eq!(
            missing.message(),
            "process_order was not found in participant 'OrderService'"
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = NavigationOutcome::NotFound {
            function: "foo".to_string(),
            participant: "Bar".to_string(),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"outcome\":\"not_found\""));

        let parsed: NavigationOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outcome);
    }

    #[test]
    fn test_search_result_serialization() {
        let result = SearchResult { index: 17 };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, "{\"index\":17}");
    }
}
