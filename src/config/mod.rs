//! Configuration management for mermaid-nav.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command-line arguments for mermaid-nav.
#[derive(Parser, Debug, Clone)]
#[command(name = "mermaid-nav")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Navigate from Mermaid sequence-diagram messages to function definitions")]
pub struct Args {
    /// Workspace root directory to search for source files
    #[arg(short, long, env = "MERMAID_NAV_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, env = "MERMAID_NAV_DEBUG")]
    pub debug: bool,

    /// Quiet interval for coalescing diagram re-renders (milliseconds)
    #[arg(long, default_value = "300", env = "MERMAID_NAV_DEBOUNCE_MS")]
    pub debounce_ms: u64,

    /// Maximum source file size to scan (bytes)
    #[arg(long, default_value = "1048576", env = "MERMAID_NAV_MAX_FILE_SIZE")]
    pub max_file_size: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Jump from a diagram message to the matching function definition
    Jump {
        /// Path to the Mermaid sequence-diagram file
        diagram: PathBuf,

        /// Message label as rendered on the arrow, e.g. "saveOrder(order)"
        #[arg(short, long)]
        message: String,

        /// Label of the participant nearest the arrow endpoint
        #[arg(short, long)]
        participant: String,

        /// Emit the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Watch a diagram file and re-render the preview session on changes
    Watch {
        /// Path to the Mermaid sequence-diagram file
        diagram: PathBuf,
    },

    /// List supported languages and their file extensions
    Languages,
}

/// Runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Workspace root directory
    pub workspace: PathBuf,
    /// Debug mode
    pub debug: bool,
    /// Re-render debounce interval (milliseconds)
    pub debounce_ms: u64,
    /// Maximum source file size (bytes)
    pub max_file_size: u64,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            workspace: args.workspace.clone().unwrap_or_else(|| {
                std::env::current_dir().expect("Failed to get current directory")
            }),
            debug: args.debug,
            debounce_ms: args.debounce_ms,
            max_file_size: args.max_file_size,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().expect("Failed to get current directory"),
            debug: false,
            debounce_ms: crate::DEFAULT_DEBOUNCE_MS,
            max_file_size: crate::MAX_FILE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert!(!config.debug);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.max_file_size, 1024 * 1024);
    }

    #[test]
    fn test_args_to_config() {
        let args = Args {
            workspace: Some(PathBuf::from("/test/workspace")),
            debug: true,
            debounce_ms: 150,
            max_file_size: 500_000,
            command: Command::Languages,
        };

        let config = Config::from(&args);
        assert_eq!(config.workspace, PathBuf::from("/test/workspace"));
        assert!(config.debug);
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.max_file_size, 500_000);
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = Config {
            workspace: PathBuf::from("/tmp/ws"),
            debug: true,
            debounce_ms: 200,
            max_file_size: 2_097_152,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"debounce_ms\":200"));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.workspace, PathBuf::from("/tmp/ws"));
        assert!(parsed.debug);
        assert_eq!(parsed.max_file_size, 2_097_152);
    }

    #[test]
    fn test_args_parse_jump() {
        let args = Args::parse_from([
            "mermaid-nav",
            "--workspace",
            "/tmp/ws",
            "jump",
            "diagram.mmd",
            "--message",
            "saveOrder(order)",
            "--participant",
            ":OrderService",
        ]);

        assert_eq!(args.workspace, Some(PathBuf::from("/tmp/ws")));
        match args.command {
            Command::Jump {
                diagram,
                message,
                participant,
                json,
            } => {
                assert_eq!(diagram, PathBuf::from("diagram.mmd"));
                assert_eq!(message, "saveOrder(order)");
                assert_eq!(participant, ":OrderService");
                assert!(!json);
            }
            other => panic!("expected Jump, got {:?}", other),
        }
    }
}
