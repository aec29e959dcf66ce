//! mermaid-nav command-line entry point.
//!
//! Thin glue over the library: stands in for the editor UI the navigation
//! core was designed to serve.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use mermaid_nav::config::{Args, Command, Config};
use mermaid_nav::diagram::{function_name_from_label, participant_from_label, DiagramState};
use mermaid_nav::error::Result;
use mermaid_nav::locator::Language;
use mermaid_nav::navigator::Navigator;
use mermaid_nav::preview::{Debouncer, PreviewRegistry};
use mermaid_nav::types::NavigationOutcome;
use mermaid_nav::watcher::{ChangeKind, DiagramWatcher};
use mermaid_nav::workspace::Workspace;
use mermaid_nav::VERSION;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let config = Config::from(&args);

    info!("mermaid-nav v{}", VERSION);
    info!("Workspace: {:?}", config.workspace);

    match args.command {
        Command::Jump {
            diagram,
            message,
            participant,
            json,
        } => run_jump(&config, diagram, &message, &participant, json).await,
        Command::Watch { diagram } => run_watch(&config, diagram).await,
        Command::Languages => {
            for language in Language::ALL {
                println!("{}: {}", language.name(), language.extensions().join(", "));
            }
            Ok(())
        }
    }
}

/// Resolve one diagram click to a source location and print the outcome.
async fn run_jump(
    config: &Config,
    diagram: PathBuf,
    message: &str,
    participant_label: &str,
    json: bool,
) -> Result<()> {
    let diagram_text = tokio::fs::read_to_string(&diagram).await?;
    let state = DiagramState::new(diagram_text);
    let extension = state.language_extension()?;

    let function_name = function_name_from_label(message);
    let participant = participant_from_label(participant_label);

    let workspace = Workspace::new(&config.workspace, config.max_file_size);
    let navigator = Navigator::new(workspace);
    let outcome = navigator
        .jump_to_function(function_name, participant, extension)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.message());
    }

    if !matches!(outcome, NavigationOutcome::Resolved(_)) {
        std::process::exit(1);
    }
    Ok(())
}

/// Keep a preview session open and re-render it on debounced file changes.
async fn run_watch(config: &Config, diagram: PathBuf) -> Result<()> {
    let text = tokio::fs::read_to_string(&diagram).await?;

    let registry = Arc::new(PreviewRegistry::new());
    let session = registry.show(&diagram, text).await;
    match session.state.language_extension() {
        Ok(extension) => info!(extension, "preview session open"),
        Err(e) => warn!("{}", e),
    }

    let mut watcher = DiagramWatcher::new(&diagram);
    let mut changes = watcher.start()?;
    let debouncer = Debouncer::new(Duration::from_millis(config.debounce_ms));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
            change = changes.recv() => {
                let Some(change) = change else { break };
                match change.kind {
                    ChangeKind::Deleted => {
                        warn!(path = %change.path.display(), "diagram file deleted");
                    }
                    ChangeKind::Modified => {
                        let registry = registry.clone();
                        let diagram = diagram.clone();
                        debouncer
                            .schedule(async move {
                                refresh_preview(&registry, &diagram).await;
                            })
                            .await;
                    }
                }
            }
        }
    }

    debouncer.cancel().await;
    watcher.stop();
    registry.dispose().await;
    Ok(())
}

/// Re-read the diagram and apply the change to the open session.
async fn refresh_preview(registry: &PreviewRegistry, diagram: &PathBuf) {
    let new_text = match tokio::fs::read_to_string(diagram).await {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %diagram.display(), error = %e, "failed to re-read diagram");
            return;
        }
    };

    match registry.apply_change(new_text).await {
        Ok(session) => {
            let extension = session
                .state
                .language_extension()
                .map(str::to_string)
                .unwrap_or_else(|_| "?".to_string());
            info!(
                revision = session.revision,
                extension,
                bytes = session.state.text().len(),
                "preview re-rendered"
            );
        }
        Err(e) => warn!("{}", e),
    }
}
