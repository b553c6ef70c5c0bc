//! CLI command implementations
//!
//! The binary plays the role of the platform invocation shim: each run reads
//! one storage notification, dispatches it to a handler, and prints the
//! response envelope to stdout.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::event::{HandlerResponse, StorageEvent};
use crate::handler::{SummarizationHandler, TranscriptionHandler};
use crate::llm::build_model_provider;
use crate::storage::build_object_store;
use crate::transcription::TranscribeClient;

/// Run the transcription handler against one event document.
pub async fn run_transcribe(settings: &Settings, event_path: Option<PathBuf>) -> Result<()> {
    let event = load_event(event_path.as_deref())?;

    let speech = Arc::new(TranscribeClient::from_settings(settings)?);
    let handler = TranscriptionHandler::new(speech, settings);

    let response = handler.handle(&event).await;
    print_response(&response)
}

/// Run the summarization handler against one event document.
pub async fn run_summarize(settings: &Settings, event_path: Option<PathBuf>) -> Result<()> {
    let event = load_event(event_path.as_deref())?;

    let store = build_object_store(settings)?;
    let model = build_model_provider(settings)?;
    let handler = SummarizationHandler::new(store, model, settings);

    let response = handler.handle(&event).await;
    print_response(&response)
}

fn load_event(path: Option<&Path>) -> Result<StorageEvent> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read event from stdin")?;
            buffer
        }
    };

    StorageEvent::from_json(&raw).context("Failed to parse event document")
}

fn print_response(response: &HandlerResponse) -> Result<()> {
    println!("{}", serde_json::to_string(response)?);
    Ok(())
}

/// Configuration management commands
pub fn config_command(settings: &Settings, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let content = toml::to_string_pretty(settings)?;
            println!("{}", content);
        }
        ConfigCommand::Path => {
            println!("{}", Settings::config_path()?.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}
