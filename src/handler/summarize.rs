//! Transcript-upload handler: formats, summarizes, and stores the result

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bytes::Bytes;

use crate::config::Settings;
use crate::event::{HandlerResponse, StorageEvent};
use crate::llm::ModelProvider;
use crate::prompt::build_summary_prompt;
use crate::storage::ObjectStore;
use crate::transcript::{format_dialogue, TranscriptDocument};

/// Only keys carrying this suffix are summarized; the handler's own output
/// would otherwise re-trigger it through the bucket notification.
pub const TRANSCRIPT_SUFFIX: &str = "-transcript.json";

/// Key the summary is written to, in the same bucket as the transcript.
/// Concurrent summarizations race on this key with last-write-wins
/// semantics; the single-result-per-bucket design leaves that unguarded.
pub const RESULT_KEY: &str = "results.txt";

pub struct SummarizationHandler {
    store: Arc<dyn ObjectStore>,
    model: Arc<dyn ModelProvider>,
    template_path: PathBuf,
}

impl SummarizationHandler {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        model: Arc<dyn ModelProvider>,
        settings: &Settings,
    ) -> Self {
        Self {
            store,
            model,
            template_path: settings.prompt.template_path.clone(),
        }
    }

    /// Handle one upload notification.
    pub async fn handle(&self, event: &StorageEvent) -> HandlerResponse {
        let record = match event.first_record() {
            Ok(record) => record,
            Err(e) => return HandlerResponse::failure(format!("Error occurred: {e}")),
        };
        let bucket = record.bucket();
        let key = record.key();

        if !key.contains(TRANSCRIPT_SUFFIX) {
            tracing::info!(
                "This pipeline only summarizes *{TRANSCRIPT_SUFFIX} files. Received: {key}"
            );
            return HandlerResponse::ok(format!(
                "Skipping file {key} - not a transcript JSON file"
            ));
        }

        match self.summarize_object(bucket, key).await {
            Ok(summary) => HandlerResponse::ok(format!(
                "Successfully summarized {key} from bucket {bucket}. Summary: {summary}"
            )),
            Err(e) => {
                tracing::error!("Error occurred: {e:#}");
                HandlerResponse::failure(format!("Error occurred: {e:#}"))
            }
        }
    }

    async fn summarize_object(&self, bucket: &str, key: &str) -> Result<String> {
        let body = self.store.get_object(bucket, key).await?;
        let content =
            String::from_utf8(body.to_vec()).context("Transcript object is not valid UTF-8")?;

        let document = TranscriptDocument::from_json(&content)?;
        let dialogue = format_dialogue(&document)?;
        tracing::info!("Successfully read file {key} from bucket {bucket}.");
        tracing::debug!("Transcript length: {} characters", dialogue.len());

        let prompt = build_summary_prompt(&self.template_path, &dialogue)?;
        let summary = self.model.summarize(&prompt).await?;

        self.store
            .put_object(bucket, RESULT_KEY, Bytes::from(summary.clone()), "text/plain")
            .await?;
        tracing::info!("Summary saved to {bucket}/{RESULT_KEY}");

        Ok(summary)
    }
}
