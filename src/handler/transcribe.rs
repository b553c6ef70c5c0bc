//! Audio-upload handler: starts an asynchronous transcription job

use std::sync::Arc;

use uuid::Uuid;

use crate::config::{Settings, TranscriptionSettings};
use crate::event::{HandlerResponse, StorageEvent};
use crate::transcription::{JobSettings, Media, SpeechService, StartJobRequest};

/// The only object key this pipeline transcribes. Everything else is
/// skipped so that notifications on a shared bucket cannot loop back into
/// the pipeline.
pub const AUDIO_OBJECT_KEY: &str = "dialog.mp3";

pub struct TranscriptionHandler {
    speech: Arc<dyn SpeechService>,
    config: TranscriptionSettings,
}

impl TranscriptionHandler {
    pub fn new(speech: Arc<dyn SpeechService>, settings: &Settings) -> Self {
        Self {
            speech,
            config: settings.transcription.clone(),
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

        if key != AUDIO_OBJECT_KEY {
            tracing::info!("This pipeline only transcribes {AUDIO_OBJECT_KEY}. Received: {key}");
            return HandlerResponse::ok(format!("Skipping file {key} - not {AUDIO_OBJECT_KEY}"));
        }

        let output_bucket = self.config.output_bucket.trim();
        if output_bucket.is_empty() {
            tracing::error!(
                "transcription.output_bucket is not set; configure it or export RECAP_TRANSCRIPT_BUCKET"
            );
            return HandlerResponse::failure(
                "Error occurred: transcription.output_bucket is not set \
                 (export RECAP_TRANSCRIPT_BUCKET)",
            );
        }

        let job_name = format!("transcription-job-{}", Uuid::new_v4());
        let request = StartJobRequest {
            transcription_job_name: job_name.clone(),
            media: Media {
                media_file_uri: format!("s3://{bucket}/{key}"),
            },
            media_format: self.config.media_format.clone(),
            language_code: self.config.language_code.clone(),
            output_bucket_name: output_bucket.to_string(),
            output_key: format!("{job_name}-transcript.json"),
            settings: JobSettings {
                show_speaker_labels: true,
                max_speaker_labels: self.config.max_speakers,
            },
        };

        if let Err(e) = self.speech.start_transcription_job(&request).await {
            tracing::error!("Error occurred: {e:#}");
            return HandlerResponse::failure(format!("Error occurred: {e:#}"));
        }

        tracing::info!("Started transcription job: {job_name} for file: {key}");
        HandlerResponse::ok(format!(
            "Submitted transcription job for {key} from bucket {bucket}."
        ))
    }
}
