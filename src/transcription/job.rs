//! Job-start wire document and the speech service port

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Request document for starting an asynchronous transcription job.
///
/// Field names follow the speech service's wire convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartJobRequest {
    pub transcription_job_name: String,
    pub media: Media,
    pub media_format: String,
    pub language_code: String,
    pub output_bucket_name: String,
    pub output_key: String,
    pub settings: JobSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Media {
    pub media_file_uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobSettings {
    pub show_speaker_labels: bool,
    pub max_speaker_labels: u32,
}

/// Port for the external speech-to-text service.
#[async_trait]
pub trait SpeechService: Send + Sync {
    /// Submit a transcription job. Fire-and-forget: the call returns once
    /// the service accepts the job; completion is observed only through the
    /// output object appearing in storage.
    async fn start_transcription_job(&self, request: &StartJobRequest) -> Result<()>;
}
