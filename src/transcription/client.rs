//! HTTP client for the speech service's job API

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::Settings;
use crate::transcription::{SpeechService, StartJobRequest};

const TARGET_HEADER: &str = "X-Amz-Target";
const START_JOB_TARGET: &str = "Transcribe.StartTranscriptionJob";
const WIRE_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Speech service client posting job-start documents to the configured
/// endpoint. Request authorization is expected to be handled in front of
/// the endpoint (gateway or credential-injecting proxy).
pub struct TranscribeClient {
    http: Client,
    endpoint: String,
}

impl TranscribeClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .context("Failed to build speech service HTTP client")?,
            endpoint: settings
                .transcription
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

#[async_trait]
impl SpeechService for TranscribeClient {
    async fn start_transcription_job(&self, request: &StartJobRequest) -> Result<()> {
        let body = serde_json::to_vec(request).context("Failed to encode job request")?;

        let response = self
            .http
            .post(self.endpoint.as_str())
            .header(TARGET_HEADER, START_JOB_TARGET)
            .header(reqwest::header::CONTENT_TYPE, WIRE_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .context("Speech service request failed")?;

        response
            .error_for_status()
            .context("Speech service returned an error status")?;

        Ok(())
    }
}
