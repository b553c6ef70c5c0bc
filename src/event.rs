//! Storage notification events and handler response envelopes
//!
//! The upload notification arrives as the provider's JSON document; only the
//! first record is ever consulted. Both shapes are parsed into typed structs
//! at the boundary instead of being walked by key lookup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("invalid event document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("event contains no records")]
    NoRecords,
}

/// An object-upload notification as delivered by the storage service.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageEvent {
    #[serde(rename = "Records")]
    pub records: Vec<StorageRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: BucketRef,
    pub object: ObjectRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRef {
    pub key: String,
}

impl StorageEvent {
    /// Parse an event document from its JSON representation.
    pub fn from_json(input: &str) -> Result<Self, EventError> {
        let event: StorageEvent = serde_json::from_str(input)?;
        Ok(event)
    }

    /// The single record this pipeline acts on.
    pub fn first_record(&self) -> Result<&StorageRecord, EventError> {
        self.records.first().ok_or(EventError::NoRecords)
    }
}

impl StorageRecord {
    pub fn bucket(&self) -> &str {
        &self.s3.bucket.name
    }

    pub fn key(&self) -> &str {
        &self.s3.object.key
    }
}

/// Response envelope returned by both handlers.
///
/// Skips are reported as success with an explanatory message; only caught
/// upstream failures produce a 500.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded message string.
    pub body: String,
}

impl HandlerResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: serde_json::Value::String(message.into()).to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            body: serde_json::Value::String(message.into()).to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload_event(bucket: &str, key: &str) -> String {
        format!(
            r#"{{"Records":[{{"s3":{{"bucket":{{"name":"{bucket}"}},"object":{{"key":"{key}"}}}}}}]}}"#
        )
    }

    #[test]
    fn parses_upload_notification() {
        let event = StorageEvent::from_json(&upload_event("call-audio", "dialog.mp3"))
            .expect("event should parse");

        let record = event.first_record().expect("record should exist");
        assert_eq!(record.bucket(), "call-audio");
        assert_eq!(record.key(), "dialog.mp3");
    }

    #[test]
    fn empty_record_list_is_an_error() {
        let event = StorageEvent::from_json(r#"{"Records":[]}"#).expect("event should parse");

        assert!(matches!(event.first_record(), Err(EventError::NoRecords)));
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(StorageEvent::from_json(r#"{"Records":"#).is_err());
        assert!(StorageEvent::from_json(r#"{"records":[]}"#).is_err());
    }

    #[test]
    fn response_serializes_with_status_code_key() {
        let response = HandlerResponse::ok("Submitted transcription job for dialog.mp3");
        let json = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(json["statusCode"], 200);
        assert_eq!(
            json["body"],
            "\"Submitted transcription job for dialog.mp3\""
        );
    }

    #[test]
    fn failure_carries_500() {
        let response = HandlerResponse::failure("Error occurred: boom");
        assert!(!response.is_success());
        assert_eq!(response.status_code, 500);
        assert!(response.body.contains("boom"));
    }
}
