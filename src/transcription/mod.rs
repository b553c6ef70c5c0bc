//! Speech-to-text job submission
//!
//! Transcription runs as an asynchronous job inside the external speech
//! service: the handler submits the job and never observes completion. The
//! finished transcript appears in object storage and triggers the
//! summarization handler through a storage notification.

mod client;
mod job;

pub use client::TranscribeClient;
pub use job::{JobSettings, Media, SpeechService, StartJobRequest};
