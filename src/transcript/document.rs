//! Typed model of the speech service's transcript output

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("invalid transcript document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed transcript item at index {index}: no alternatives")]
    MalformedItem { index: usize },
}

/// Transcript JSON as written by the speech service:
/// `{"results": {"items": [...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptDocument {
    pub results: TranscriptResults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptResults {
    #[serde(default)]
    pub items: Vec<TranscriptItem>,
}

/// A single timed item, either a word or a punctuation mark.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,

    /// Absent on items the service did not attribute to a speaker.
    #[serde(default)]
    pub speaker_label: Option<String>,

    /// Candidate contents, best first.
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Pronunciation,
    Punctuation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Alternative {
    pub content: String,
}

impl TranscriptDocument {
    /// Parse a transcript document from its JSON representation.
    pub fn from_json(input: &str) -> Result<Self, TranscriptError> {
        let document: TranscriptDocument = serde_json::from_str(input)?;
        Ok(document)
    }
}

impl TranscriptItem {
    /// Best-candidate content, if the item carries any.
    pub fn content(&self) -> Option<&str> {
        self.alternatives.first().map(|a| a.content.as_str())
    }
}
